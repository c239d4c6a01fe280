use carousel_rs::api::{
    AutoScroll, Carousel, CarouselConfig, NavigationSnapshot, PaginationSnapshot,
    STORED_SNAPSHOT_SCHEMA_VERSION, StoredSnapshot,
};
use carousel_rs::error::CarouselError;
use carousel_rs::core::Slide;
use carousel_rs::render::NullRenderer;

fn slides(count: usize) -> Vec<Slide> {
    (0..count).map(|i| Slide::new(format!("{i}"))).collect()
}

#[test]
fn snapshot_reports_decorator_and_layout_state() {
    let mut carousel = Carousel::new(
        NullRenderer::default(),
        slides(4),
        CarouselConfig::new("snap")
            .with_slides_visible(2)
            .with_slides_to_scroll(2)
            .with_pagination(true)
            .with_auto_scroll_ms(2_000),
    )
    .expect("carousel init");
    // Autoplay took its first step during construction.
    assert_eq!(carousel.current_item(), 1);
    carousel.go_to_item(2);

    let snapshot = carousel.snapshot();
    assert_eq!(snapshot.name, "snap");
    assert_eq!(snapshot.current_item, 2);
    assert_eq!(snapshot.slides_visible, 2);
    assert_eq!(snapshot.layout.track_width_percent, 200.0);
    assert_eq!(snapshot.translate_percent, -50.0);
    assert_eq!(
        snapshot.navigation,
        Some(NavigationSnapshot {
            prev_hidden: false,
            next_hidden: true,
        })
    );
    assert_eq!(
        snapshot.pagination,
        Some(PaginationSnapshot {
            page_count: 2,
            active_page: Some(1),
        })
    );
    let autoplay = snapshot.autoplay.expect("autoplay state");
    assert!(autoplay.running);
    assert_eq!(autoplay.interval_ms, 2_000);
}

#[test]
fn stored_snapshot_verifies_against_the_same_state() {
    let mut carousel = Carousel::new(
        NullRenderer::default(),
        slides(4),
        CarouselConfig::new("snap").with_slides_visible(2),
    )
    .expect("carousel init");

    let stored = carousel.stored_snapshot_json().expect("serialize stored");
    assert!(stored.contains(&format!(
        "\"schema_version\": {STORED_SNAPSHOT_SCHEMA_VERSION}"
    )));
    let expected = StoredSnapshot::from_json_str(&stored).expect("parse stored");
    assert_eq!(expected.snapshot, carousel.snapshot());
    carousel
        .verify_snapshot(&expected.snapshot)
        .expect("unchanged state verifies");

    carousel.go_to_item(1);
    match carousel.verify_snapshot(&expected.snapshot) {
        Err(CarouselError::SnapshotMismatch(fields)) => {
            assert_eq!(fields, vec!["current_item", "translate_percent", "navigation"]);
        }
        other => panic!("expected a snapshot mismatch, got {other:?}"),
    }
}

#[test]
fn layout_comparison_tolerates_float_drift() {
    let carousel = Carousel::new(
        NullRenderer::default(),
        slides(3),
        CarouselConfig::new("drift").with_slides_visible(2),
    )
    .expect("carousel init");
    let mut expected = carousel.snapshot();
    expected.layout.slide_width_percent += 1e-12;
    assert!(carousel.snapshot().mismatched_fields(&expected).is_empty());

    expected.layout.slide_width_percent += 1.0;
    assert_eq!(carousel.snapshot().mismatched_fields(&expected), vec!["layout"]);
}

#[test]
fn stored_snapshot_rejects_unknown_schema_version_and_bare_snapshots() {
    let carousel = Carousel::new(NullRenderer::default(), slides(2), CarouselConfig::new("v"))
        .expect("carousel init");
    let stored = carousel
        .stored_snapshot_json()
        .expect("serialize stored")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(StoredSnapshot::from_json_str(&stored).is_err());

    let bare = carousel.snapshot_json_pretty().expect("serialize bare");
    assert!(StoredSnapshot::from_json_str(&bare).is_err());
}

#[test]
fn config_deserializes_dom_style_options() {
    let config: CarouselConfig = serde_json::from_str(
        r#"{
            "name": "home",
            "slidesToScroll": 2,
            "slidesVisible": 3,
            "loop": true,
            "pagination": true,
            "imagesNavigation": { "prev": "assets/2.png", "next": "assets/2.png" },
            "autoScroll": 3000
        }"#,
    )
    .expect("parse config");

    assert_eq!(config.slides_to_scroll, 2);
    assert_eq!(config.slides_visible, 3);
    assert!(config.loop_enabled);
    assert!(config.navigation);
    assert_eq!(config.viewport_width, 1024);
    assert_eq!(config.auto_scroll, AutoScroll::EveryMs(3_000));
    assert_eq!(
        config
            .images_navigation
            .as_ref()
            .and_then(|images| images.pair()),
        Some(("assets/2.png", "assets/2.png"))
    );

    let disabled: CarouselConfig =
        serde_json::from_str(r#"{ "name": "x", "auto_scroll": false }"#).expect("parse config");
    assert_eq!(disabled.auto_scroll, AutoScroll::Disabled);
    assert!(
        serde_json::from_str::<CarouselConfig>(r#"{ "name": "x", "autoScroll": true }"#).is_err()
    );
}

#[test]
fn config_serialization_round_trips() {
    let config = CarouselConfig::new("rt")
        .with_loop(true)
        .with_auto_scroll_ms(750);
    let json = serde_json::to_string(&config).expect("serialize config");
    assert!(json.contains("\"loop\":true"));
    assert!(json.contains("\"auto_scroll\":750"));

    let parsed: CarouselConfig = serde_json::from_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}
