use carousel_rs::api::{Carousel, CarouselConfig};
use carousel_rs::core::{MoveOutcome, Slide};
use carousel_rs::render::NullRenderer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Next,
    Prev,
    GoTo(i64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Prev),
        (-10i64..40).prop_map(Action::GoTo),
    ]
}

fn build(
    count: usize,
    visible: u32,
    scroll: u32,
    loop_enabled: bool,
    viewport_width: u32,
) -> Carousel<NullRenderer> {
    let slides = (0..count).map(|i| Slide::new(format!("{i}"))).collect();
    let config = CarouselConfig::new("prop")
        .with_viewport_width(viewport_width)
        .with_slides_visible(visible)
        .with_slides_to_scroll(scroll)
        .with_loop(loop_enabled)
        .with_pagination(true);
    Carousel::new(NullRenderer::default(), slides, config).expect("carousel init")
}

proptest! {
    #[test]
    fn current_item_stays_in_range_and_one_page_is_active(
        count in 1usize..20,
        visible in 1u32..5,
        scroll in 1u32..5,
        loop_enabled in any::<bool>(),
        viewport_width in prop_oneof![Just(400u32), Just(1280u32)],
        actions in prop::collection::vec(action(), 0..40)
    ) {
        let mut carousel = build(count, visible, scroll, loop_enabled, viewport_width);
        let pages = count.div_ceil(scroll as usize);
        prop_assert_eq!(carousel.pagination_len(), Some(pages));

        for action in actions {
            let before = carousel.current_item();
            let before_translate = carousel.translate_percent();
            let outcome = match action {
                Action::Next => carousel.next(),
                Action::Prev => carousel.prev(),
                Action::GoTo(index) => carousel.go_to_item(index),
            };

            prop_assert!(carousel.current_item() < count);
            if outcome == MoveOutcome::Rejected {
                prop_assert!(!loop_enabled);
                prop_assert_eq!(carousel.current_item(), before);
                prop_assert_eq!(carousel.translate_percent(), before_translate);
            }
            prop_assert_eq!(
                carousel.active_page(),
                Some(carousel.current_item() / scroll as usize)
            );
            let expected = carousel.current_item() as f64 * -100.0 / count as f64;
            prop_assert!((carousel.translate_percent() - expected).abs() <= 1e-9);
        }
    }

    #[test]
    fn any_index_reachable_from_start_when_view_has_more_slides(
        count in 2usize..30,
        visible in 1u32..4,
        index_factor in 0.0f64..1.0
    ) {
        prop_assume!((visible as usize) < count);
        let index = ((count as f64) * index_factor) as usize;
        prop_assume!(index < count);

        let mut carousel = build(count, visible, 1, false, 1280);
        let outcome = carousel.go_to_item(index as i64);

        prop_assert_eq!(outcome, MoveOutcome::Moved { from: 0, to: index });
        prop_assert_eq!(carousel.current_item(), index);
        let expected = index as f64 * -100.0 / count as f64;
        prop_assert!((carousel.translate_percent() - expected).abs() <= 1e-9);
    }

    #[test]
    fn next_then_prev_round_trips_when_next_moves(
        count in 2usize..20,
        visible in 1u32..4,
        scroll in 1u32..4,
        start in 0usize..20
    ) {
        let mut carousel = build(count, visible, scroll, false, 1280);
        carousel.go_to_item(start as i64);
        let before = carousel.current_item();

        if let MoveOutcome::Moved { .. } = carousel.next() {
            prop_assert_eq!(carousel.prev(), MoveOutcome::Moved {
                from: before + scroll as usize,
                to: before,
            });
        } else {
            prop_assert_eq!(carousel.current_item(), before);
        }
    }

    #[test]
    fn loop_mode_never_rejects(
        count in 1usize..15,
        visible in 1u32..5,
        index in -20i64..40
    ) {
        let mut carousel = build(count, visible, 1, true, 1280);
        prop_assert!(!carousel.go_to_item(index).is_rejected());
        prop_assert!(carousel.current_item() < count);
    }
}
