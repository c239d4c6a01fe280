use approx::assert_relative_eq;
use carousel_rs::api::{Carousel, CarouselConfig};
use carousel_rs::core::{MoveOutcome, Slide};
use carousel_rs::render::NullRenderer;

fn carousel(count: usize, config: CarouselConfig) -> Carousel<NullRenderer> {
    let slides = (0..count).map(|i| Slide::new(format!("slide {i}"))).collect();
    Carousel::new(NullRenderer::default(), slides, config).expect("carousel init")
}

fn paged(loop_enabled: bool) -> CarouselConfig {
    CarouselConfig::new("paged")
        .with_slides_visible(2)
        .with_slides_to_scroll(2)
        .with_loop(loop_enabled)
}

#[test]
fn next_advances_by_page_until_forward_boundary() {
    let mut carousel = carousel(6, paged(false));

    assert_eq!(carousel.next(), MoveOutcome::Moved { from: 0, to: 2 });
    assert_relative_eq!(carousel.translate_percent(), -100.0 / 3.0);

    assert_eq!(carousel.next(), MoveOutcome::Moved { from: 2, to: 4 });
    assert_relative_eq!(carousel.translate_percent(), -200.0 / 3.0);

    assert_eq!(carousel.next(), MoveOutcome::Rejected);
    assert_eq!(carousel.current_item(), 4);
    assert_relative_eq!(carousel.translate_percent(), -200.0 / 3.0);
}

#[test]
fn out_of_range_without_loop_is_a_no_op() {
    let mut carousel = carousel(6, paged(false));
    carousel.go_to_item(2);

    assert_eq!(carousel.go_to_item(-1), MoveOutcome::Rejected);
    assert_eq!(carousel.current_item(), 2);
    assert_eq!(carousel.go_to_item(6), MoveOutcome::Rejected);
    assert_eq!(carousel.current_item(), 2);
    assert_relative_eq!(carousel.translate_percent(), -100.0 / 3.0);
}

#[test]
fn out_of_range_with_loop_wraps_to_opposite_end() {
    let mut carousel = carousel(6, paged(true));

    assert_eq!(carousel.go_to_item(-1), MoveOutcome::Wrapped { from: 0, to: 4 });
    assert_eq!(carousel.current_item(), 4);
    assert_eq!(carousel.go_to_item(6), MoveOutcome::Wrapped { from: 4, to: 0 });
    assert_eq!(carousel.current_item(), 0);
    assert_eq!(carousel.translate_percent(), 0.0);
}

#[test]
fn loop_next_at_last_full_view_wraps_to_start() {
    let mut carousel = carousel(
        5,
        CarouselConfig::new("loop")
            .with_slides_visible(2)
            .with_loop(true),
    );

    carousel.go_to_item(3);
    assert_eq!(carousel.next(), MoveOutcome::Wrapped { from: 3, to: 0 });
    assert_eq!(carousel.prev(), MoveOutcome::Wrapped { from: 0, to: 3 });
}

#[test]
fn backward_moves_are_allowed_from_last_view() {
    let mut carousel = carousel(6, paged(false));
    carousel.go_to_item(4);

    assert_eq!(carousel.go_to_item(1), MoveOutcome::Moved { from: 4, to: 1 });
    assert_eq!(carousel.current_item(), 1);
}

#[test]
fn next_then_prev_restores_position() {
    let mut carousel = carousel(8, CarouselConfig::new("steps").with_slides_to_scroll(3));
    carousel.go_to_item(1);

    assert!(!carousel.next().is_rejected());
    assert_eq!(carousel.current_item(), 4);
    assert!(!carousel.prev().is_rejected());
    assert_eq!(carousel.current_item(), 1);
}

#[test]
fn forward_move_rejected_when_view_already_shows_last_slide() {
    // Three visible out of three: nothing lies beyond the view.
    let mut carousel = carousel(3, CarouselConfig::new("full").with_slides_visible(3));

    assert_eq!(carousel.go_to_item(1), MoveOutcome::Rejected);
    assert_eq!(carousel.current_item(), 0);
}
