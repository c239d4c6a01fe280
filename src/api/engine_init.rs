use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{DisplayMetrics, Slide, TrackLayout};
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::MoveReason;
use crate::interaction::{AutoplayTimer, InteractionState};
use crate::render::Renderer;

use super::{
    Carousel, CarouselConfig, class_names::ClassNames, engine_core::CarouselCore,
    navigation_controller::NavigationControls, pagination_controller::PaginationIndicators,
    validation::validate_carousel_config,
};

impl<R: Renderer> Carousel<R> {
    /// Creates a fully initialized carousel around `slides`.
    ///
    /// Slides keep their order. Decorators are built, observers fire once with
    /// index 0, autoplay takes its first step, then the configured viewport
    /// width is applied.
    pub fn new(renderer: R, slides: Vec<Slide>, config: CarouselConfig) -> CarouselResult<Self> {
        validate_carousel_config(&config)?;
        if slides.is_empty() {
            return Err(CarouselError::EmptyCarousel);
        }

        let class_names = ClassNames::new(&config.name);
        // Mobile until the first responsive check says otherwise.
        let is_mobile = true;
        let metrics =
            DisplayMetrics::resolve(is_mobile, config.slides_visible, config.slides_to_scroll);
        let layout = TrackLayout::compute(slides.len(), metrics.slides_visible)?;

        let navigation = config.navigation.then(|| {
            NavigationControls::build(
                &class_names,
                config
                    .images_navigation
                    .as_ref()
                    .and_then(|images| images.pair()),
                config.loop_enabled,
            )
        });
        let pagination = config.pagination.then(|| {
            PaginationIndicators::build(
                &class_names,
                slides.len(),
                config.slides_to_scroll as usize,
            )
        });
        let autoplay = config.auto_scroll.interval_ms().map(|ms| {
            let mut timer = AutoplayTimer::new(Duration::from_millis(u64::from(ms)));
            timer.start();
            timer
        });
        let viewport_width = config.viewport_width;

        debug!(
            name = %config.name,
            slides = slides.len(),
            navigation = navigation.is_some(),
            pagination = pagination.is_some(),
            autoplay = autoplay.is_some(),
            "carousel initialized"
        );

        let mut carousel = Self {
            renderer,
            core: CarouselCore {
                config,
                class_names,
                slides,
                current_item: 0,
                is_mobile,
                viewport_width,
                layout,
                interaction: InteractionState::default(),
                navigation,
                pagination,
                autoplay,
                observers: Vec::new(),
            },
        };

        carousel.notify_observers(MoveReason::Initial);
        if carousel.core.autoplay.is_some() {
            // Autoplay advances immediately; the timer then waits one interval.
            let outcome = carousel.next();
            trace!(?outcome, "autoplay initial tick");
        }
        carousel.resize(viewport_width)?;
        Ok(carousel)
    }
}
