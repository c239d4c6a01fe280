use crate::core::{ClassList, DisplayMetrics, MoveBounds, Slide, TrackLayout};
use crate::extensions::MoveObserver;
use crate::interaction::{AutoplayTimer, InteractionState};

use super::{
    CarouselConfig, class_names::ClassNames, navigation_controller::NavigationControls,
    pagination_controller::PaginationIndicators,
};

/// Internal carousel state used by the public facade (`Carousel`).
pub(super) struct CarouselCore {
    pub(super) config: CarouselConfig,
    pub(super) class_names: ClassNames,
    pub(super) slides: Vec<Slide>,
    pub(super) current_item: usize,
    pub(super) is_mobile: bool,
    pub(super) viewport_width: u32,
    pub(super) layout: TrackLayout,
    pub(super) interaction: InteractionState,
    pub(super) navigation: Option<NavigationControls>,
    pub(super) pagination: Option<PaginationIndicators>,
    pub(super) autoplay: Option<AutoplayTimer>,
    pub(super) observers: Vec<Box<dyn MoveObserver>>,
}

impl CarouselCore {
    #[must_use]
    pub(super) fn display_metrics(&self) -> DisplayMetrics {
        DisplayMetrics::resolve(
            self.is_mobile,
            self.config.slides_visible,
            self.config.slides_to_scroll,
        )
    }

    #[must_use]
    pub(super) fn move_bounds(&self) -> MoveBounds {
        MoveBounds {
            item_count: self.slides.len(),
            slides_visible: self.display_metrics().slides_visible,
            loop_enabled: self.config.loop_enabled,
        }
    }

    pub(super) fn item_classes(&self) -> ClassList {
        ClassList::new().with_class(self.class_names.part(super::class_names::ITEM))
    }
}
