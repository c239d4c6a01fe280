use smallvec::SmallVec;
use tracing::trace;

use crate::core::{ClassList, MoveOutcome};
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::MoveContext;
use crate::render::{ElementNode, ElementTag, Renderer};

use super::Carousel;
use super::class_names::{ClassNames, PAGINATION, PAGINATION_BUTTON, PAGINATION_BUTTON_ACTIVE};

/// One indicator per scroll step, with at most one flagged active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PaginationIndicators {
    container_class: String,
    active_class: String,
    buttons: SmallVec<[ClassList; 8]>,
    step: usize,
}

impl PaginationIndicators {
    /// `step` is the configured (desktop) scroll count.
    pub(super) fn build(class_names: &ClassNames, item_count: usize, step: usize) -> Self {
        let step = step.max(1);
        let button = ClassList::new().with_class(class_names.part(PAGINATION_BUTTON));
        Self {
            container_class: class_names.part(PAGINATION),
            active_class: class_names.part(PAGINATION_BUTTON_ACTIVE),
            buttons: (0..item_count.div_ceil(step))
                .map(|_| button.clone())
                .collect(),
            step,
        }
    }

    #[must_use]
    pub(super) fn len(&self) -> usize {
        self.buttons.len()
    }

    #[must_use]
    pub(super) fn target_item(&self, page: usize) -> Option<usize> {
        (page < self.buttons.len()).then(|| page * self.step)
    }

    pub(super) fn on_move(&mut self, context: MoveContext) {
        let page = context.index / self.step;
        // Leave the current flag alone when the computed page does not exist.
        if page >= self.buttons.len() {
            return;
        }
        for button in &mut self.buttons {
            button.remove(&self.active_class);
        }
        self.buttons[page].add(self.active_class.clone());
    }

    #[must_use]
    pub(super) fn active_page(&self) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| button.contains(&self.active_class))
    }

    pub(super) fn element(&self) -> ElementNode {
        self.buttons.iter().fold(
            ElementNode::div(self.container_class.clone()),
            |container, button| {
                container.with_child(ElementNode::new(ElementTag::Div, button.clone()))
            },
        )
    }
}

impl<R: Renderer> Carousel<R> {
    /// Number of pagination indicators, when pagination is enabled.
    #[must_use]
    pub fn pagination_len(&self) -> Option<usize> {
        self.core.pagination.as_ref().map(PaginationIndicators::len)
    }

    /// Position of the active pagination indicator.
    #[must_use]
    pub fn active_page(&self) -> Option<usize> {
        self.core
            .pagination
            .as_ref()
            .and_then(PaginationIndicators::active_page)
    }

    /// Handles a click on pagination indicator `page`.
    pub fn click_pagination(&mut self, page: usize) -> CarouselResult<MoveOutcome> {
        let Some(pagination) = &self.core.pagination else {
            return Err(CarouselError::InvalidInput(
                "pagination is disabled for this carousel".to_owned(),
            ));
        };
        let Some(target) = pagination.target_item(page) else {
            return Err(CarouselError::InvalidInput(format!(
                "pagination indicator {page} does not exist (count: {})",
                pagination.len()
            )));
        };
        trace!(page, target, "pagination indicator clicked");
        Ok(self.go_to_item(i64::try_from(target).unwrap_or(i64::MAX)))
    }
}
