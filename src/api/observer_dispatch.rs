use tracing::warn;

use crate::extensions::{MoveContext, MoveReason};
use crate::render::Renderer;

use super::Carousel;

impl<R: Renderer> Carousel<R> {
    pub(super) fn move_context(&self, reason: MoveReason) -> MoveContext {
        let metrics = self.core.display_metrics();
        MoveContext {
            index: self.core.current_item,
            reason,
            item_count: self.core.slides.len(),
            slides_visible: metrics.slides_visible,
            slides_to_scroll: metrics.slides_to_scroll,
            is_mobile: self.core.is_mobile,
            loop_enabled: self.core.config.loop_enabled,
        }
    }

    /// Notifies decorators, then host observers, in registration order.
    pub(super) fn notify_observers(&mut self, reason: MoveReason) {
        let context = self.move_context(reason);
        if let Some(navigation) = &mut self.core.navigation {
            navigation.on_move(context);
        }
        if let Some(pagination) = &mut self.core.pagination {
            pagination.on_move(context);
        }
        for observer in &mut self.core.observers {
            if let Err(err) = observer.on_move(context) {
                warn!(
                    observer = observer.id(),
                    error = %err,
                    index = context.index,
                    "movement observer failed; continuing with remaining observers"
                );
            }
        }
    }
}
