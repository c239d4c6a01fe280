use tracing::trace;

use crate::core::MoveOutcome;
use crate::extensions::MoveReason;
use crate::render::Renderer;

use super::Carousel;

impl<R: Renderer> Carousel<R> {
    /// Moves the track so that `index` becomes the left-most slide.
    ///
    /// Requests past either end wrap in loop mode and are rejected otherwise;
    /// a rejected request leaves all state untouched.
    pub fn go_to_item(&mut self, index: i64) -> MoveOutcome {
        let outcome = self.core.move_bounds().resolve(self.core.current_item, index);
        let Some(target) = outcome.target() else {
            trace!(
                requested = index,
                current = self.core.current_item,
                "move rejected at boundary"
            );
            return outcome;
        };

        self.core.current_item = target;
        trace!(requested = index, target, ?outcome, "moved");
        self.notify_observers(MoveReason::Moved);
        outcome
    }

    /// Advances by `slides_to_scroll`.
    pub fn next(&mut self) -> MoveOutcome {
        let step = self.slides_to_scroll();
        self.go_to_item(offset_index(self.core.current_item, step, true))
    }

    /// Goes back by `slides_to_scroll`.
    pub fn prev(&mut self) -> MoveOutcome {
        let step = self.slides_to_scroll();
        self.go_to_item(offset_index(self.core.current_item, step, false))
    }
}

fn offset_index(current: usize, step: usize, forward: bool) -> i64 {
    let current = i64::try_from(current).unwrap_or(i64::MAX);
    let step = i64::try_from(step).unwrap_or(i64::MAX);
    if forward {
        current.saturating_add(step)
    } else {
        current.saturating_sub(step)
    }
}
