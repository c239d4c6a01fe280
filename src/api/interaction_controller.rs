use crate::core::MoveOutcome;
use crate::interaction::{Key, KeyAction};
use crate::render::Renderer;

use super::Carousel;

impl<R: Renderer> Carousel<R> {
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.core.interaction.is_focused()
    }

    /// Marks the carousel root as focused.
    pub fn focus(&mut self) {
        self.core.interaction.on_focus();
    }

    pub fn blur(&mut self) {
        self.core.interaction.on_blur();
    }

    /// Handles a key release on the carousel root.
    ///
    /// Returns `None` when the key is ignored.
    pub fn key_up(&mut self, key: &Key) -> Option<MoveOutcome> {
        match self.core.interaction.on_key_up(key)? {
            KeyAction::Prev => Some(self.prev()),
            KeyAction::Next => Some(self.next()),
        }
    }
}
