use serde::{Deserialize, Serialize};

use crate::error::CarouselResult;

/// Why observers are being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReason {
    /// First notification fired during construction.
    Initial,
    /// `current_item` changed through navigation.
    Moved,
    /// Layout was recomputed after a responsive flip; index is unchanged.
    Relayout,
}

/// Read-only state snapshot passed to movement observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveContext {
    pub index: usize,
    pub reason: MoveReason,
    pub item_count: usize,
    pub slides_visible: usize,
    pub slides_to_scroll: usize,
    pub is_mobile: bool,
    pub loop_enabled: bool,
}

/// Host hook notified after every successful move or layout recompute.
///
/// Observers cannot reach back into the carousel; a returned error is logged
/// and does not stop the remaining observers from running.
pub trait MoveObserver {
    fn id(&self) -> &str;
    fn on_move(&mut self, context: MoveContext) -> CarouselResult<()>;
}

/// Adapts a closure into a [`MoveObserver`].
pub struct FnObserver<F> {
    id: String,
    callback: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(MoveContext) -> CarouselResult<()>,
{
    #[must_use]
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> MoveObserver for FnObserver<F>
where
    F: FnMut(MoveContext) -> CarouselResult<()>,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_move(&mut self, context: MoveContext) -> CarouselResult<()> {
        (self.callback)(context)
    }
}
