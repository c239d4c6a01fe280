use serde::{Deserialize, Serialize};

/// Result of one movement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The requested index was applied as-is.
    Moved { from: usize, to: usize },
    /// The request crossed a boundary and loop mode redirected it.
    Wrapped { from: usize, to: usize },
    /// The request crossed a boundary without loop mode; nothing changed.
    Rejected,
}

impl MoveOutcome {
    #[must_use]
    pub fn target(self) -> Option<usize> {
        match self {
            Self::Moved { to, .. } | Self::Wrapped { to, .. } => Some(to),
            Self::Rejected => None,
        }
    }

    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Inputs of the movement rule that do not change between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveBounds {
    pub item_count: usize,
    pub slides_visible: usize,
    pub loop_enabled: bool,
}

impl MoveBounds {
    /// Whether a slide exists right after the current view.
    #[must_use]
    pub fn has_slide_after_view(self, current: usize) -> bool {
        current.saturating_add(self.slides_visible) < self.item_count
    }

    /// Resolves a signed movement request against the current position.
    ///
    /// Backward overrun wraps to the last full view, forward overrun (past the
    /// last slide, or forward while the last slide is already in view) wraps
    /// to the first slide. Without loop mode both are rejected.
    #[must_use]
    pub fn resolve(self, current: usize, requested: i64) -> MoveOutcome {
        if requested < 0 {
            if !self.loop_enabled {
                return MoveOutcome::Rejected;
            }
            return MoveOutcome::Wrapped {
                from: current,
                to: self.item_count.saturating_sub(self.slides_visible),
            };
        }

        let requested = usize::try_from(requested).unwrap_or(usize::MAX);
        let forward_overrun = requested > current && !self.has_slide_after_view(current);
        if requested >= self.item_count || forward_overrun {
            if !self.loop_enabled {
                return MoveOutcome::Rejected;
            }
            return MoveOutcome::Wrapped {
                from: current,
                to: 0,
            };
        }

        MoveOutcome::Moved {
            from: current,
            to: requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveBounds, MoveOutcome};

    fn bounds(item_count: usize, slides_visible: usize, loop_enabled: bool) -> MoveBounds {
        MoveBounds {
            item_count,
            slides_visible,
            loop_enabled,
        }
    }

    #[test]
    fn in_range_request_moves() {
        assert_eq!(
            bounds(6, 2, false).resolve(0, 2),
            MoveOutcome::Moved { from: 0, to: 2 }
        );
    }

    #[test]
    fn overrun_without_loop_is_rejected() {
        let b = bounds(6, 2, false);
        assert!(b.resolve(0, -1).is_rejected());
        assert!(b.resolve(0, 6).is_rejected());
        assert!(b.resolve(4, 5).is_rejected());
    }

    #[test]
    fn overrun_with_loop_wraps() {
        let b = bounds(6, 2, true);
        assert_eq!(b.resolve(0, -2), MoveOutcome::Wrapped { from: 0, to: 4 });
        assert_eq!(b.resolve(4, 6), MoveOutcome::Wrapped { from: 4, to: 0 });
        assert_eq!(b.resolve(4, 5), MoveOutcome::Wrapped { from: 4, to: 0 });
    }

    #[test]
    fn backward_moves_ignore_forward_boundary() {
        let b = bounds(6, 2, false);
        assert_eq!(b.resolve(4, 2), MoveOutcome::Moved { from: 4, to: 2 });
        assert_eq!(b.resolve(4, 4), MoveOutcome::Moved { from: 4, to: 4 });
    }

    #[test]
    fn loop_backward_wrap_saturates_when_view_exceeds_items() {
        assert_eq!(
            bounds(2, 3, true).resolve(0, -1),
            MoveOutcome::Wrapped { from: 0, to: 0 }
        );
    }
}
