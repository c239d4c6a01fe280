use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Keys the carousel root reacts to. Anything else is reported as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Navigation requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    focused: bool,
}

impl InteractionState {
    #[must_use]
    pub fn is_focused(self) -> bool {
        self.focused
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    /// Resolves a key release into a navigation action.
    ///
    /// Keys only act while the carousel root holds focus.
    #[must_use]
    pub fn on_key_up(self, key: &Key) -> Option<KeyAction> {
        if !self.focused {
            return None;
        }
        match key {
            Key::ArrowLeft => Some(KeyAction::Prev),
            Key::ArrowRight => Some(KeyAction::Next),
            Key::Other(_) => None,
        }
    }
}

/// Public autoplay runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayState {
    pub running: bool,
    pub interval_ms: u32,
    pub elapsed_ms: u64,
}

/// Deterministic repeating timer stepped by the host clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTimer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl AutoplayTimer {
    /// Creates a stopped timer. `interval` must be non-zero.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Cancels the task and drops any partially elapsed interval.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Accumulates `delta` and returns how many full intervals completed.
    pub fn step(&mut self, delta: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        let interval_ns = self.interval.as_nanos();
        let elapsed_ns = self.elapsed.as_nanos();
        // The remainder is below the interval, which itself fits in u64 nanos.
        let remainder_ns = u64::try_from(elapsed_ns % interval_ns).unwrap_or(u64::MAX);
        self.elapsed = Duration::from_nanos(remainder_ns);
        u32::try_from(elapsed_ns / interval_ns).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn state(self) -> AutoplayState {
        AutoplayState {
            running: self.running,
            interval_ms: u32::try_from(self.interval.as_millis()).unwrap_or(u32::MAX),
            elapsed_ms: u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
