use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{CarouselError, CarouselResult};
use crate::interaction::AutoplayState;
use crate::render::Renderer;

use super::Carousel;

impl<R: Renderer> Carousel<R> {
    #[must_use]
    pub fn autoplay_state(&self) -> Option<AutoplayState> {
        self.core.autoplay.map(|timer| timer.state())
    }

    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.core.autoplay.is_some_and(|timer| timer.is_running())
    }

    /// Steps the autoplay clock by `elapsed` and calls `next` when at least one
    /// full interval has passed. Returns `true` when a tick fired.
    ///
    /// Intervals missed during a long gap (a suspended host, a throttled tab)
    /// collapse into a single tick; they are never replayed.
    pub fn advance_autoplay(&mut self, elapsed: Duration) -> bool {
        let Some(timer) = &mut self.core.autoplay else {
            return false;
        };
        let ticks = timer.step(elapsed);
        if ticks == 0 {
            return false;
        }
        if ticks > 1 {
            debug!(missed = ticks - 1, "autoplay intervals collapsed");
        }
        let outcome = self.next();
        trace!(?outcome, "autoplay tick");
        true
    }

    /// Cancels autoplay. Returns `true` when it was running.
    pub fn stop_autoplay(&mut self) -> bool {
        match &mut self.core.autoplay {
            Some(timer) if timer.is_running() => {
                timer.stop();
                debug!("autoplay stopped");
                true
            }
            _ => false,
        }
    }

    /// Re-arms a stopped autoplay task; the next tick is one full interval away.
    pub fn start_autoplay(&mut self) -> CarouselResult<()> {
        let Some(timer) = &mut self.core.autoplay else {
            return Err(CarouselError::InvalidInput(
                "autoplay is not configured for this carousel".to_owned(),
            ));
        };
        if !timer.is_running() {
            timer.start();
            debug!("autoplay started");
        }
        Ok(())
    }
}
