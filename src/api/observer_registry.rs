use crate::error::{CarouselError, CarouselResult};
use crate::extensions::{FnObserver, MoveContext, MoveObserver};
use crate::render::Renderer;

use super::Carousel;

impl<R: Renderer> Carousel<R> {
    /// Registers a movement observer with unique identifier.
    ///
    /// Observers run after the built-in navigation and pagination decorators.
    pub fn register_observer(&mut self, observer: Box<dyn MoveObserver>) -> CarouselResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(CarouselError::InvalidInput(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(CarouselError::InvalidInput(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.core.observers.push(observer);
        Ok(())
    }

    /// Registers a closure as a movement observer.
    pub fn on_move<F>(&mut self, id: impl Into<String>, callback: F) -> CarouselResult<()>
    where
        F: FnMut(MoveContext) -> CarouselResult<()> + 'static,
    {
        self.register_observer(Box::new(FnObserver::new(id, callback)))
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .core
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.core.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.core.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.core
            .observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }
}
