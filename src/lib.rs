//! carousel-rs: headless slide carousel and dropdown toggle widgets.
//!
//! The engine owns all widget state and emits a deterministic element tree;
//! hosts feed input events in and hand frames to a renderer of their choice.

pub mod api;
pub mod core;
pub mod dropdown;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "wasm")]
pub mod platform_web;

pub use api::{Carousel, CarouselConfig};
pub use error::{CarouselError, CarouselResult};
