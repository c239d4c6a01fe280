mod autoplay_controller;
pub mod class_names;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod frame_builder;
mod interaction_controller;
mod movement_controller;
mod navigation_controller;
mod observer_dispatch;
mod observer_registry;
mod pagination_controller;
mod responsive_controller;
mod snapshot_controller;
mod snapshot_expectation;
mod validation;

pub use class_names::ClassNames;
pub use engine::Carousel;
pub use engine_config::{AutoScroll, CarouselConfig, NavigationImages};
pub use engine_snapshot::{CarouselSnapshot, NavigationSnapshot, PaginationSnapshot};
pub use snapshot_expectation::{STORED_SNAPSHOT_SCHEMA_VERSION, StoredSnapshot};
