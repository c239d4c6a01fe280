pub mod class_list;
pub mod geometry;
pub mod movement;
pub mod responsive;
pub mod types;

pub use class_list::ClassList;
pub use geometry::{TrackLayout, format_percent, track_translate_percent};
pub use movement::{MoveBounds, MoveOutcome};
pub use responsive::{DisplayMetrics, MOBILE_BREAKPOINT_PX, is_mobile_width};
pub use types::Slide;
