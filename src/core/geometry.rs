use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// Percent-based track sizing for one layout pass.
///
/// The track is scaled so that `slides_visible` slides fill the container
/// width; every slide takes `100 / item_count` percent of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    pub track_width_percent: f64,
    pub slide_width_percent: f64,
}

impl TrackLayout {
    pub fn compute(item_count: usize, slides_visible: usize) -> CarouselResult<Self> {
        if item_count == 0 {
            return Err(CarouselError::EmptyCarousel);
        }
        if slides_visible == 0 {
            return Err(CarouselError::InvalidConfig(
                "slides_visible must be >= 1".to_owned(),
            ));
        }

        let ratio = item_count as f64 / slides_visible as f64;
        Ok(Self {
            track_width_percent: ratio * 100.0,
            slide_width_percent: (100.0 / slides_visible as f64) / ratio,
        })
    }
}

/// Horizontal track offset, in percent of the track, that brings `index`
/// to the left edge of the container.
#[must_use]
pub fn track_translate_percent(index: usize, item_count: usize) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    index as f64 * -100.0 / item_count as f64
}

/// Formats a percentage the way CSS length values are written.
#[must_use]
pub fn format_percent(value: f64) -> String {
    // Normalize negative zero so the first slide renders as `0%`.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}
