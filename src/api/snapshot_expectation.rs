use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};
use crate::render::Renderer;

use super::{Carousel, CarouselSnapshot};

pub const STORED_SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// Layout percentages parsed back from JSON may drift by an ulp.
const PERCENT_TOLERANCE: f64 = 1e-9;

/// A snapshot as written to disk, tagged with the schema it was produced by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSnapshot {
    pub schema_version: u32,
    pub snapshot: CarouselSnapshot,
}

impl StoredSnapshot {
    #[must_use]
    pub fn new(snapshot: CarouselSnapshot) -> Self {
        Self {
            schema_version: STORED_SNAPSHOT_SCHEMA_VERSION,
            snapshot,
        }
    }

    pub fn to_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CarouselError::Serialization(format!("failed to serialize stored snapshot: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        let stored: Self = serde_json::from_str(input).map_err(|e| {
            CarouselError::Serialization(format!("failed to parse stored snapshot: {e}"))
        })?;
        if stored.schema_version != STORED_SNAPSHOT_SCHEMA_VERSION {
            return Err(CarouselError::Serialization(format!(
                "unsupported stored snapshot schema version: {}",
                stored.schema_version
            )));
        }
        Ok(stored)
    }
}

fn percent_eq(left: f64, right: f64) -> bool {
    (left - right).abs() <= PERCENT_TOLERANCE
}

impl CarouselSnapshot {
    /// Names every field that differs from `expected`, in declaration order.
    #[must_use]
    pub fn mismatched_fields(&self, expected: &Self) -> Vec<&'static str> {
        let checks = [
            ("name", self.name == expected.name),
            ("item_count", self.item_count == expected.item_count),
            ("current_item", self.current_item == expected.current_item),
            ("is_mobile", self.is_mobile == expected.is_mobile),
            ("viewport_width", self.viewport_width == expected.viewport_width),
            ("slides_visible", self.slides_visible == expected.slides_visible),
            ("slides_to_scroll", self.slides_to_scroll == expected.slides_to_scroll),
            ("loop_enabled", self.loop_enabled == expected.loop_enabled),
            (
                "layout",
                percent_eq(
                    self.layout.track_width_percent,
                    expected.layout.track_width_percent,
                ) && percent_eq(
                    self.layout.slide_width_percent,
                    expected.layout.slide_width_percent,
                ),
            ),
            (
                "translate_percent",
                percent_eq(self.translate_percent, expected.translate_percent),
            ),
            ("navigation", self.navigation == expected.navigation),
            ("pagination", self.pagination == expected.pagination),
            ("autoplay", self.autoplay == expected.autoplay),
            ("observer_count", self.observer_count == expected.observer_count),
        ];
        checks
            .into_iter()
            .filter_map(|(field, same)| (!same).then_some(field))
            .collect()
    }
}

impl<R: Renderer> Carousel<R> {
    /// Serializes the current snapshot in the stored, schema-tagged format.
    pub fn stored_snapshot_json(&self) -> CarouselResult<String> {
        StoredSnapshot::new(self.snapshot()).to_json_pretty()
    }

    /// Compares the current state against a previously stored snapshot.
    pub fn verify_snapshot(&self, expected: &CarouselSnapshot) -> CarouselResult<()> {
        let mismatched = self.snapshot().mismatched_fields(expected);
        if mismatched.is_empty() {
            Ok(())
        } else {
            Err(CarouselError::SnapshotMismatch(mismatched))
        }
    }
}
