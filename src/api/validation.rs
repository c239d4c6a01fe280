use crate::error::{CarouselError, CarouselResult};

use super::{AutoScroll, CarouselConfig};

pub(super) fn validate_carousel_config(config: &CarouselConfig) -> CarouselResult<()> {
    validate_carousel_name(&config.name)?;

    for (name, value) in [
        ("slides_to_scroll", config.slides_to_scroll),
        ("slides_visible", config.slides_visible),
    ] {
        if value == 0 {
            return Err(CarouselError::InvalidConfig(format!("{name} must be >= 1")));
        }
    }

    if config.auto_scroll == AutoScroll::EveryMs(0) {
        return Err(CarouselError::InvalidConfig(
            "auto_scroll interval must be > 0 ms".to_owned(),
        ));
    }

    if let Some(images) = &config.images_navigation {
        for (name, value) in [("prev", &images.prev), ("next", &images.next)] {
            if value.as_deref().is_some_and(|src| src.trim().is_empty()) {
                return Err(CarouselError::InvalidConfig(format!(
                    "images_navigation.{name} must not be empty when set"
                )));
            }
        }
    }

    Ok(())
}

/// Names end up inside CSS class names, so only class-safe characters pass.
fn validate_carousel_name(name: &str) -> CarouselResult<()> {
    if name.is_empty() {
        return Err(CarouselError::InvalidConfig(
            "carousel name must not be empty".to_owned(),
        ));
    }
    if let Some(invalid) = name
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_'))
    {
        return Err(CarouselError::InvalidConfig(format!(
            "carousel name contains invalid character `{invalid}`"
        )));
    }
    Ok(())
}
