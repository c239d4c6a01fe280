use serde::{Deserialize, Serialize};

/// One unit of original content handed to the carousel.
///
/// The markup is kept verbatim; the carousel only wraps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub markup: String,
}

impl Slide {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

impl From<&str> for Slide {
    fn from(markup: &str) -> Self {
        Self::new(markup)
    }
}

impl From<String> for Slide {
    fn from(markup: String) -> Self {
        Self { markup }
    }
}
