use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_one() -> u32 {
    1
}

fn default_viewport_width() -> u32 {
    1024
}

/// Autoplay setting: disabled, or a positive interval in milliseconds.
///
/// Serialized as `false` or an integer, mirroring how hosts usually write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "AutoScrollRepr", into = "AutoScrollRepr")]
pub enum AutoScroll {
    #[default]
    Disabled,
    EveryMs(u32),
}

impl AutoScroll {
    #[must_use]
    pub fn interval_ms(self) -> Option<u32> {
        match self {
            Self::Disabled => None,
            Self::EveryMs(ms) => Some(ms),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum AutoScrollRepr {
    Flag(bool),
    Interval(u32),
}

impl TryFrom<AutoScrollRepr> for AutoScroll {
    type Error = String;

    fn try_from(value: AutoScrollRepr) -> Result<Self, Self::Error> {
        match value {
            AutoScrollRepr::Flag(false) => Ok(Self::Disabled),
            AutoScrollRepr::Flag(true) => {
                Err("auto_scroll needs an interval in milliseconds, not `true`".to_owned())
            }
            AutoScrollRepr::Interval(ms) => Ok(Self::EveryMs(ms)),
        }
    }
}

impl From<AutoScroll> for AutoScrollRepr {
    fn from(value: AutoScroll) -> Self {
        match value {
            AutoScroll::Disabled => Self::Flag(false),
            AutoScroll::EveryMs(ms) => Self::Interval(ms),
        }
    }
}

/// Image references used as navigation button content.
///
/// Images are only used when both references are present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationImages {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
}

impl NavigationImages {
    #[must_use]
    pub fn new(prev: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            prev: Some(prev.into()),
            next: Some(next.into()),
        }
    }

    /// Returns `(prev, next)` when both references are set.
    #[must_use]
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (&self.prev, &self.next) {
            (Some(prev), Some(next)) => Some((prev.as_str(), next.as_str())),
            _ => None,
        }
    }
}

/// Public carousel bootstrap configuration.
///
/// This type is serializable so host pages can ship carousel setup as JSON.
/// Camel-case aliases are accepted for option objects written for the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Namespaces generated class names as `carousel-<name>__<part>`.
    pub name: String,
    #[serde(default = "default_viewport_width", alias = "viewportWidth")]
    pub viewport_width: u32,
    #[serde(default = "default_one", alias = "slidesToScroll")]
    pub slides_to_scroll: u32,
    #[serde(default = "default_one", alias = "slidesVisible")]
    pub slides_visible: u32,
    #[serde(default, rename = "loop")]
    pub loop_enabled: bool,
    #[serde(default)]
    pub pagination: bool,
    #[serde(default, alias = "imagesNavigation")]
    pub images_navigation: Option<NavigationImages>,
    #[serde(default = "default_true")]
    pub navigation: bool,
    #[serde(default, alias = "autoScroll")]
    pub auto_scroll: AutoScroll,
}

impl CarouselConfig {
    /// Creates a config with default options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            viewport_width: default_viewport_width(),
            slides_to_scroll: 1,
            slides_visible: 1,
            loop_enabled: false,
            pagination: false,
            images_navigation: None,
            navigation: true,
            auto_scroll: AutoScroll::Disabled,
        }
    }

    /// Sets the viewport width seen at construction time.
    #[must_use]
    pub fn with_viewport_width(mut self, viewport_width: u32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    /// Sets slides advanced per `next`/`prev` on desktop.
    #[must_use]
    pub fn with_slides_to_scroll(mut self, slides_to_scroll: u32) -> Self {
        self.slides_to_scroll = slides_to_scroll;
        self
    }

    /// Sets slides shown per view on desktop.
    #[must_use]
    pub fn with_slides_visible(mut self, slides_visible: u32) -> Self {
        self.slides_visible = slides_visible;
        self
    }

    #[must_use]
    pub fn with_loop(mut self, loop_enabled: bool) -> Self {
        self.loop_enabled = loop_enabled;
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: bool) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_images_navigation(mut self, images: NavigationImages) -> Self {
        self.images_navigation = Some(images);
        self
    }

    /// Enables autoplay with the given interval.
    #[must_use]
    pub fn with_auto_scroll_ms(mut self, interval_ms: u32) -> Self {
        self.auto_scroll = AutoScroll::EveryMs(interval_ms);
        self
    }
}
