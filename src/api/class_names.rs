/// Part suffixes of the generated markup contract.
pub const CONTAINER: &str = "container";
pub const ITEM: &str = "item";
pub const NEXT: &str = "next";
pub const PREV: &str = "prev";
pub const PREV_IMAGE: &str = "prev-image";
pub const NEXT_IMAGE: &str = "next-image";
pub const PAGINATION: &str = "pagination";
pub const PAGINATION_BUTTON: &str = "pagination-button";
pub const PAGINATION_BUTTON_ACTIVE: &str = "pagination-button--active";
pub const PREV_HIDDEN: &str = "prev--hidden";
pub const NEXT_HIDDEN: &str = "next--hidden";

const ROOT_PREFIX: &str = "carousel";

/// Builds instance-namespaced class names so several carousels can share a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    root: String,
}

impl ClassNames {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            root: format!("{ROOT_PREFIX}-{name}"),
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// `carousel-<name>__<part>`
    #[must_use]
    pub fn part(&self, part: &str) -> String {
        format!("{}__{part}", self.root)
    }
}
