use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered set of CSS class names attached to one element.
///
/// Insertion order is kept so serialized markup stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    classes: IndexSet<String>,
}

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add(class);
        self
    }

    /// Parses a whitespace separated `class` attribute value.
    #[must_use]
    pub fn parse(attribute: &str) -> Self {
        Self {
            classes: attribute.split_whitespace().map(str::to_owned).collect(),
        }
    }

    /// Returns `true` when the class was not present before.
    pub fn add(&mut self, class: impl Into<String>) -> bool {
        self.classes.insert(class.into())
    }

    /// Returns `true` when the class was present.
    pub fn remove(&mut self, class: &str) -> bool {
        self.classes.shift_remove(class)
    }

    /// Adds the class when absent, removes it when present.
    ///
    /// Returns whether the class is present after the call.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.remove(class) {
            false
        } else {
            self.add(class);
            true
        }
    }

    /// Forces presence of `class` to match `present`.
    pub fn set(&mut self, class: &str, present: bool) {
        if present {
            self.add(class);
        } else {
            self.remove(class);
        }
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Renders the list as a `class` attribute value.
    #[must_use]
    pub fn to_attribute(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
