use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::ClassList;
use crate::error::{CarouselError, CarouselResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementTag {
    Div,
    Img,
}

impl ElementTag {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Img => "img",
        }
    }

    #[must_use]
    pub fn is_void(self) -> bool {
        matches!(self, Self::Img)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Element(ElementNode),
    /// Host-supplied slide content, emitted verbatim.
    Markup(String),
}

/// One generated element of the carousel tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: ElementTag,
    pub classes: ClassList,
    pub attributes: IndexMap<String, String>,
    pub style: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl ElementNode {
    #[must_use]
    pub fn new(tag: ElementTag, classes: ClassList) -> Self {
        Self {
            tag,
            classes,
            attributes: IndexMap::new(),
            style: IndexMap::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn div(class: impl Into<String>) -> Self {
        Self::new(ElementTag::Div, ClassList::new().with_class(class))
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Markup(markup.into()));
        self
    }

    /// Renders inline style declarations as a `style` attribute value.
    #[must_use]
    pub fn style_attribute(&self) -> Option<String> {
        if self.style.is_empty() {
            return None;
        }
        Some(
            self.style
                .iter()
                .map(|(property, value)| format!("{property}: {value};"))
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Markup(_) => None,
        })
    }

    /// Depth-first, document-order search by class name (self included).
    #[must_use]
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a ElementNode> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a ElementNode>) {
        if self.classes.contains(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_by_class(class, found);
        }
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        1 + self
            .child_elements()
            .map(ElementNode::element_count)
            .sum::<usize>()
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.classes.is_empty() {
            return Err(CarouselError::InvalidFrame(format!(
                "generated `{}` element must carry a class",
                self.tag.name()
            )));
        }
        if self.tag.is_void() {
            if !self.children.is_empty() {
                return Err(CarouselError::InvalidFrame(format!(
                    "void `{}` element must not have children",
                    self.tag.name()
                )));
            }
            if self
                .attributes
                .get("src")
                .is_none_or(|src| src.trim().is_empty())
            {
                return Err(CarouselError::InvalidFrame(
                    "image element requires a non-empty `src`".to_owned(),
                ));
            }
        }
        for child in self.child_elements() {
            child.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic carousel tree for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselFrame {
    pub root: ElementNode,
}

impl CarouselFrame {
    #[must_use]
    pub fn new(root: ElementNode) -> Self {
        Self { root }
    }

    pub fn validate(&self) -> CarouselResult<()> {
        self.root.validate()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.root.element_count()
    }

    #[must_use]
    pub fn find_all_by_class(&self, class: &str) -> Vec<&ElementNode> {
        self.root.find_all_by_class(class)
    }

    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&ElementNode> {
        self.find_all_by_class(class).into_iter().next()
    }
}
