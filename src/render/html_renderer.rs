use crate::error::CarouselResult;
use crate::render::{CarouselFrame, ElementNode, Node, Renderer};

/// Serializes frames into HTML markup.
///
/// The last rendered document is kept in `markup`. Attribute values are
/// escaped; slide content is written verbatim.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    pub markup: String,
    pub render_count: usize,
}

impl HtmlRenderer {
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.markup = render_frame_html(frame);
        self.render_count += 1;
        Ok(())
    }
}

#[must_use]
pub fn render_frame_html(frame: &CarouselFrame) -> String {
    let mut out = String::new();
    write_element(&mut out, &frame.root);
    out
}

fn write_element(out: &mut String, element: &ElementNode) {
    out.push('<');
    out.push_str(element.tag.name());
    write_attribute(out, "class", &element.classes.to_attribute());
    for (name, value) in &element.attributes {
        write_attribute(out, name, value);
    }
    if let Some(style) = element.style_attribute() {
        write_attribute(out, "style", &style);
    }
    out.push('>');

    if element.tag.is_void() {
        return;
    }

    for child in &element.children {
        match child {
            Node::Element(child) => write_element(out, child),
            Node::Markup(markup) => out.push_str(markup),
        }
    }
    out.push_str("</");
    out.push_str(element.tag.name());
    out.push('>');
}

fn write_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_attribute_into(out, value);
    out.push('"');
}

fn escape_attribute_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
