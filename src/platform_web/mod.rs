//! WASM bindings for browser hosts.
//!
//! `JsCarousel` wraps the headless engine with an HTML renderer; the page
//! forwards DOM events to it and swaps in the returned markup.

use std::time::Duration;

use js_sys::Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::{Carousel, CarouselConfig};
use crate::core::{ClassList, MoveOutcome, Slide};
use crate::dropdown::toggle_dropped;
use crate::error::CarouselError;
use crate::interaction::Key;
use crate::render::HtmlRenderer;

impl From<CarouselError> for JsValue {
    fn from(err: CarouselError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// JavaScript-friendly wrapper around [`Carousel`].
#[wasm_bindgen]
pub struct JsCarousel {
    inner: Carousel<HtmlRenderer>,
}

#[wasm_bindgen]
impl JsCarousel {
    /// Creates a carousel from an options object and slide markup strings.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const carousel = new JsCarousel({ name: "home", pagination: true }, slides);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, slides: Array) -> Result<JsCarousel, JsValue> {
        let config: CarouselConfig = from_value(config)?;
        let slides = slides
            .iter()
            .map(|value| {
                value
                    .as_string()
                    .map(Slide::from)
                    .ok_or_else(|| JsValue::from_str("slides must be strings"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let inner = Carousel::new(HtmlRenderer::default(), slides, config)?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = currentItem)]
    pub fn current_item(&self) -> usize {
        self.inner.current_item()
    }

    pub fn next(&mut self) -> bool {
        applied(self.inner.next())
    }

    pub fn prev(&mut self) -> bool {
        applied(self.inner.prev())
    }

    #[wasm_bindgen(js_name = goToItem)]
    pub fn go_to_item(&mut self, index: i32) -> bool {
        applied(self.inner.go_to_item(i64::from(index)))
    }

    #[wasm_bindgen(js_name = clickPagination)]
    pub fn click_pagination(&mut self, page: usize) -> Result<bool, JsValue> {
        Ok(applied(self.inner.click_pagination(page)?))
    }

    pub fn resize(&mut self, viewport_width: u32) -> Result<bool, JsValue> {
        Ok(self.inner.resize(viewport_width)?)
    }

    pub fn focus(&mut self) {
        self.inner.focus();
    }

    pub fn blur(&mut self) {
        self.inner.blur();
    }

    /// Forwards `KeyboardEvent.key` from a `keyup` on the carousel root.
    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) -> bool {
        self.inner
            .key_up(&Key::from_dom_key(key))
            .is_some_and(applied)
    }

    #[wasm_bindgen(js_name = advanceAutoplay)]
    pub fn advance_autoplay(&mut self, elapsed_ms: u32) -> bool {
        self.inner
            .advance_autoplay(Duration::from_millis(u64::from(elapsed_ms)))
    }

    #[wasm_bindgen(js_name = stopAutoplay)]
    pub fn stop_autoplay(&mut self) -> bool {
        self.inner.stop_autoplay()
    }

    /// Renders the current state and returns the markup.
    pub fn html(&mut self) -> Result<String, JsValue> {
        self.inner.render()?;
        Ok(self.inner.renderer().markup().to_owned())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.inner.snapshot())?)
    }
}

/// Toggles the dropped state of a droppable `class` attribute value.
#[wasm_bindgen(js_name = toggleDropdownClass)]
pub fn toggle_dropdown_class(class_attribute: &str) -> String {
    let mut classes = ClassList::parse(class_attribute);
    toggle_dropped(&mut classes);
    classes.to_attribute()
}

fn applied(outcome: MoveOutcome) -> bool {
    !outcome.is_rejected()
}
