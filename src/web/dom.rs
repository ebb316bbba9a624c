//! `web-sys` implementation of the UI binding traits.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use super::js_error;
use crate::binding::{UiBinding, UiNode};
use crate::error::{FolioError, Result};

fn report(result: std::result::Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {}", js_error(err));
    }
}

impl UiNode for Element {
    fn add_class(&self, class: &str) {
        report(self.class_list().add_1(class), "classList.add");
    }

    fn remove_class(&self, class: &str) {
        report(self.class_list().remove_1(class), "classList.remove");
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn inner_html(&self) -> String {
        Element::inner_html(self)
    }

    fn set_inner_html(&self, html: &str) {
        Element::set_inner_html(self, html);
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        report(self.set_attribute(name, value), "setAttribute");
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(el) = self.dyn_ref::<HtmlElement>() else {
            return;
        };
        report(el.style().set_property(property, value), "style.setProperty");
    }

    fn offset_top(&self) -> f64 {
        self.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn height(&self) -> f64 {
        f64::from(self.client_height())
    }

    fn contains(&self, other: &Self) -> bool {
        let other: &Node = other.as_ref();
        Node::contains(self, Some(other))
    }
}

/// Binding over the live document.
#[derive(Clone, Debug)]
pub struct DomBinding {
    document: Document,
}

impl DomBinding {
    /// Bind to `window`'s document.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::NoDocument`] when the window has no document.
    pub fn new(window: &Window) -> Result<Self> {
        let document = window.document().ok_or(FolioError::NoDocument)?;
        Ok(Self { document })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("bad selector {selector:?}: {}", js_error(err));
                None
            }
        }
    }
}

impl UiBinding for DomBinding {
    type Node = Element;

    fn navbar(&self) -> Option<Element> {
        self.by_id("navbar")
    }

    fn nav_toggle(&self) -> Option<Element> {
        self.by_id("nav-toggle")
    }

    fn nav_menu(&self) -> Option<Element> {
        self.by_id("nav-menu")
    }

    fn theme_toggle(&self) -> Option<Element> {
        self.by_id("theme-toggle")
    }

    fn theme_icon(&self) -> Option<Element> {
        let toggle = self.theme_toggle()?;
        match toggle.query_selector("i") {
            Ok(icon) => icon,
            Err(_) => None,
        }
    }

    fn back_to_top(&self) -> Option<Element> {
        self.by_id("back-to-top")
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn typed_text(&self) -> Option<Element> {
        self.query(".typed-text")
    }

    fn skills_section(&self) -> Option<Element> {
        self.by_id("skills")
    }

    fn hero_content(&self) -> Option<Element> {
        self.query(".hero-content")
    }

    fn copyright_text(&self) -> Option<Element> {
        self.query(".footer-copyright p")
    }

    fn cursor_dot(&self) -> Option<Element> {
        self.query("[data-cursor-dot]")
    }

    fn cursor_outline(&self) -> Option<Element> {
        self.query("[data-cursor-outline]")
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("bad selector {selector:?}: {}", js_error(err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}
