//! UI binding traits.
//!
//! Components never look nodes up globally. They receive a [`UiBinding`] that
//! exposes the page's well-known nodes as optional accessors, and mutate those
//! nodes through [`UiNode`]. The browser layer implements both over
//! `web_sys::Element`; tests substitute in-memory doubles.

/// A single addressable UI node.
pub trait UiNode: Clone + PartialEq {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;

    /// Toggle `class`, returning whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Serialized markup of the node's children.
    fn inner_html(&self) -> String;
    /// Replace the node's children with parsed `html`.
    fn set_inner_html(&self, html: &str);

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);

    /// Distance from the top of the document, in CSS pixels.
    fn offset_top(&self) -> f64;

    /// Rendered height, in CSS pixels.
    fn height(&self) -> f64;

    /// Whether `other` is this node or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
}

/// Named access to the nodes the components depend on.
///
/// Every accessor is optional: a page without the node simply loses the
/// corresponding behavior.
pub trait UiBinding {
    type Node: UiNode;

    fn navbar(&self) -> Option<Self::Node>;
    fn nav_toggle(&self) -> Option<Self::Node>;
    fn nav_menu(&self) -> Option<Self::Node>;
    fn theme_toggle(&self) -> Option<Self::Node>;
    fn theme_icon(&self) -> Option<Self::Node>;
    fn back_to_top(&self) -> Option<Self::Node>;
    /// The document element, which carries `data-theme`.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn typed_text(&self) -> Option<Self::Node>;
    fn skills_section(&self) -> Option<Self::Node>;
    fn hero_content(&self) -> Option<Self::Node>;
    fn copyright_text(&self) -> Option<Self::Node>;
    fn cursor_dot(&self) -> Option<Self::Node>;
    fn cursor_outline(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// All nodes matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    fn sections(&self) -> Vec<Self::Node> {
        self.query_all("section")
    }

    fn nav_links(&self) -> Vec<Self::Node> {
        self.query_all(".nav-link")
    }

    fn shapes(&self) -> Vec<Self::Node> {
        self.query_all(".shape")
    }
}

/// Process-wide string preferences (browser `localStorage`).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
