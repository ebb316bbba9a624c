//! In-memory doubles for the UI binding traits.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::binding::{PreferenceStore, UiBinding, UiNode};

#[derive(Debug, Default)]
pub struct FakeNodeState {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub html: String,
    pub attrs: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub offset_top: f64,
    pub height: f64,
    pub parent: Option<FakeNode>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeNode(Rc<RefCell<FakeNodeState>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl FakeNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_html(self, html: &str) -> Self {
        self.0.borrow_mut().html = html.to_owned();
        self
    }

    pub fn with_geometry(self, offset_top: f64, height: f64) -> Self {
        {
            let mut state = self.0.borrow_mut();
            state.offset_top = offset_top;
            state.height = height;
        }
        self
    }

    pub fn child(&self) -> Self {
        let node = Self::new();
        node.0.borrow_mut().parent = Some(self.clone());
        node
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.iter().cloned().collect()
    }
}

impl UiNode for FakeNode {
    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_owned();
    }

    fn inner_html(&self) -> String {
        self.0.borrow().html.clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.borrow_mut().html = html.to_owned();
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.borrow_mut().attrs.insert(name.to_owned(), value.to_owned());
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        if value.is_empty() {
            state.styles.remove(property);
        } else {
            state.styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn height(&self) -> f64 {
        self.0.borrow().height
    }

    fn contains(&self, other: &Self) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if node == *self {
                return true;
            }
            cursor = node.0.borrow().parent.clone();
        }
        false
    }
}

/// Binding backed by named slots and selector lists.
#[derive(Default)]
pub struct FakeBinding {
    pub named: HashMap<&'static str, FakeNode>,
    pub ids: HashMap<String, FakeNode>,
    pub selectors: HashMap<String, Vec<FakeNode>>,
}

impl FakeBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named node and return a handle to it.
    pub fn slot(&mut self, name: &'static str) -> FakeNode {
        self.named.entry(name).or_default().clone()
    }

    pub fn add_id(&mut self, id: &str, node: FakeNode) {
        self.ids.insert(id.to_owned(), node);
    }

    pub fn add_all(&mut self, selector: &str, nodes: Vec<FakeNode>) {
        self.selectors.entry(selector.to_owned()).or_default().extend(nodes);
    }

    fn named(&self, name: &str) -> Option<FakeNode> {
        self.named.get(name).cloned()
    }
}

impl UiBinding for FakeBinding {
    type Node = FakeNode;

    fn navbar(&self) -> Option<FakeNode> {
        self.named("navbar")
    }

    fn nav_toggle(&self) -> Option<FakeNode> {
        self.named("nav_toggle")
    }

    fn nav_menu(&self) -> Option<FakeNode> {
        self.named("nav_menu")
    }

    fn theme_toggle(&self) -> Option<FakeNode> {
        self.named("theme_toggle")
    }

    fn theme_icon(&self) -> Option<FakeNode> {
        self.named("theme_icon")
    }

    fn back_to_top(&self) -> Option<FakeNode> {
        self.named("back_to_top")
    }

    fn root(&self) -> Option<FakeNode> {
        self.named("root")
    }

    fn body(&self) -> Option<FakeNode> {
        self.named("body")
    }

    fn typed_text(&self) -> Option<FakeNode> {
        self.named("typed_text")
    }

    fn skills_section(&self) -> Option<FakeNode> {
        self.named("skills_section")
    }

    fn hero_content(&self) -> Option<FakeNode> {
        self.named("hero_content")
    }

    fn copyright_text(&self) -> Option<FakeNode> {
        self.named("copyright_text")
    }

    fn cursor_dot(&self) -> Option<FakeNode> {
        self.named("cursor_dot")
    }

    fn cursor_outline(&self) -> Option<FakeNode> {
        self.named("cursor_outline")
    }

    fn by_id(&self, id: &str) -> Option<FakeNode> {
        self.ids.get(id).cloned()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.selectors.get(selector).cloned().unwrap_or_default()
    }
}

/// `localStorage` stand-in.
#[derive(Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
