//! In-memory page used by unit tests.
//!
//! Elements are matched by exact selector string. Removed elements stay
//! inspectable through their handles but no longer match queries.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use super::{ClickHandler, Document, Element};
use crate::error::UiError;

#[derive(Default)]
struct Node {
    selector: String,
    classes: RefCell<BTreeSet<String>>,
    text: RefCell<String>,
    detached: Cell<bool>,
    handlers: RefCell<Vec<ClickHandler>>,
}

#[derive(Clone)]
pub(crate) struct FakeElement(Rc<Node>);

impl FakeElement {
    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    pub(crate) fn text(&self) -> String {
        self.0.text.borrow().clone()
    }

    pub(crate) fn is_attached(&self) -> bool {
        !self.0.detached.get()
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    /// Run every click handler in registration order, stopping at the first
    /// error.
    pub(crate) fn click(&self) -> Result<(), UiError> {
        let mut handlers = self.0.handlers.borrow_mut();
        for handler in handlers.iter_mut() {
            handler()?;
        }
        Ok(())
    }
}

impl Element for FakeElement {
    fn add_class(&self, class: &str) -> Result<(), UiError> {
        self.0.classes.borrow_mut().insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), UiError> {
        self.0.classes.borrow_mut().remove(class);
        Ok(())
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut *self.0.text.borrow_mut());
    }

    fn remove(&self) {
        self.0.detached.set(true);
    }

    fn on_click(&self, handler: ClickHandler) -> Result<(), UiError> {
        self.0.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeDocument {
    nodes: Rc<RefCell<Vec<FakeElement>>>,
}

impl FakeDocument {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an element matched by `selector` and return its handle.
    pub(crate) fn add(&self, selector: &str) -> FakeElement {
        let element = FakeElement(Rc::new(Node { selector: selector.to_owned(), ..Node::default() }));
        self.nodes.borrow_mut().push(element.clone());
        element
    }

    /// Page with a root, toggle, close control and message using default selectors.
    pub(crate) fn standard() -> Self {
        let doc = Self::new();
        doc.add("body");
        doc.add(".toggle-theme");
        doc.add(".close");
        doc.add(".message");
        doc
    }

    /// Handle to the first attached element matching `selector`.
    pub(crate) fn find(&self, selector: &str) -> Option<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .find(|el| el.is_attached() && el.0.selector == selector)
            .cloned()
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Result<Option<FakeElement>, UiError> {
        Ok(self.find(selector))
    }
}
