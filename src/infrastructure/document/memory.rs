use crate::application::ports::document::{Document, KeyUpHandler, ReadyCallback};
use crate::domain::document::{ElementId, ReadyState, Selector};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    value: String,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            value: String::new(),
        }
    }

    /// Shorthand for `<input type="text" class="govuk-input" id="...">`.
    #[must_use]
    pub fn govuk_input(id: impl Into<String>) -> Self {
        Self::new("input").with_class("govuk-input").with_id(id)
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// In-memory document for tests and hosts without a real DOM.
///
/// Elements are kept in insertion order, which doubles as document order for
/// `query_selector`.
#[derive(Default)]
pub struct MemoryDocument {
    ready_state: Cell<ReadyState>,
    elements: RefCell<Vec<Element>>,
    key_up: RefCell<Vec<(ElementId, KeyUpHandler)>>,
    content_loaded: RefCell<Vec<ReadyCallback>>,
}

impl MemoryDocument {
    /// A document that is still parsing.
    #[must_use]
    pub fn loading() -> Self {
        Self::default()
    }

    /// A document whose content has already been parsed.
    #[must_use]
    pub fn parsed() -> Self {
        let doc = Self::default();
        doc.ready_state.set(ReadyState::Interactive);
        doc
    }

    pub fn append(&self, element: Element) -> ElementId {
        let mut elements = self.elements.borrow_mut();
        elements.push(element);
        ElementId(elements.len() - 1)
    }

    #[must_use]
    pub fn element(&self, element: ElementId) -> Option<Element> {
        self.elements.borrow().get(element.0).cloned()
    }

    /// Moves a loading document to `Interactive` and fires the content-loaded
    /// callbacks once, in registration order. No-op otherwise.
    pub fn finish_parsing(&self) {
        if !self.ready_state.get().is_loading() {
            return;
        }
        self.ready_state.set(ReadyState::Interactive);

        let callbacks = std::mem::take(&mut *self.content_loaded.borrow_mut());
        tracing::debug!(callbacks = callbacks.len(), "document content loaded");
        for callback in callbacks {
            callback(self);
        }
    }

    /// Marks every sub-resource as loaded, finishing parsing first if needed.
    pub fn finish_loading(&self) {
        self.finish_parsing();
        self.ready_state.set(ReadyState::Complete);
    }

    /// Runs every key-up handler subscribed on `element` to completion.
    pub fn dispatch_key_up(&self, element: ElementId) {
        let handlers: Vec<KeyUpHandler> = self
            .key_up
            .borrow()
            .iter()
            .filter(|(target, _)| *target == element)
            .map(|(_, handler)| Rc::clone(handler))
            .collect();
        for handler in handlers {
            handler(self);
        }
    }

    /// Types `text` one character at a time, releasing a key after each.
    pub fn type_text(&self, element: ElementId, text: &str) {
        for c in text.chars() {
            let Some(mut value) = self.value(element) else {
                return;
            };
            value.push(c);
            self.set_value(element, &value);
            self.dispatch_key_up(element);
        }
    }

    /// Replaces the value wholesale (a paste, say) and releases one key.
    pub fn replace_text(&self, element: ElementId, text: &str) {
        self.set_value(element, text);
        self.dispatch_key_up(element);
    }

    #[must_use]
    pub fn key_up_listeners(&self, element: ElementId) -> usize {
        self.key_up
            .borrow()
            .iter()
            .filter(|(target, _)| *target == element)
            .count()
    }

    #[must_use]
    pub fn pending_content_loaded(&self) -> usize {
        self.content_loaded.borrow().len()
    }
}

impl Document for MemoryDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready_state.get()
    }

    fn query_selector(&self, selector: &Selector) -> Option<ElementId> {
        self.elements
            .borrow()
            .iter()
            .position(|el| selector.matches(&el.tag, el.id.as_deref(), &el.classes))
            .map(ElementId)
    }

    fn value(&self, element: ElementId) -> Option<String> {
        self.elements
            .borrow()
            .get(element.0)
            .map(|el| el.value.clone())
    }

    fn set_value(&self, element: ElementId, value: &str) {
        if let Some(el) = self.elements.borrow_mut().get_mut(element.0) {
            el.value = value.to_string();
        }
    }

    fn on_key_up(&self, element: ElementId, handler: KeyUpHandler) {
        self.key_up.borrow_mut().push((element, handler));
    }

    fn on_content_loaded(&self, callback: ReadyCallback) {
        self.content_loaded.borrow_mut().push(callback);
    }
}
