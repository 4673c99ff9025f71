// src/application/ports/document.rs
use std::rc::Rc;

use crate::domain::document::{ElementId, ReadyState, Selector};

/// Invoked synchronously for every key-release on the subscribed element.
pub type KeyUpHandler = Rc<dyn Fn(&dyn Document)>;

/// Invoked once when the document has finished parsing.
pub type ReadyCallback = Box<dyn FnOnce(&dyn Document)>;

/// The slice of a DOM the binder depends on.
///
/// Implementations are single-threaded. Handlers receive the document back at
/// dispatch time so they can read and write element values without holding a
/// reference of their own.
pub trait Document {
    fn ready_state(&self) -> ReadyState;

    /// First element in document order matching `selector`.
    fn query_selector(&self, selector: &Selector) -> Option<ElementId>;

    /// Current value of a form element, `None` for an unknown handle.
    fn value(&self, element: ElementId) -> Option<String>;

    fn set_value(&self, element: ElementId, value: &str);

    fn on_key_up(&self, element: ElementId, handler: KeyUpHandler);

    /// Registers `callback` for the content-loaded signal. Only meaningful
    /// while the document is still loading.
    fn on_content_loaded(&self, callback: ReadyCallback);
}
