pub mod ready_state;
pub mod selector;

pub use ready_state::ReadyState;
pub use selector::{Selector, SelectorError};

/// Handle to an element owned by a document. Only meaningful for the document
/// that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl From<ElementId> for usize {
    fn from(value: ElementId) -> Self {
        value.0
    }
}
