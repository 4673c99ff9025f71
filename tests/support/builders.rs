// tests/support/builders.rs
use slug_binder::domain::document::ElementId;
use slug_binder::infrastructure::document::{Element, MemoryDocument};

/// The name/reference pair as it appears on the record form.
pub struct RecordForm {
    pub doc: MemoryDocument,
    pub name: ElementId,
    pub reference: ElementId,
}

pub struct RecordFormBuilder {
    loading: bool,
    name_value: String,
    with_name: bool,
    with_reference: bool,
}

impl RecordFormBuilder {
    pub fn new() -> Self {
        Self {
            loading: false,
            name_value: String::new(),
            with_name: true,
            with_reference: true,
        }
    }

    pub fn loading(mut self) -> Self {
        self.loading = true;
        self
    }

    pub fn name_value(mut self, value: impl Into<String>) -> Self {
        self.name_value = value.into();
        self
    }

    pub fn without_name(mut self) -> Self {
        self.with_name = false;
        self
    }

    pub fn without_reference(mut self) -> Self {
        self.with_reference = false;
        self
    }

    /// Returns the form; a missing field gets a placeholder handle that the
    /// document does not know about.
    pub fn build(self) -> RecordForm {
        let doc = if self.loading {
            MemoryDocument::loading()
        } else {
            MemoryDocument::parsed()
        };
        doc.append(Element::new("h1").with_class("govuk-heading-l"));
        let name = if self.with_name {
            doc.append(Element::govuk_input("name").with_value(self.name_value))
        } else {
            ElementId(usize::MAX)
        };
        doc.append(Element::govuk_input("description"));
        let reference = if self.with_reference {
            doc.append(Element::govuk_input("reference"))
        } else {
            ElementId(usize::MAX - 1)
        };
        RecordForm {
            doc,
            name,
            reference,
        }
    }
}

impl Default for RecordFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
