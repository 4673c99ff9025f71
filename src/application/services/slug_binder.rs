// src/application/services/slug_binder.rs
use std::{cell::Cell, rc::Rc, sync::Arc};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::document::{Document, KeyUpHandler};
use crate::application::ports::util::SlugGenerator;
use crate::config::BinderConfig;
use crate::domain::document::{ElementId, Selector};
use crate::domain::reference::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinderState {
    #[default]
    Uninitialized,
    Bound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingElement {
    Input,
    Output,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Bound { input: ElementId, output: ElementId },
    AlreadyBound,
    Skipped { missing: MissingElement },
}

/// Keeps a reference field in sync with the slug of a name field.
pub struct SlugBinder {
    config: BinderConfig,
    generator: Arc<dyn SlugGenerator>,
    state: Cell<BinderState>,
}

impl SlugBinder {
    #[must_use]
    pub const fn new(config: BinderConfig, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            config,
            generator,
            state: Cell::new(BinderState::Uninitialized),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &BinderConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> BinderState {
        self.state.get()
    }

    /// Looks up both elements and subscribes the key-up handler.
    ///
    /// A missing element leaves the binder uninitialized; this is not an
    /// error and nothing is logged.
    pub fn init(&self, document: &dyn Document) -> BindOutcome {
        if self.state.get() == BinderState::Bound {
            return BindOutcome::AlreadyBound;
        }

        let input = lookup(document, self.config.input_selector());
        let output = lookup(document, self.config.output_selector());
        let (input, output) = match (input, output) {
            (Some(input), Some(output)) => (input, output),
            (None, Some(_)) => {
                return BindOutcome::Skipped {
                    missing: MissingElement::Input,
                };
            }
            (Some(_), None) => {
                return BindOutcome::Skipped {
                    missing: MissingElement::Output,
                };
            }
            (None, None) => {
                return BindOutcome::Skipped {
                    missing: MissingElement::Both,
                };
            }
        };

        let generator = Arc::clone(&self.generator);
        let handler: KeyUpHandler = Rc::new(move |doc: &dyn Document| {
            let slug = generator.slugify_value(doc.value(input).as_deref());
            tracing::trace!(%slug, "writing reference slug");
            doc.set_value(output, &slug);
        });
        document.on_key_up(input, handler);
        self.state.set(BinderState::Bound);

        tracing::debug!(
            input = %self.config.input_selector(),
            output = %self.config.output_selector(),
            "reference slug binding established"
        );
        BindOutcome::Bound { input, output }
    }

    /// Derives a validated reference for `name`, for callers that need the
    /// slug outside of the live binding.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] when `name` has nothing that
    /// survives slugification.
    pub fn reference_for(&self, name: &str) -> ApplicationResult<Slug> {
        let slug = self.generator.slugify(name);
        if slug.is_empty() {
            return Err(ApplicationError::validation(format!(
                "no reference can be derived from name {name:?}"
            )));
        }
        Ok(Slug::new(slug)?)
    }
}

fn lookup(document: &dyn Document, selector: &str) -> Option<ElementId> {
    let selector = Selector::parse(selector).ok()?;
    document.query_selector(&selector)
}
