// src/presentation/form.rs
use std::{rc::Rc, sync::Arc};

use crate::application::ports::document::Document;
use crate::application::services::{BindOutcome, SlugBinder};
use crate::config::BinderConfig;
use crate::infrastructure::util::DefaultSlugGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installation {
    /// The document was already parsed, so `init` ran straight away.
    Ran(BindOutcome),
    /// `init` will run when the document signals content loaded.
    Deferred,
}

/// Runs `binder.init` once the document's elements exist: immediately if the
/// document has been parsed, otherwise on the content-loaded signal.
pub fn install(document: &dyn Document, binder: Rc<SlugBinder>) -> Installation {
    if document.ready_state().is_loading() {
        tracing::debug!("document still loading, deferring reference slug binding");
        document.on_content_loaded(Box::new(move |doc: &dyn Document| {
            binder.init(doc);
        }));
        Installation::Deferred
    } else {
        Installation::Ran(binder.init(document))
    }
}

/// Wires the name/reference pair with the built-in slug generator.
pub fn install_default(document: &dyn Document, config: BinderConfig) -> Rc<SlugBinder> {
    let binder = Rc::new(SlugBinder::new(config, Arc::new(DefaultSlugGenerator)));
    install(document, Rc::clone(&binder));
    binder
}
