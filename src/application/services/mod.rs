// src/application/services/mod.rs
pub mod slug_binder;

pub use slug_binder::{BindOutcome, BinderState, MissingElement, SlugBinder};
