// src/lib.rs
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::ports::util::SlugGenerator;
pub use config::BinderConfig;
pub use infrastructure::util::{DefaultSlugGenerator, slugify};
pub use presentation::form::{Installation, install, install_default};
