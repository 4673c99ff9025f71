// src/application/ports/mod.rs
pub mod document;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type DocumentPort = dyn document::Document;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
