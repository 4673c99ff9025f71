pub mod document;
pub mod util;
