// tests/support/mocks.rs
use std::sync::Mutex;

use slug_binder::application::ports::util::SlugGenerator;

#[derive(Clone)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_string()
    }
}

/// Slugifies with the real generator and remembers every input it saw.
#[derive(Default)]
pub struct RecordingSlug {
    seen: Mutex<Vec<String>>,
}

impl RecordingSlug {
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl SlugGenerator for RecordingSlug {
    fn slugify(&self, s: &str) -> String {
        self.seen.lock().unwrap().push(s.to_string());
        slug_binder::slugify(s)
    }
}
