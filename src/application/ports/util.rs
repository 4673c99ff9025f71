// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    /// Absent input slugifies to the empty string.
    #[must_use]
    fn slugify_value(&self, input: Option<&str>) -> String {
        input.map_or_else(String::new, |s| self.slugify(s))
    }
}
