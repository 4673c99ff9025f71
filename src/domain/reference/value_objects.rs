use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// A non-empty reference slug: lowercase ASCII letters and digits separated by
/// single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] when `value` is empty or not
    /// lowercase kebab-case.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        if !Self::is_well_formed(&value) {
            return Err(DomainError::validation(format!(
                "slug must be lowercase kebab-case: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Checks the slug shape. The empty string passes: it is what slugify
    /// yields for blank input.
    #[must_use]
    pub fn is_well_formed(value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
