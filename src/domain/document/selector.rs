// src/domain/document/selector.rs
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("unexpected character {ch:?} at offset {at}")]
    UnexpectedChar { ch: char, at: usize },
    #[error("missing name after {marker:?} at offset {at}")]
    MissingName { marker: char, at: usize },
}

impl From<SelectorError> for DomainError {
    fn from(value: SelectorError) -> Self {
        Self::validation(value.to_string())
    }
}

/// A compound selector such as `input.govuk-input#name`.
///
/// Only a tag name (or `*`), `#id` and `.class` parts are understood; there
/// are no combinators, attribute selectors or pseudo-classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
}

const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl Selector {
    /// # Errors
    ///
    /// Returns a [`SelectorError`] for an empty selector, a part with no name
    /// after `#` or `.`, or any construct other than tag, id and class.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let source = input.trim();
        if source.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut tag = None;
        let mut ids = Vec::new();
        let mut classes = Vec::new();
        let mut chars = source.char_indices().peekable();

        if let Some(&(_, first)) = chars.peek() {
            if first == '*' {
                chars.next();
            } else if first.is_ascii_alphabetic() {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                tag = Some(name.to_ascii_lowercase());
            }
        }

        while let Some((at, marker)) = chars.next() {
            if marker != '#' && marker != '.' {
                return Err(SelectorError::UnexpectedChar { ch: marker, at });
            }
            let mut name = String::new();
            while let Some(&(_, c)) = chars.peek() {
                if !is_name_char(c) {
                    break;
                }
                name.push(c);
                chars.next();
            }
            if name.is_empty() {
                return Err(SelectorError::MissingName { marker, at });
            }
            if marker == '#' {
                ids.push(name);
            } else {
                classes.push(name);
            }
        }

        Ok(Self {
            source: source.to_string(),
            tag,
            ids,
            classes,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Tag names compare ASCII case-insensitively; ids and classes exactly.
    #[must_use]
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(expected) = &self.tag
            && !expected.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if !self.ids.iter().all(|want| id == Some(want.as_str())) {
            return false;
        }
        self.classes
            .iter()
            .all(|want| classes.iter().any(|have| have == want))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::{Selector, SelectorError};

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parses_class_and_id() {
        let sel = Selector::parse(".govuk-input#name").expect("parse");
        assert!(sel.matches("input", Some("name"), &classes(&["govuk-input"])));
        assert!(!sel.matches("input", Some("reference"), &classes(&["govuk-input"])));
        assert!(!sel.matches("input", Some("name"), &classes(&["other"])));
    }

    #[test]
    fn tag_matching_ignores_ascii_case() {
        let sel = Selector::parse("INPUT#name").expect("parse");
        assert!(sel.matches("input", Some("name"), &[]));
        assert!(!sel.matches("textarea", Some("name"), &[]));
    }

    #[test]
    fn universal_selector_matches_any_tag() {
        let sel = Selector::parse("*.a.b").expect("parse");
        assert!(sel.matches("div", None, &classes(&["b", "a", "c"])));
        assert!(!sel.matches("div", None, &classes(&["a"])));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let sel = Selector::parse("  #name ").expect("parse");
        assert_eq!(sel.as_str(), "#name");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert_eq!(
            Selector::parse("#"),
            Err(SelectorError::MissingName { marker: '#', at: 0 })
        );
        assert_eq!(
            Selector::parse("div > p"),
            Err(SelectorError::UnexpectedChar { ch: ' ', at: 3 })
        );
        assert!(Selector::parse("[type=text]").is_err());
    }
}
