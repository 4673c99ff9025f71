// src/config.rs
use std::env;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::document::{Selector, SelectorError};

pub const INPUT_SELECTOR_ENV: &str = "SLUG_INPUT_SELECTOR";
pub const OUTPUT_SELECTOR_ENV: &str = "SLUG_OUTPUT_SELECTOR";

/// Which elements to bind: the name input and the reference output.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBinderConfig")]
pub struct BinderConfig {
    input_selector: String,
    output_selector: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid selector {selector:?} for {field}: {source}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        #[source]
        source: SelectorError,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBinderConfig {
    #[serde(default = "default_input_selector")]
    input_selector: String,
    #[serde(default = "default_output_selector")]
    output_selector: String,
}

impl TryFrom<RawBinderConfig> for BinderConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBinderConfig) -> Result<Self, Self::Error> {
        Self::new(raw.input_selector, raw.output_selector)
    }
}

fn default_input_selector() -> String {
    ".govuk-input#name".into()
}

fn default_output_selector() -> String {
    ".govuk-input#reference".into()
}

fn validate(field: &'static str, selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidSelector {
            field,
            selector: selector.to_string(),
            source,
        })
}

impl BinderConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSelector`] naming the first selector that
    /// does not parse.
    pub fn new(
        input_selector: impl Into<String>,
        output_selector: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let input_selector = input_selector.into();
        let output_selector = output_selector.into();
        validate("input_selector", &input_selector)?;
        validate("output_selector", &output_selector)?;
        Ok(Self {
            input_selector,
            output_selector,
        })
    }

    /// Build configuration from environment variables, falling back to the
    /// default selectors for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSelector`] when an override does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let input_selector =
            env::var(INPUT_SELECTOR_ENV).unwrap_or_else(|_| default_input_selector());
        let output_selector =
            env::var(OUTPUT_SELECTOR_ENV).unwrap_or_else(|_| default_output_selector());

        Self::new(input_selector, output_selector)
    }

    #[must_use]
    pub fn input_selector(&self) -> &str {
        &self.input_selector
    }

    #[must_use]
    pub fn output_selector(&self) -> &str {
        &self.output_selector
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            input_selector: default_input_selector(),
            output_selector: default_output_selector(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BinderConfig, ConfigError};

    #[test]
    fn defaults_target_govuk_name_and_reference() {
        let config = BinderConfig::default();
        assert_eq!(config.input_selector(), ".govuk-input#name");
        assert_eq!(config.output_selector(), ".govuk-input#reference");
    }

    #[test]
    fn rejects_unparsable_selector() {
        let err = BinderConfig::new("#name", "div > input").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSelector {
                field: "output_selector",
                ..
            }
        ));
    }
}
