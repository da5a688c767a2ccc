/*!
 * Input validation for translation requests.
 *
 * Rules run in order and the first failure wins:
 * 1. The text must contain something other than whitespace
 * 2. The text must not exceed the configured length
 * 3. The target language must be one of the supported keys
 */

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::app_config::Config;

/// Outcome of validating one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the submission may proceed
    pub is_valid: bool,
    /// Human-readable reason when invalid
    pub error_message: Option<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    /// Create a failing result
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
        }
    }
}

/// Checks submissions against the length limit and the language table
#[derive(Debug, Clone)]
pub struct InputValidator {
    max_text_length: usize,
    supported_languages: BTreeMap<String, String>,
}

impl InputValidator {
    /// Create a validator from explicit limits
    pub fn new(max_text_length: usize, supported_languages: BTreeMap<String, String>) -> Self {
        Self {
            max_text_length,
            supported_languages,
        }
    }

    /// Create a validator from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_text_length, config.supported_languages.clone())
    }

    /// Maximum accepted length in characters
    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Validate a submission
    pub fn validate(&self, text: &str, target_language: &str) -> ValidationResult {
        if text.trim().is_empty() {
            debug!("Rejected submission: blank text");
            return ValidationResult::invalid("Text is required: please enter some text to translate");
        }

        let length = text.chars().count();
        if length > self.max_text_length {
            debug!("Rejected submission: {} chars > {}", length, self.max_text_length);
            return ValidationResult::invalid(format!(
                "Text is too long: {} characters, maximum length is {}",
                length, self.max_text_length
            ));
        }

        if !self.supported_languages.contains_key(target_language) {
            debug!("Rejected submission: unsupported language '{}'", target_language);
            let supported = self
                .supported_languages
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return ValidationResult::invalid(format!(
                "Unsupported target language '{}'. Supported languages: {}",
                target_language, supported
            ));
        }

        ValidationResult::valid()
    }
}
