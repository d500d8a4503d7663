use regex::Regex;
use serde::{Deserialize, Serialize};

/// A declarative validation rule attached to a parameter.
///
/// Rules are serialized into the parameter schema for the host UI, and
/// evaluated via [`validate`](Self::validate) before any request is
/// issued — a failing value is a form error, never a network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// String must be at least `length` characters.
    MinLength {
        /// Minimum character count.
        length: usize,
        /// Error message shown on failure.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// String must be at most `length` characters.
    MaxLength {
        /// Maximum character count.
        length: usize,
        /// Error message shown on failure.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// The whole string must match the given pattern.
    Pattern {
        /// Regex the value must match in full.
        pattern: String,
        /// Error message shown on failure.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl ValidationRule {
    /// Require a minimum string length.
    #[must_use]
    pub fn min_length(length: usize) -> Self {
        Self::MinLength {
            length,
            message: None,
        }
    }

    /// Require a maximum string length.
    #[must_use]
    pub fn max_length(length: usize) -> Self {
        Self::MaxLength {
            length,
            message: None,
        }
    }

    /// Require a full-string regex match.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: None,
        }
    }

    /// Attach an error message (builder-style).
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        match &mut self {
            Self::MinLength { message, .. }
            | Self::MaxLength { message, .. }
            | Self::Pattern { message, .. } => *message = Some(msg.into()),
        }
        self
    }

    /// Evaluate the rule against a form value.
    ///
    /// # Errors
    ///
    /// Returns the rule's message (or a generic one) when the value does
    /// not satisfy the rule, or when a `Pattern` rule carries a regex
    /// that fails to compile.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            Self::MinLength { length, message } => {
                if value.chars().count() >= *length {
                    Ok(())
                } else {
                    Err(message
                        .clone()
                        .unwrap_or_else(|| format!("must be at least {length} characters")))
                }
            }
            Self::MaxLength { length, message } => {
                if value.chars().count() <= *length {
                    Ok(())
                } else {
                    Err(message
                        .clone()
                        .unwrap_or_else(|| format!("must be at most {length} characters")))
                }
            }
            Self::Pattern { pattern, message } => {
                // Anchored: the whole value must match, so a valid run
                // embedded in an invalid value does not slip through.
                let anchored = format!("^(?:{pattern})$");
                let failure = || {
                    message
                        .clone()
                        .unwrap_or_else(|| "value does not match the expected pattern".to_owned())
                };
                match Regex::new(&anchored) {
                    Ok(re) if re.is_match(value) => Ok(()),
                    Ok(_) | Err(_) => Err(failure()),
                }
            }
        }
    }
}
