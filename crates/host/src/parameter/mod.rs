//! Form-field descriptors rendered by the host UI.
//!
//! Pure data: the host draws the form, applies display logic, and stores
//! the entered values. The only behavior that lives plugin-side is
//! [`ValidationRule::validate`], which hosts run at form time so invalid
//! input never reaches network code.

mod def;
mod validation;

pub use def::{
    CheckboxParameter, ExpirableParameter, GroupParameter, HiddenParameter, NoticeParameter,
    NumberParameter, ParameterDef, ResourceMode, ResourceParameter, SecretParameter,
    SelectParameter, TextParameter,
};
pub use validation::ValidationRule;

use serde::{Deserialize, Serialize};

/// Descriptive metadata attached to every parameter definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    /// Unique key identifying this parameter within its parent scope.
    pub key: String,

    /// Human-readable display name.
    pub name: String,

    /// Longer description shown as tooltip or help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the user must provide a value.
    #[serde(default)]
    pub required: bool,

    /// Placeholder text shown in empty input fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether the value should be masked in the UI and logs.
    #[serde(default)]
    pub sensitive: bool,
}

impl ParameterMetadata {
    /// Create metadata with the required key and display name.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A single option in a select parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Human-readable display label.
    pub name: String,

    /// The value produced when this option is selected.
    pub value: serde_json::Value,
}

impl SelectOption {
    /// Create an option.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
