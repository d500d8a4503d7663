use serde::{Deserialize, Serialize};

use super::validation::ValidationRule;
use super::{ParameterMetadata, SelectOption};

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Pre-filled value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Validation rules applied at form time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation: Vec<ValidationRule>,
}

impl TextParameter {
    /// Create a text parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
            validation: Vec::new(),
        }
    }
}

/// A masked secret input. Always sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,
}

impl SecretParameter {
    /// Create a secret parameter; `sensitive` is set unconditionally.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        let mut metadata = ParameterMetadata::new(key, name);
        metadata.sensitive = true;
        Self { metadata }
    }
}

/// A numeric input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Pre-filled value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
}

impl NumberParameter {
    /// Create a number parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
        }
    }

    /// Set the default value (builder-style).
    #[must_use]
    pub fn with_default(mut self, value: f64) -> Self {
        self.default = Some(value);
        self
    }
}

/// A boolean toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Initial state.
    #[serde(default)]
    pub default: bool,
}

impl CheckboxParameter {
    /// Create a checkbox parameter defaulting to unchecked.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: false,
        }
    }
}

/// A single choice from a fixed option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// The selectable options, in display order.
    pub options: Vec<SelectOption>,

    /// Pre-selected value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl SelectParameter {
    /// Create a select parameter with no options.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            options: Vec::new(),
            default: None,
        }
    }

    /// Add an option (builder-style).
    #[must_use]
    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the default value (builder-style).
    #[must_use]
    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A value carried by the form but never shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// Initial value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl HiddenParameter {
    /// Create a hidden parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            default: None,
        }
    }
}

/// Display-only informational text. Carries no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// The message shown to the user.
    pub message: String,
}

impl NoticeParameter {
    /// Create a notice.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            message: message.into(),
        }
    }
}

/// A collection of optional child parameters ("Add Option" groups).
///
/// Children's values are stored under the group's key as an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// The grouped child parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDef>,
}

impl GroupParameter {
    /// Create an empty group.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            parameters: Vec::new(),
        }
    }

    /// Add a child parameter (builder-style).
    #[must_use]
    pub fn with_parameter(mut self, param: ParameterDef) -> Self {
        self.parameters.push(param);
        self
    }
}

/// Wraps a parameter whose value the host treats as expirable.
///
/// When the wrapped value is empty or the host's expiry tracking marks
/// it stale, the owning credential type's pre-authentication runs before
/// the value is used again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirableParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// The wrapped parameter.
    pub inner: Box<ParameterDef>,
}

impl ExpirableParameter {
    /// Wrap a parameter as expirable.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>, inner: ParameterDef) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            inner: Box::new(inner),
        }
    }
}

/// One way the user may locate a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResourceMode {
    /// Interactive pick from a remote listing.
    List {
        /// Name of the plugin's search method, matching a registered
        /// [`ResourceSearch`](crate::search::ResourceSearch).
        search_method: String,
        /// Placeholder shown before a selection is made.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },

    /// Manual identifier entry.
    Id {
        /// Validation applied before the value is accepted.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        validation: Vec<ValidationRule>,
        /// Representative example shown as placeholder.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

/// A remote-resource selector offering one or more location modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceParameter {
    /// Common metadata.
    #[serde(flatten)]
    pub metadata: ParameterMetadata,

    /// The available modes, in display order.
    pub modes: Vec<ResourceMode>,
}

impl ResourceParameter {
    /// Create a resource selector with no modes.
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            metadata: ParameterMetadata::new(key, name),
            modes: Vec::new(),
        }
    }

    /// Add a mode (builder-style).
    #[must_use]
    pub fn with_mode(mut self, mode: ResourceMode) -> Self {
        self.modes.push(mode);
        self
    }
}

/// A concrete parameter definition, tagged by type.
///
/// The `type` field in JSON determines the variant during
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterDef {
    /// Single-line text input.
    Text(TextParameter),
    /// Masked secret input.
    Secret(SecretParameter),
    /// Numeric input.
    Number(NumberParameter),
    /// Boolean toggle.
    Checkbox(CheckboxParameter),
    /// Single choice from fixed options.
    Select(SelectParameter),
    /// Hidden carried value.
    Hidden(HiddenParameter),
    /// Display-only informational text.
    Notice(NoticeParameter),
    /// Optional-children collection.
    Group(GroupParameter),
    /// Expirable wrapper.
    Expirable(ExpirableParameter),
    /// Remote-resource selector.
    Resource(ResourceParameter),
}

impl ParameterDef {
    /// Access the common metadata for this parameter.
    #[must_use]
    pub fn metadata(&self) -> &ParameterMetadata {
        match self {
            Self::Text(p) => &p.metadata,
            Self::Secret(p) => &p.metadata,
            Self::Number(p) => &p.metadata,
            Self::Checkbox(p) => &p.metadata,
            Self::Select(p) => &p.metadata,
            Self::Hidden(p) => &p.metadata,
            Self::Notice(p) => &p.metadata,
            Self::Group(p) => &p.metadata,
            Self::Expirable(p) => &p.metadata,
            Self::Resource(p) => &p.metadata,
        }
    }

    /// The unique key identifying this parameter.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.metadata().key
    }

    /// Whether this parameter is required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.metadata().required
    }

    /// Mark this parameter as required (builder-style).
    #[must_use]
    pub fn required(mut self) -> Self {
        let metadata = match &mut self {
            Self::Text(p) => &mut p.metadata,
            Self::Secret(p) => &mut p.metadata,
            Self::Number(p) => &mut p.metadata,
            Self::Checkbox(p) => &mut p.metadata,
            Self::Select(p) => &mut p.metadata,
            Self::Hidden(p) => &mut p.metadata,
            Self::Notice(p) => &mut p.metadata,
            Self::Group(p) => &mut p.metadata,
            Self::Expirable(p) => &mut p.metadata,
            Self::Resource(p) => &mut p.metadata,
        };
        metadata.required = true;
        self
    }
}
