use serde::{Deserialize, Serialize};

/// Discriminates applications from reusable modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationKind {
    /// A regular application.
    App,
    /// A reusable module.
    Module,
}

impl std::fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::App => f.write_str("App"),
            Self::Module => f.write_str("Module"),
        }
    }
}

/// One record from the remote application listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    /// Opaque application identifier.
    pub application_id: String,
    /// Display name.
    pub name: String,
    /// Remote type discriminant; `2` marks a module.
    pub application_type: i64,
}

impl ApplicationSummary {
    /// Whether this record is an app or a module.
    #[must_use]
    pub fn kind(&self) -> ApplicationKind {
        if self.application_type == 2 {
            ApplicationKind::Module
        } else {
            ApplicationKind::App
        }
    }

    /// The picker label: `"<name> (<App|Module>)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind())
    }
}

/// Envelope of the `applications/list` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApplicationListResponse {
    #[serde(default)]
    pub data: Vec<ApplicationSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, name: &str, ty: i64) -> ApplicationSummary {
        ApplicationSummary {
            application_id: id.into(),
            name: name.into(),
            application_type: ty,
        }
    }

    #[test]
    fn type_two_is_module() {
        assert_eq!(summary("1", "Foo", 1).kind(), ApplicationKind::App);
        assert_eq!(summary("2", "Bar", 2).kind(), ApplicationKind::Module);
        // Unknown discriminants fall back to App, like the remote UI does.
        assert_eq!(summary("3", "Baz", 7).kind(), ApplicationKind::App);
    }

    #[test]
    fn display_labels() {
        assert_eq!(summary("1", "Foo", 1).display_label(), "Foo (App)");
        assert_eq!(summary("2", "Bar", 2).display_label(), "Bar (Module)");
    }

    #[test]
    fn deserializes_camel_case() {
        let record: ApplicationSummary = serde_json::from_value(serde_json::json!({
            "applicationId": "65129e728953c27f7d15b64d",
            "name": "CRM",
            "applicationType": 1,
        }))
        .unwrap();
        assert_eq!(record.application_id, "65129e728953c27f7d15b64d");
        assert_eq!(record.kind(), ApplicationKind::App);
    }

    #[test]
    fn list_envelope_tolerates_missing_data() {
        let resp: ApplicationListResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.data.is_empty());
    }
}
