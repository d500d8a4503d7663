//! The node's configuration surface, field by field.
//!
//! Pure schema: the host renders these and stores the entered values
//! under each parameter's key.

use lowcoder_api::application_id_pattern;
use lowcoder_host::{
    CheckboxParameter, GroupParameter, NoticeParameter, NumberParameter, ParameterDef,
    ResourceMode, ResourceParameter, SelectOption, SelectParameter, ValidationRule,
};

use crate::search::SEARCH_APPS_METHOD;

/// The application selector: pick from a remote listing, or enter an id
/// by hand (validated before any request is issued).
pub fn app_selector() -> ParameterDef {
    ParameterDef::Resource(
        ResourceParameter::new("app_id", "Select App or Module")
            .with_mode(ResourceMode::List {
                search_method: SEARCH_APPS_METHOD.to_owned(),
                placeholder: Some("Select an App...".to_owned()),
            })
            .with_mode(ResourceMode::Id {
                validation: vec![ValidationRule::pattern(application_id_pattern())
                    .with_message("Not a valid Lowcoder App ID")],
                placeholder: Some("65129e728953c27f7d15b64d".to_owned()),
            }),
    )
    .required()
}

/// Notices explaining how to resume a paused execution from outside.
pub fn webhook_notices() -> Vec<ParameterDef> {
    vec![
        ParameterDef::Notice(NoticeParameter::new(
            "webhook_notice",
            "Webhook Notice",
            "Resume the workflow by calling this Webhook: \
             http(s)://{host-url}/webhook-waiting/{execution-id}/{lowcoder-app-id}",
        )),
        ParameterDef::Notice(NoticeParameter::new(
            "execution_id_notice",
            "Execution ID Notice",
            "The execution ID is available via the host's REST API",
        )),
    ]
}

/// The HTTP method the webhook endpoint listens to.
pub fn http_method() -> ParameterDef {
    let methods = ["DELETE", "GET", "HEAD", "PATCH", "POST", "PUT"];
    let mut select = SelectParameter::new("http_method", "Webhook HTTP Method");
    for method in methods {
        select = select.with_option(SelectOption::new(method, method));
    }
    ParameterDef::Select(select.with_default("GET"))
}

/// The optional settings group.
pub fn options_group() -> ParameterDef {
    let mut ignore_bots = CheckboxParameter::new("ignore_bots", "Ignore Bots");
    ignore_bots.metadata.description = Some(
        "Whether to ignore requests from bots like link previewers and web crawlers".to_owned(),
    );

    let mut response_code = NumberParameter::new("response_code", "Response Code").with_default(200.0);
    response_code.metadata.description =
        Some("The HTTP status code returned when the workflow is resumed".to_owned());

    ParameterDef::Group(
        GroupParameter::new("options", "Options")
            .with_parameter(ParameterDef::Checkbox(ignore_bots))
            .with_parameter(ParameterDef::Number(response_code)),
    )
}
