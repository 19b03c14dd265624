//! Form submission controller
//!
//! One generic pipeline behind every login form: validate the configured
//! fields, build the JSON body, POST it, and turn the reply into either a
//! success notice or a [`SubmitError`]. Pages only supply a
//! [`SubmissionConfig`] and their current field values.

use contracts::system::auth::LoginReply;
use gloo_net::http::Request;
use serde_json::{Map, Value};

use crate::shared::api_utils::api_url;

/// Notice shown when a required field is left blank.
pub const VALIDATION_NOTICE: &str = "Please fill in all fields";
/// Notice shown when the request fails or the reply is not JSON.
pub const TRANSPORT_NOTICE: &str = "An error occurred during login";
/// Success notice used when the server sends no `message`.
pub const SUCCESS_NOTICE: &str = "Login successful!";

/// Maps a rendered input element to a key in the JSON request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub input_id: &'static str,
    pub json_key: &'static str,
}

/// Static description of one login form: which fields to collect, where to
/// send them, and where to go on success. One `const` per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionConfig {
    pub fields: &'static [FieldSpec],
    pub endpoint: &'static str,
    pub success_redirect: &'static str,
}

/// Why a submission attempt failed. Every variant is terminal for the
/// attempt; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field was blank. No request was made.
    Validation,
    /// The reply carried a non-empty `error`; shown to the user verbatim.
    ServerReported(String),
    /// The request failed to send or the reply body was not JSON. The
    /// detail goes to the console log; the user sees a generic notice.
    Transport(String),
}

impl SubmitError {
    /// User-facing text for this failure.
    pub fn notice(&self) -> String {
        match self {
            SubmitError::Validation => VALIDATION_NOTICE.to_string(),
            SubmitError::ServerReported(error) => error.clone(),
            SubmitError::Transport(_) => TRANSPORT_NOTICE.to_string(),
        }
    }
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation => write!(f, "required field is blank"),
            SubmitError::ServerReported(error) => write!(f, "server reported: {}", error),
            SubmitError::Transport(detail) => write!(f, "transport failure: {}", detail),
        }
    }
}

/// Pair each configured field with its current value and build the request
/// body. Returns [`SubmitError::Validation`] if any value is blank; the
/// resulting map holds exactly the configured `json_key`s, in field order.
pub fn build_payload(
    config: &SubmissionConfig,
    values: &[String],
) -> Result<Map<String, Value>, SubmitError> {
    if values.len() != config.fields.len() {
        return Err(SubmitError::Validation);
    }

    let mut payload = Map::new();
    for (field, value) in config.fields.iter().zip(values) {
        if value.trim().is_empty() {
            return Err(SubmitError::Validation);
        }
        payload.insert(field.json_key.to_string(), Value::String(value.clone()));
    }
    Ok(payload)
}

/// Turn a parsed reply into a success notice or a failure. A non-empty
/// `error` wins over any `message`.
pub fn interpret_reply(reply: LoginReply) -> Result<String, SubmitError> {
    if let Some(error) = reply.error.filter(|e| !e.is_empty()) {
        return Err(SubmitError::ServerReported(error));
    }
    Ok(reply
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| SUCCESS_NOTICE.to_string()))
}

/// Run one submission attempt: validate, POST the JSON body, interpret the
/// reply. Exactly one request is issued per valid attempt; a validation
/// failure never reaches the network.
pub async fn submit(config: &SubmissionConfig, values: &[String]) -> Result<String, SubmitError> {
    let payload = build_payload(config, values)?;

    let response = Request::post(&api_url(config.endpoint))
        .json(&payload)
        .map_err(|e| {
            log::error!("failed to serialize request to {}: {}", config.endpoint, e);
            SubmitError::Transport(format!("Failed to serialize request: {}", e))
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("failed to send request to {}: {}", config.endpoint, e);
            SubmitError::Transport(format!("Failed to send request: {}", e))
        })?;

    // Credential failures come back as 4xx with a JSON error body, so the
    // status code is not checked here; the body decides.
    let reply = response.json::<LoginReply>().await.map_err(|e| {
        log::error!("failed to parse reply from {}: {}", config.endpoint, e);
        SubmitError::Transport(format!("Failed to parse response: {}", e))
    })?;

    interpret_reply(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG: SubmissionConfig = SubmissionConfig {
        fields: &[
            FieldSpec {
                input_id: "user_id",
                json_key: "user_id",
            },
            FieldSpec {
                input_id: "password",
                json_key: "password",
            },
        ],
        endpoint: "/admin_login",
        success_redirect: "/admin_dashboard",
    };

    #[test]
    fn blank_field_fails_validation() {
        let values = vec!["a1".to_string(), String::new()];
        assert_eq!(
            build_payload(&TEST_CONFIG, &values),
            Err(SubmitError::Validation)
        );

        let values = vec!["   ".to_string(), "p1".to_string()];
        assert_eq!(
            build_payload(&TEST_CONFIG, &values),
            Err(SubmitError::Validation)
        );
    }

    #[test]
    fn missing_value_fails_validation() {
        let values = vec!["a1".to_string()];
        assert_eq!(
            build_payload(&TEST_CONFIG, &values),
            Err(SubmitError::Validation)
        );
    }

    #[test]
    fn payload_holds_exactly_the_configured_keys() {
        let values = vec!["a1".to_string(), "p1".to_string()];
        let payload = build_payload(&TEST_CONFIG, &values).unwrap();

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"user_id":"a1","password":"p1"}"#
        );
    }

    #[test]
    fn server_error_wins_over_message() {
        let reply = LoginReply {
            error: Some("bad credentials".to_string()),
            message: Some("ignored".to_string()),
        };
        assert_eq!(
            interpret_reply(reply),
            Err(SubmitError::ServerReported("bad credentials".to_string()))
        );
    }

    #[test]
    fn message_becomes_the_success_notice() {
        let reply = LoginReply {
            error: None,
            message: Some("ok".to_string()),
        };
        assert_eq!(interpret_reply(reply), Ok("ok".to_string()));
    }

    #[test]
    fn empty_reply_falls_back_to_generic_notice() {
        assert_eq!(
            interpret_reply(LoginReply::default()),
            Ok(SUCCESS_NOTICE.to_string())
        );

        // An empty error string is not a server-reported failure.
        let reply = LoginReply {
            error: Some(String::new()),
            message: None,
        };
        assert_eq!(interpret_reply(reply), Ok(SUCCESS_NOTICE.to_string()));
    }

    #[test]
    fn notices_match_the_taxonomy() {
        assert_eq!(SubmitError::Validation.notice(), VALIDATION_NOTICE);
        assert_eq!(
            SubmitError::ServerReported("bad credentials".to_string()).notice(),
            "bad credentials"
        );
        assert_eq!(
            SubmitError::Transport("connection refused".to_string()).notice(),
            TRANSPORT_NOTICE
        );
    }
}
