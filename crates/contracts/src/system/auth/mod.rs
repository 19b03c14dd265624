use serde::{Deserialize, Serialize};

/// Reply body shared by every login endpoint.
///
/// The server answers credential failures with a JSON `error` (and a 4xx
/// status) and successes with a `message`. It may attach extra fields such
/// as `redirect`; those are ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_reply() {
        let reply: LoginReply = serde_json::from_str(r#"{"error":"bad credentials"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("bad credentials"));
        assert_eq!(reply.message, None);
    }

    #[test]
    fn parses_success_reply_with_extra_fields() {
        let reply: LoginReply =
            serde_json::from_str(r#"{"message":"Login successful!","redirect":"/admin_dashboard"}"#)
                .unwrap();
        assert_eq!(reply.error, None);
        assert_eq!(reply.message.as_deref(), Some("Login successful!"));
    }

    #[test]
    fn parses_empty_reply() {
        let reply: LoginReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.error, None);
        assert_eq!(reply.message, None);
    }
}
