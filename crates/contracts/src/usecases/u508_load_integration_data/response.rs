use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the integrations backend.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects with a `msg` field instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Lenient parse: a body that is not JSON yields an empty response
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Human readable message, if the backend provided one
    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body = r#"{"detail":"Invalid Notion token"}"#;
        assert_eq!(
            ErrorResponse::from_body(body).detail_message().as_deref(),
            Some("Invalid Notion token")
        );
    }

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail":[{"loc":["body","credentials"],"msg":"field required"},{"msg":"bad value"}]}"#;
        assert_eq!(
            ErrorResponse::from_body(body).detail_message().as_deref(),
            Some("field required; bad value")
        );
    }

    #[test]
    fn test_missing_or_unusable_detail() {
        assert_eq!(ErrorResponse::from_body("{}").detail_message(), None);
        assert_eq!(ErrorResponse::from_body(r#"{"detail":""}"#).detail_message(), None);
        assert_eq!(ErrorResponse::from_body(r#"{"detail":42}"#).detail_message(), None);
        assert_eq!(ErrorResponse::from_body("Internal Server Error").detail_message(), None);
    }
}
