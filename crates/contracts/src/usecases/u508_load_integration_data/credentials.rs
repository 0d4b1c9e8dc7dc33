use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Credentials must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Opaque credentials of a connected integration.
///
/// The widget never looks inside: the map is forwarded to the backend
/// exactly as the parent component supplied it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(Map<String, Value>);

impl Credentials {
    /// Parse credentials pasted as JSON text. Only objects are accepted.
    pub fn from_json_str(text: &str) -> Result<Self, CredentialsError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CredentialsError::NotAnObject(json_type_name(&other))),
        }
    }

    /// Serialized form sent in the multipart `credentials` field
    pub fn to_form_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let creds = Credentials::from_json_str(r#"{"api_key":"secret","workspace":7}"#).unwrap();
        let sent: Value = serde_json::from_str(&creds.to_form_value().unwrap()).unwrap();
        assert_eq!(sent, json!({"api_key": "secret", "workspace": 7}));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = Credentials::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, CredentialsError::NotAnObject("array")));

        let err = Credentials::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CredentialsError::InvalidJson(_)));
    }

    #[test]
    fn test_form_value_is_passed_through_unchanged() {
        let text = r#"{"token":"abc","nested":{"scopes":["read","write"]},"ttl":null}"#;
        let creds = Credentials::from_json_str(text).unwrap();
        assert_eq!(creds.to_form_value().unwrap(), text);
    }

    #[test]
    fn test_empty_credentials_serialize_to_empty_object() {
        assert_eq!(Credentials::default().to_form_value().unwrap(), "{}");
    }
}
