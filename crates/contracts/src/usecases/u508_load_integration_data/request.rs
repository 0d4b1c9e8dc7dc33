use super::credentials::Credentials;
use crate::enums::IntegrationType;

/// Name of the single multipart field carrying the serialized credentials
pub const CREDENTIALS_FIELD: &str = "credentials";

/// Запрос на загрузку данных интеграции
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub integration: IntegrationType,
    pub credentials: Credentials,
}

impl LoadRequest {
    pub fn new(integration: IntegrationType, credentials: Credentials) -> Self {
        Self {
            integration,
            credentials,
        }
    }

    /// Backend route, relative to the API base URL
    pub fn path(&self) -> String {
        format!("/integrations/{}/load", self.integration.code())
    }

    /// Multipart form fields, in submission order
    pub fn form_fields(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        Ok(vec![(CREDENTIALS_FIELD, self.credentials.to_form_value()?)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_per_integration() {
        let expected = [
            (IntegrationType::Notion, "/integrations/notion/load"),
            (IntegrationType::Airtable, "/integrations/airtable/load"),
            (IntegrationType::Hubspot, "/integrations/hubspot/load"),
        ];
        for (integration, path) in expected {
            let request = LoadRequest::new(integration, Credentials::default());
            assert_eq!(request.path(), path);
        }
    }

    #[test]
    fn test_single_credentials_field() {
        let credentials = Credentials::from_json_str(r#"{"token":"t-1"}"#).unwrap();
        let request = LoadRequest::new(IntegrationType::Notion, credentials);
        let fields = request.form_fields().unwrap();
        assert_eq!(fields, vec![("credentials", r#"{"token":"t-1"}"#.to_string())]);
    }
}
