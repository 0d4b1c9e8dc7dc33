use crate::shared::api_utils::api_url;
use contracts::enums::IntegrationType;
use contracts::usecases::u508_load_integration_data::{Credentials, ErrorResponse, LoadRequest};
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to serialize credentials: {0}")]
    Serialize(String),

    #[error("Failed to build request: {0}")]
    Request(String),

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    InvalidBody(String),
}

impl LoadError {
    /// Message supplied by the backend, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            LoadError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for the blocking alert shown to the user
    pub fn alert_message(&self, integration: IntegrationType) -> String {
        match self.detail() {
            Some(detail) => detail.to_string(),
            None => format!("Failed to load {} data", integration.display_name()),
        }
    }
}

/// POST the credentials to `/integrations/{code}/load` and return the body as is
pub async fn load(
    integration: IntegrationType,
    credentials: &Credentials,
) -> Result<Value, LoadError> {
    let request = LoadRequest::new(integration, credentials.clone());
    let url = api_url(&request.path());

    let fields = request
        .form_fields()
        .map_err(|e| LoadError::Serialize(e.to_string()))?;
    let form = web_sys::FormData::new()
        .map_err(|e| LoadError::Request(format!("Failed to create form: {:?}", e)))?;
    for (name, value) in &fields {
        form.append_with_str(name, value)
            .map_err(|e| LoadError::Request(format!("Failed to append field {}: {:?}", name, e)))?;
    }

    log::info!("Loading {} data from {}", integration, url);

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| LoadError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from_response(status, &body));
    }

    parse_success_body(&body)
}

fn error_from_response(status: u16, body: &str) -> LoadError {
    LoadError::Http {
        status,
        detail: ErrorResponse::from_body(body).detail_message(),
    }
}

fn parse_success_body(body: &str) -> Result<Value, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::InvalidBody(e.to_string()))
}
