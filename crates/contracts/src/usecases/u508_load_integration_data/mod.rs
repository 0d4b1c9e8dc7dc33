pub mod credentials;
pub mod request;
pub mod response;

pub use credentials::{Credentials, CredentialsError};
pub use request::{LoadRequest, CREDENTIALS_FIELD};
pub use response::ErrorResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct LoadIntegrationData;

impl UseCaseMetadata for LoadIntegrationData {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "load_integration_data"
    }

    fn display_name() -> &'static str {
        "Integration Data"
    }

    fn description() -> &'static str {
        "Loads data from a connected Notion, Airtable or Hubspot integration"
    }
}
