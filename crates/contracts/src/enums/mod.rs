pub mod integration_type;

pub use integration_type::IntegrationType;
