use serde::{Deserialize, Serialize};
use std::fmt;

/// Подключаемые внешние источники данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    Notion,
    Airtable,
    Hubspot,
}

impl IntegrationType {
    /// Path segment used by the backend route `/integrations/{code}/load`
    pub fn code(&self) -> &'static str {
        match self {
            IntegrationType::Notion => "notion",
            IntegrationType::Airtable => "airtable",
            IntegrationType::Hubspot => "hubspot",
        }
    }

    /// Human readable label, also the value the parent form passes in
    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrationType::Notion => "Notion",
            IntegrationType::Airtable => "Airtable",
            IntegrationType::Hubspot => "Hubspot",
        }
    }

    pub fn all() -> Vec<IntegrationType> {
        vec![
            IntegrationType::Notion,
            IntegrationType::Airtable,
            IntegrationType::Hubspot,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "notion" => Some(IntegrationType::Notion),
            "airtable" => Some(IntegrationType::Airtable),
            "hubspot" => Some(IntegrationType::Hubspot),
            _ => None,
        }
    }

    /// Accepts either the display label ("Notion") or the path code ("notion")
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|t| t.display_name() == label)
            .or_else(|| Self::from_code(label))
    }
}

impl fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
