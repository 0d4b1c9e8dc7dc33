//! Widget state kept separate from signals so transitions stay plain Rust

use contracts::usecases::u508_load_integration_data::Credentials;
use serde_json::Value;

/// Last successfully loaded integration payload.
///
/// Either empty or exactly the most recent successful response; a failed
/// load never touches it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedData {
    value: Option<Value>,
}

impl LoadedData {
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Replace the held value on success, keep it on failure. The error is
    /// handed back to the caller for reporting.
    pub fn apply<E>(&mut self, result: Result<Value, E>) -> Result<(), E> {
        let value = result?;
        self.value = Some(value);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

/// Load needs credentials from the parent and no request in flight
pub fn can_load(is_loading: bool, credentials: Option<&Credentials>) -> bool {
    !is_loading && credentials.is_some()
}

/// Which renderer variant shows the loaded value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Tree,
    Raw,
}

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Tree => "Tree",
            DisplayMode::Raw => "Raw JSON",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            DisplayMode::Tree => "tree",
            DisplayMode::Raw => "code",
        }
    }

    pub fn all() -> [DisplayMode; 2] {
        [DisplayMode::Tree, DisplayMode::Raw]
    }
}
