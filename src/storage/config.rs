//! Database configuration
//!
//! Both settings are optional. Their absence is not a startup failure: the
//! service runs without a store and reports it through diagnostics.

use serde::{Deserialize, Serialize};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";

/// Database connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string, e.g. "mongodb://localhost:27017"
    #[serde(default)]
    pub url: Option<String>,

    /// Database name
    #[serde(default)]
    pub name: Option<String>,
}

impl DatabaseConfig {
    /// Reads the settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            url: read(DATABASE_URL_VAR),
            name: read(DATABASE_NAME_VAR),
        }
    }

    pub fn is_url_set(&self) -> bool {
        self.url.is_some()
    }

    pub fn is_name_set(&self) -> bool {
        self.name.is_some()
    }

    /// Returns `(url, name)` when both are configured
    pub fn settings(&self) -> Option<(&str, &str)> {
        match (&self.url, &self.name) {
            (Some(url), Some(name)) => Some((url, name)),
            _ => None,
        }
    }
}
