//! Academy configuration
//!
//! Everything that identifies the academy or shapes its reports lives here
//! and is passed to whoever needs it, instead of being hard-wired.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for one academy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademyConfig {
    /// Name printed at the top of receipts
    #[serde(default = "default_academy_name")]
    pub academy_name: String,

    /// Postal address printed under the name
    #[serde(default = "default_address")]
    pub address: String,

    /// Contact line printed under the address
    #[serde(default = "default_phone")]
    pub phone: String,

    /// Prefix placed before every formatted amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// First segment of receipt numbers, e.g. "PSA" in PSA-2024-007
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,

    /// Classes in curriculum order; the class report follows this order
    #[serde(default = "default_class_order")]
    pub class_order: Vec<String>,

    /// Directory holding the CSV data files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_academy_name() -> String { "Perfect Science Academy".to_string() }
fn default_address() -> String { "160 GB Kaleki, Gojra, Toba Tek Singh".to_string() }
fn default_phone() -> String { "Phone: 03457574147 (Sajid Ali), 0346 4850171 (Usman Mustafa)".to_string() }
fn default_currency_symbol() -> String { "Rs.".to_string() }
fn default_invoice_prefix() -> String { "PSA".to_string() }
fn default_data_dir() -> PathBuf { PathBuf::from("data") }

fn default_class_order() -> Vec<String> {
    [
        "5th Grade",
        "6th Grade",
        "7th Grade",
        "8th Grade",
        "9th Grade",
        "10th Grade",
        "11th Grade (1st Year)",
        "12th Grade (2nd Year)",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            academy_name: default_academy_name(),
            address: default_address(),
            phone: default_phone(),
            currency_symbol: default_currency_symbol(),
            invoice_prefix: default_invoice_prefix(),
            class_order: default_class_order(),
            data_dir: default_data_dir(),
        }
    }
}

impl AcademyConfig {
    /// Load from a JSON file. Fields missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// True if `class_name` is one of the configured classes
    pub fn is_known_class(&self, class_name: &str) -> bool {
        self.class_order.iter().any(|c| c == class_name)
    }
}
