//! YAML configuration for the generate and check-connection commands.
//!
//! Every section is optional; command-line flags take precedence over values
//! read here.
//!
//! ```yaml
//! seed: 42
//! today: 2025-01-31
//! output_dir: out
//! files:
//!   sales: ventas.csv
//! master:
//!   products: [Vidrio Templado, Vidrio Laminado]
//! profile:
//!   quantity: { min: 10, max: 100 }
//! warehouse:
//!   host: analytics.duckdb
//! ```

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use synth_data::{Dataset, GenerationProfile, MasterData};

/// Output file names per dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    pub sales: String,
    pub production: String,
    pub inventory: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            sales: Dataset::Sales.default_file_name().to_string(),
            production: Dataset::Production.default_file_name().to_string(),
            inventory: Dataset::Inventory.default_file_name().to_string(),
        }
    }
}

impl FileNames {
    pub fn get(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Sales => &self.sales,
            Dataset::Production => &self.production,
            Dataset::Inventory => &self.inventory,
        }
    }
}

/// Connection settings for the warehouse diagnostic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseSection {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub query: Option<String>,
}

/// Complete YAML configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatagenConfig {
    pub seed: Option<u64>,
    pub today: Option<NaiveDate>,
    pub output_dir: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub files: FileNames,
    pub master: MasterData,
    pub profile: GenerationProfile,
    pub warehouse: WarehouseSection,
}

impl DatagenConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: DatagenConfig = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise return the defaults
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

/// Parse a field delimiter, which must be a single ASCII character
pub fn parse_delimiter(c: char) -> anyhow::Result<u8> {
    if !c.is_ascii() || c == '\n' || c == '\r' || c == '"' {
        anyhow::bail!(
            "Invalid delimiter {:?}: must be a single ASCII character other than a quote or newline",
            c
        );
    }
    Ok(c as u8)
}
