//! Report formatting configuration
//!
//! Read from `--config <path>` or from the file named by
//! `SQUARES_REPORT_CONFIG`. With neither, defaults apply.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const REPORT_CONFIG_PATH_ENV: &str = "SQUARES_REPORT_CONFIG";

pub const MIN_CELL_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Pretty-print JSON reports
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Joins the names on a shared square
    #[serde(default = "default_owner_separator")]
    pub owner_separator: String,

    /// Placeholder for unassigned squares and unset axis digits
    #[serde(default = "default_empty_cell")]
    pub empty_cell: String,

    /// Column width of the ASCII grid (min 3)
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_owner_separator() -> String {
    " / ".to_string()
}

fn default_empty_cell() -> String {
    ".".to_string()
}

fn default_cell_width() -> usize {
    8
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
            owner_separator: default_owner_separator(),
            empty_cell: default_empty_cell(),
            cell_width: default_cell_width(),
        }
    }
}

impl ReportConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse report config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report config: {}", path.display()))?;
        let config = Self::from_json(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path first, then the environment, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let Ok(path) = env::var(REPORT_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(Path::new(path))
            .with_context(|| format!("Invalid report config from {REPORT_CONFIG_PATH_ENV}='{path}'"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.owner_separator.is_empty() {
            bail!("owner_separator must not be empty");
        }
        if self.cell_width < MIN_CELL_WIDTH {
            bail!("cell_width must be at least 3, got {}", self.cell_width);
        }
        Ok(())
    }
}
