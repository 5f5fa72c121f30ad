//! TOML configuration loading and validation.

use std::path::Path;

use levguard::RiskParams;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub risk: RiskParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load config from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.risk.validate()?;
        debug!(
            "loaded {}: buffer {}%, cap {}x",
            path.display(),
            config.risk.buffer_pct,
            config.risk.leverage_cap
        );
        Ok(config)
    }

    /// Risk parameters with command-line overrides applied, validated.
    pub fn risk_params(
        &self,
        buffer_pct: Option<f64>,
        leverage_cap: Option<f64>,
    ) -> Result<RiskParams> {
        let params = RiskParams {
            buffer_pct: buffer_pct.unwrap_or(self.risk.buffer_pct),
            leverage_cap: leverage_cap.unwrap_or(self.risk.leverage_cap),
        };
        params.validate()?;
        Ok(params)
    }

    /// Output format, forced to JSON when `json` is set.
    pub fn format(&self, json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            self.output.format
        }
    }
}
