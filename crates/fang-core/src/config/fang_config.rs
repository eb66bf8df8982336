//! Top-level FANG configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{KnowledgeConfig, LoggingConfig, SearchConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`FANG_*`)
/// 3. Project config (`fang.toml` in the root directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FangConfig {
    pub search: SearchConfig,
    pub knowledge: KnowledgeConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub depth: Option<i32>,
    pub penalty_discount: Option<f64>,
    pub alpha: Option<f64>,
    pub admission_threshold: Option<f64>,
    pub parallel: Option<bool>,
    pub log_level: Option<String>,
}

impl FangConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search.validate()?;
        for (i, pair) in self
            .knowledge
            .forbidden
            .iter()
            .chain(&self.knowledge.required)
            .enumerate()
        {
            if pair[0].is_empty() || pair[1].is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "knowledge".to_string(),
                    message: format!("edge entry {i} has an empty variable name"),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut FangConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: FangConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged project config");
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut FangConfig, other: &FangConfig) {
        if other.search.depth.is_some() {
            base.search.depth = other.search.depth;
        }
        if other.search.penalty_discount.is_some() {
            base.search.penalty_discount = other.search.penalty_discount;
        }
        if other.search.alpha.is_some() {
            base.search.alpha = other.search.alpha;
        }
        if other.search.admission_threshold.is_some() {
            base.search.admission_threshold = other.search.admission_threshold;
        }
        if other.search.parallel.is_some() {
            base.search.parallel = other.search.parallel;
        }

        if !other.knowledge.forbidden.is_empty() {
            base.knowledge.forbidden = other.knowledge.forbidden.clone();
        }
        if !other.knowledge.required.is_empty() {
            base.knowledge.required = other.knowledge.required.clone();
        }
        if !other.knowledge.tiers.is_empty() {
            base.knowledge.tiers = other.knowledge.tiers.clone();
        }

        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut FangConfig) {
        if let Ok(val) = std::env::var("FANG_DEPTH") {
            if let Ok(v) = val.parse::<i32>() {
                config.search.depth = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FANG_PENALTY_DISCOUNT") {
            if let Ok(v) = val.parse::<f64>() {
                config.search.penalty_discount = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FANG_ALPHA") {
            if let Ok(v) = val.parse::<f64>() {
                config.search.alpha = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FANG_ADMISSION_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.search.admission_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FANG_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.search.parallel = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FANG_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
    }

    fn apply_cli_overrides(config: &mut FangConfig, cli: &CliOverrides) {
        if let Some(v) = cli.depth {
            config.search.depth = Some(v);
        }
        if let Some(v) = cli.penalty_discount {
            config.search.penalty_discount = Some(v);
        }
        if let Some(v) = cli.alpha {
            config.search.alpha = Some(v);
        }
        if let Some(v) = cli.admission_threshold {
            config.search.admission_threshold = Some(v);
        }
        if let Some(v) = cli.parallel {
            config.search.parallel = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.logging.level = Some(v.clone());
        }
    }
}
