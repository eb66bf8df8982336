use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`). Default: info.
    pub level: Option<String>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(constants::DEFAULT_LOG_LEVEL)
    }
}
