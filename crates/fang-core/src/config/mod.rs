//! Configuration system for FANG.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod fang_config;
pub mod knowledge_config;
pub mod logging_config;
pub mod search_config;

pub use fang_config::{CliOverrides, FangConfig};
pub use knowledge_config::KnowledgeConfig;
pub use logging_config::LoggingConfig;
pub use search_config::SearchConfig;
