//! Error handling for FANG.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod data_error;
pub mod error_code;
pub mod pair_error;
pub mod search_error;

pub use config_error::ConfigError;
pub use data_error::DataError;
pub use error_code::FangErrorCode;
pub use pair_error::PairError;
pub use search_error::{FangResult, SearchError};
