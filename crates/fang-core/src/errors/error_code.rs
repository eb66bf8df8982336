//! Stable string codes for every error surfaced by the search.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const INPUT_QUALITY: &str = "INPUT_QUALITY";
pub const DEGENERATE_PAIR: &str = "DEGENERATE_PAIR";
pub const ADJACENCY_ERROR: &str = "ADJACENCY_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait FangErrorCode {
    fn error_code(&self) -> &'static str;
}
