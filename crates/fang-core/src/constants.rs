/// FANG library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Adjacency search depth meaning "no bound on conditioning-set size".
pub const UNBOUNDED_DEPTH: i32 = -1;

/// Default penalty discount for the SEM-BIC score.
pub const DEFAULT_PENALTY_DISCOUNT: f64 = 1.0;

/// Default significance level for two-cycle detection. Usually needs to be low.
pub const DEFAULT_ALPHA: f64 = 1e-6;

/// Default `|c1 - c2|` above which a non-adjacent pair is still considered for orientation.
pub const DEFAULT_ADMISSION_THRESHOLD: f64 = 0.3;

/// Default log level when neither config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Project config file looked up in the root directory.
pub const PROJECT_CONFIG_FILE: &str = "fang.toml";
