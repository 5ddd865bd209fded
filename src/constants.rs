//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the fixed console messages so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "primer";

/// Crate version as set in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.primer.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".primer.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "primer";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_DIVISION_POLICY: &str = "PRIMER_DIVISION_POLICY";
pub const ENV_INPUT_POLICY: &str = "PRIMER_INPUT_POLICY";
pub const ENV_PRECISION: &str = "PRIMER_PRECISION";
pub const ENV_NO_PAUSE: &str = "PRIMER_NO_PAUSE";
pub const ENV_LOG: &str = "PRIMER_LOG";

// ── Console messages ────────────────────────────────────────────────

/// Printed by the retry policy after an unparseable number.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a valid number.";

/// Default keyword that ends the echo loop.
pub const DEFAULT_EXIT_KEYWORD: &str = "exit";

/// Default upper bound of the number-printing loop.
pub const DEFAULT_RANGE_END: i64 = 10;

/// Default number of decimals shown for a quotient.
pub const DEFAULT_PRECISION: usize = 2;
