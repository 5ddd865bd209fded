//! Shared types used across modules.
//!
//! Reports produced by the core and the option enums shared between the
//! config layer and the CLI live here, so neither has to reach into the other.

pub mod report;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use report::CalculationReport;

/// How the console shell treats text that does not parse as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InputPolicy {
    /// Print a diagnostic and prompt again.
    #[default]
    Retry,
    /// Abort with an error.
    FailFast,
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputPolicy::Retry => write!(f, "retry"),
            InputPolicy::FailFast => write!(f, "fail-fast"),
        }
    }
}

impl std::str::FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "retry" => Ok(InputPolicy::Retry),
            "fail-fast" | "failfast" => Ok(InputPolicy::FailFast),
            other => Err(format!(
                "unknown input policy: '{other}'. Supported: retry, fail-fast"
            )),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Terminal => write!(f, "terminal"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
