//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `--config <FILE>`, or `.primer.toml` in the working directory
//! 4. `~/.config/primer/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::arithmetic::DivisionPolicy;
use crate::constants::{
    DEFAULT_EXIT_KEYWORD, DEFAULT_PRECISION, DEFAULT_RANGE_END, ENV_DIVISION_POLICY,
    ENV_INPUT_POLICY, ENV_NO_PAUSE, ENV_PRECISION,
};
use crate::env::Env;
use crate::models::{InputPolicy, OutputFormat};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub calculator: CalculatorConfig,
    pub loops: LoopsConfig,
    pub output: OutputConfig,
}

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub division_policy: DivisionPolicy,
    pub input_policy: InputPolicy,
    /// Decimals shown for the quotient.
    pub precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_policy: DivisionPolicy::Recovered,
            input_policy: InputPolicy::Retry,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Loop demo settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopsConfig {
    pub range_end: i64,
    pub exit_keyword: String,
}

impl Default for LoopsConfig {
    fn default() -> Self {
        Self {
            range_end: DEFAULT_RANGE_END,
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Wait for Enter before exiting.
    pub pause: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            pause: true,
        }
    }
}

/// One file's worth of settings. Only keys present in the file are `Some`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    calculator: CalculatorLayer,
    loops: LoopsLayer,
    output: OutputLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CalculatorLayer {
    division_policy: Option<DivisionPolicy>,
    input_policy: Option<InputPolicy>,
    precision: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoopsLayer {
    range_end: Option<i64>,
    exit_keyword: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputLayer {
    format: Option<OutputFormat>,
    pause: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` replaces the working-directory file when given, and must exist.
    pub fn load(cwd: Option<&Path>, explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let local = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => cwd
                .map(|dir| dir.join(crate::constants::CONFIG_FILENAME))
                .filter(|p| p.exists()),
        };
        Self::load_layers(global.as_deref(), local.as_deref(), env)
    }

    /// Apply the global file, then the local file, then the environment.
    fn load_layers(global: Option<&Path>, local: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(path) = global {
            tracing::debug!(path = %path.display(), "loading global config");
            config.merge(Self::load_file(path)?);
        }

        // Layer 3: explicit or local config
        if let Some(path) = local {
            tracing::debug!(path = %path.display(), "loading local config");
            config.merge(Self::load_file(path)?);
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load one config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Overlay every key the layer sets, default-valued or not.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(policy) = layer.calculator.division_policy {
            self.calculator.division_policy = policy;
        }
        if let Some(policy) = layer.calculator.input_policy {
            self.calculator.input_policy = policy;
        }
        if let Some(precision) = layer.calculator.precision {
            self.calculator.precision = precision;
        }
        if let Some(end) = layer.loops.range_end {
            self.loops.range_end = end;
        }
        if let Some(keyword) = layer.loops.exit_keyword {
            self.loops.exit_keyword = keyword;
        }
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(pause) = layer.output.pause {
            self.output.pause = pause;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(ENV_DIVISION_POLICY) {
            match val.parse::<DivisionPolicy>() {
                Ok(policy) => self.calculator.division_policy = policy,
                Err(_) => eprintln!("Warning: ignoring invalid {ENV_DIVISION_POLICY} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_INPUT_POLICY) {
            match val.parse::<InputPolicy>() {
                Ok(policy) => self.calculator.input_policy = policy,
                Err(_) => eprintln!("Warning: ignoring invalid {ENV_INPUT_POLICY} value: {val}"),
            }
        }
        if let Ok(val) = env.var(ENV_PRECISION) {
            match val.parse::<usize>() {
                Ok(precision) => self.calculator.precision = precision,
                Err(_) => eprintln!("Warning: ignoring invalid {ENV_PRECISION} value: {val}"),
            }
        }
        match env.flag(ENV_NO_PAUSE) {
            Some(Ok(no_pause)) => self.output.pause = !no_pause,
            Some(Err(val)) => eprintln!("Warning: ignoring invalid {ENV_NO_PAUSE} value: {val}"),
            None => {}
        }
    }
}
