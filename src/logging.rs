//! Tracing subscriber setup.
//!
//! Console text the exercises print is ordinary stdout/stderr output; the
//! subscriber only carries structured events (divide-by-zero warnings,
//! rejected input, config layering). It is silent unless `PRIMER_LOG` or
//! `--verbose` asks for it.

use tracing_subscriber::EnvFilter;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Filter directive used when neither `--verbose` nor `PRIMER_LOG` is set.
const DEFAULT_DIRECTIVE: &str = "off";

/// Pick the filter directive: `--verbose` wins, then `PRIMER_LOG`, then off.
pub fn filter_directive(verbose: bool, env: &Env) -> String {
    if verbose {
        return "primer=debug".to_string();
    }
    env.var(ENV_LOG)
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string())
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool, env: &Env) {
    let directive = filter_directive(verbose, env);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid {ENV_LOG} value: {directive} ({e})");
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(env.var("NO_COLOR").is_err())
        .try_init();
}
