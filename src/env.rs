//! Where `PRIMER_*` settings come from.
//!
//! Config layering and log filtering read their variables through [`Env`],
//! so tests can feed them a fixed table instead of the process environment.

use std::collections::HashMap;

/// Source of `PRIMER_*` variables.
#[derive(Clone, Debug)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Variables of the running process.
    pub fn process() -> Self {
        Self { fixed: None }
    }

    /// A fixed table; names missing from it read as unset.
    #[cfg(test)]
    pub fn fixed(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.fixed {
            Some(table) => table.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Read `name` as an on/off switch such as `PRIMER_NO_PAUSE`.
    ///
    /// `None` when unset, `Some(Err(raw))` for an unrecognised spelling.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        self.var(name).ok().map(parse_switch)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::process()
    }
}

fn parse_switch(raw: String) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(raw),
    }
}
