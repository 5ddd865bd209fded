//! Diagnostic sink for recovered errors.
//!
//! Core operations that recover from an error locally (division by zero)
//! still have to tell someone about it. They report through a
//! [`Diagnostics`] value instead of printing, so the binary can send lines
//! to stderr while tests and the JSON renderer capture them.

use std::cell::RefCell;
use std::io::Write;

/// Where diagnostic lines go.
#[derive(Debug)]
pub struct Diagnostics {
    captured: Option<RefCell<Vec<String>>>,
}

impl Diagnostics {
    /// Write each diagnostic line to standard error.
    pub fn stderr() -> Self {
        Self { captured: None }
    }

    /// Record diagnostic lines in memory.
    pub fn capture() -> Self {
        Self {
            captured: Some(RefCell::new(Vec::new())),
        }
    }

    /// Report a recovered condition.
    pub fn report(&self, message: &str) {
        tracing::warn!(target: "primer::diagnostics", "{message}");
        match &self.captured {
            Some(lines) => lines.borrow_mut().push(message.to_string()),
            None => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                let _ = writeln!(handle, "{message}");
            }
        }
    }

    /// Lines recorded so far. Always empty for the stderr sink.
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .map(|lines| lines.borrow().clone())
            .unwrap_or_default()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_in_order() {
        let diag = Diagnostics::capture();
        diag.report("first");
        diag.report("second");
        assert_eq!(diag.lines(), vec!["first", "second"]);
    }

    #[test]
    fn stderr_sink_records_nothing() {
        let diag = Diagnostics::stderr();
        diag.report("to stderr");
        assert!(diag.lines().is_empty());
    }
}
