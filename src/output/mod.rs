//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::models::{CalculationReport, OutputFormat};
use crate::records::{AffiliatedStudent, Student};

/// Trait for rendering exercise results to an output format.
///
/// Students and affiliated students have separate methods on purpose: the
/// affiliated display is a distinct operation, not an override of the base one.
pub trait OutputRenderer {
    /// Render a calculator run.
    fn render_calculation(&self, report: &CalculationReport) -> String;

    /// Render a plain student record.
    fn render_student(&self, student: &Student) -> String;

    /// Render a student together with its affiliation.
    fn render_affiliated(&self, student: &AffiliatedStudent) -> String;

    /// Whether output is a single machine-readable document. Such renderers
    /// get each session's results in one call and no interleaved headings.
    fn is_document(&self) -> bool {
        false
    }

    /// Render the base view and the affiliated view of one record together.
    fn render_records(&self, student: &AffiliatedStudent) -> String {
        format!(
            "{}{}",
            self.render_student(student.as_student()),
            self.render_affiliated(student)
        )
    }
}

/// Pick the renderer for a format.
pub fn renderer_for(format: OutputFormat, precision: usize) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Terminal => Box::new(terminal::TerminalRenderer { precision }),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}
