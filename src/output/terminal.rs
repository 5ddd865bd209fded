//! Terminal renderer: the plain console layout of the exercises.

use colored::Colorize;

use crate::models::CalculationReport;
use crate::output::OutputRenderer;
use crate::records::{AffiliatedStudent, Student};

/// Terminal output renderer.
pub struct TerminalRenderer {
    /// Decimals shown for the quotient.
    pub precision: usize,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            precision: crate::constants::DEFAULT_PRECISION,
        }
    }
}

impl OutputRenderer for TerminalRenderer {
    fn render_calculation(&self, report: &CalculationReport) -> String {
        let (a, b) = (report.a, report.b);
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "---- Results ----".bold()));
        output.push_str(&format!("Addition: {a} + {b} = {}\n", report.sum));
        output.push_str(&format!("Subtraction: {a} - {b} = {}\n", report.difference));
        output.push_str(&format!("Multiplication: {a} * {b} = {}\n", report.product));

        // A refused division prints nothing here; the diagnostic already went out.
        if let Some(quotient) = report.quotient_display(self.precision) {
            output.push_str(&format!("Division: {a} / {b} = {quotient}\n"));
        }

        output.push_str(&format!("{} is an {} number.\n", report.sum, report.parity));
        output
    }

    fn render_student(&self, student: &Student) -> String {
        format!(
            "\n{}\n{}",
            "---- Student Details ----".bold(),
            student.display_details()
        )
    }

    fn render_affiliated(&self, student: &AffiliatedStudent) -> String {
        format!(
            "\n{}\n{}",
            "---- Affiliated Student Details ----".bold(),
            student.display_details()
        )
    }
}
