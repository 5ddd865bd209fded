//! JSON output renderer.
//!
//! Calculations render as `{"calculation": {...}}`, students as
//! `{"student": {...}}` with the derived grade added alongside the fields.
//! A student session renders as one `{"student": ..., "affiliated": ...}`
//! document.

use crate::models::CalculationReport;
use crate::output::OutputRenderer;
use crate::records::{AffiliatedStudent, Student};

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render_calculation(&self, report: &CalculationReport) -> String {
        let output = serde_json::json!({ "calculation": report });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_student(&self, student: &Student) -> String {
        let output = serde_json::json!({ "student": student_value(student) });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn render_affiliated(&self, student: &AffiliatedStudent) -> String {
        let output = serde_json::json!({ "student": affiliated_value(student) });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn is_document(&self) -> bool {
        true
    }

    fn render_records(&self, student: &AffiliatedStudent) -> String {
        let output = serde_json::json!({
            "student": student_value(student.as_student()),
            "affiliated": affiliated_value(student),
        });
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

fn student_value(student: &Student) -> serde_json::Value {
    serde_json::json!({
        "name": student.name,
        "id": student.id,
        "marks": student.marks,
        "grade": student.grade(),
    })
}

fn affiliated_value(student: &AffiliatedStudent) -> serde_json::Value {
    let mut value = student_value(student.as_student());
    value["hostel"] = serde_json::Value::from(student.hostel.as_str());
    value
}
