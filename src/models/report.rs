//! Result of one calculator run.

use serde::{Serialize, Serializer};

use crate::arithmetic::Parity;

/// Everything the calculator computed for one operand pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub a: f64,
    pub b: f64,
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    /// NaN when the divisor was zero. Serialized as `null` in that case.
    #[serde(serialize_with = "nan_as_null")]
    pub quotient: f64,
    /// Parity of `sum`.
    pub parity: Parity,
    /// Diagnostics reported while computing this report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

impl CalculationReport {
    /// The quotient rounded to `precision` decimals, or `None` if division was refused.
    pub fn quotient_display(&self, precision: usize) -> Option<String> {
        if self.quotient.is_nan() {
            None
        } else {
            Some(format!("{:.*}", precision, self.quotient))
        }
    }
}

fn nan_as_null<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(quotient: f64) -> CalculationReport {
        CalculationReport {
            a: 10.0,
            b: 4.0,
            sum: 14.0,
            difference: 6.0,
            product: 40.0,
            quotient,
            parity: Parity::Even,
            diagnostics: vec![],
        }
    }

    #[test]
    fn quotient_display_two_decimals() {
        assert_eq!(report(2.5).quotient_display(2), Some("2.50".to_string()));
        assert_eq!(report(1.0 / 3.0).quotient_display(2), Some("0.33".to_string()));
        assert_eq!(report(1.0 / 3.0).quotient_display(4), Some("0.3333".to_string()));
    }

    #[test]
    fn quotient_display_hidden_for_nan() {
        assert_eq!(report(f64::NAN).quotient_display(2), None);
    }

    #[test]
    fn nan_quotient_serializes_as_null() {
        let json = serde_json::to_value(report(f64::NAN)).unwrap();
        assert!(json["quotient"].is_null());
        assert_eq!(json["parity"], "even");
        assert!(json.get("diagnostics").is_none());
    }
}
