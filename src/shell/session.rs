//! The three interactive exercises, driven through a [`Console`].
//!
//! Each session prompts only for values the caller has not already supplied,
//! so the binary can mix command-line flags with interactive input.

use std::io::{BufRead, Write};

use crate::arithmetic::Calculator;
use crate::diagnostics::Diagnostics;
use crate::models::{CalculationReport, InputPolicy};
use crate::output::OutputRenderer;
use crate::records::{AffiliatedStudent, Student};
use crate::sequence::{checked_factorial, factorial, range};

use super::{Console, ShellError};

/// Operands for the calculator; `None` means "ask".
#[derive(Debug, Clone, Copy, Default)]
pub struct Operands {
    pub a: Option<f64>,
    pub b: Option<f64>,
}

/// Collect two operands, evaluate them, and print the report.
pub fn calculator<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    calc: &Calculator,
    operands: Operands,
    policy: InputPolicy,
    renderer: &dyn OutputRenderer,
    diagnostics: &Diagnostics,
) -> Result<CalculationReport, ShellError> {
    let a = match operands.a {
        Some(a) => a,
        None => console.read_number("Enter the first number: ", policy)?,
    };
    let b = match operands.b {
        Some(b) => b,
        None => console.read_number("Enter the second number: ", policy)?,
    };

    tracing::info!(a, b, policy = %calc.policy(), "evaluating calculator run");
    let report = calc.evaluate(a, b, diagnostics);
    console.write(&renderer.render_calculation(&report))?;
    Ok(report)
}

/// Settings for the loop demo.
#[derive(Debug, Clone)]
pub struct LoopsOptions {
    pub range_end: i64,
    pub exit_keyword: String,
    /// Factorial argument; prompted for when `None`.
    pub factorial: Option<i64>,
    pub input_policy: InputPolicy,
}

/// What the loop demo did.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopsSummary {
    pub printed: Vec<i64>,
    pub echoed: usize,
    pub factorial_of: i64,
    pub factorial: i64,
    /// `true` when `factorial` is a wrapped value rather than the true product.
    pub overflowed: bool,
}

/// Print `1..=range_end`, echo input until the exit keyword, then compute a factorial.
pub fn loops<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &LoopsOptions,
    diagnostics: &Diagnostics,
) -> Result<LoopsSummary, ShellError> {
    console.say(&format!("Printing numbers from 1 to {}:", options.range_end))?;
    let printed: Vec<i64> = range(1, options.range_end).collect();
    for n in &printed {
        console.say(&n.to_string())?;
    }

    console.say(&format!(
        "\nGetting user input until '{}' is typed:",
        options.exit_keyword
    ))?;
    let echoed = console.echo_until(&options.exit_keyword)?;

    let n = match options.factorial {
        Some(n) => n,
        None => console.read_integer(
            "\nEnter a number to calculate its factorial: ",
            options.input_policy,
        )?,
    };
    let result = factorial(n);
    let overflowed = checked_factorial(n).is_none();
    if overflowed {
        diagnostics.report(&format!(
            "Warning: factorial of {n} does not fit in 64 bits; the value shown has wrapped."
        ));
    }
    console.say(&format!("Factorial of {n} is {result}"))?;

    Ok(LoopsSummary {
        printed,
        echoed,
        factorial_of: n,
        factorial: result,
        overflowed,
    })
}

/// Pre-filled student fields; `None` means "ask".
#[derive(Debug, Clone, Default)]
pub struct StudentInput {
    pub name: Option<String>,
    pub id: Option<String>,
    pub marks: Option<f64>,
    pub hostel: Option<String>,
}

/// Build a student, show it, then attach a hostel and show the extended record.
///
/// Document renderers get both views in one call once the hostel is known.
pub fn students<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    input: StudentInput,
    policy: InputPolicy,
    renderer: &dyn OutputRenderer,
) -> Result<AffiliatedStudent, ShellError> {
    let document = renderer.is_document();
    console.note("Enter student details:")?;
    let name = match input.name {
        Some(name) => name,
        None => console.prompt_required("Enter Name: ")?,
    };
    let id = match input.id {
        Some(id) => id,
        None => console.prompt_required("Enter ID: ")?,
    };
    let marks = match input.marks {
        Some(marks) => marks,
        None => console.read_number("Enter Marks: ", policy)?,
    };

    let student = Student::new(name, id, marks);
    if !document {
        console.write(&renderer.render_student(&student))?;
    }

    console.note("\nEnter affiliated student details:")?;
    let hostel = match input.hostel {
        Some(hostel) => hostel,
        None => console.prompt_required("Enter Hostel Name: ")?,
    };

    let affiliated = AffiliatedStudent::from_student(student, hostel);
    if document {
        console.write(&renderer.render_records(&affiliated))?;
    } else {
        console.write(&renderer.render_affiliated(&affiliated))?;
    }
    Ok(affiliated)
}
