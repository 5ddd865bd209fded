//! End-to-end tests for the three exercises.
//!
//! These drive the public library API the binary uses, with in-memory
//! consoles standing in for stdin/stdout.

use std::io::Cursor;

use primer::arithmetic::{self, Calculator, DivisionPolicy, Parity};
use primer::diagnostics::Diagnostics;
use primer::models::InputPolicy;
use primer::output::json::JsonRenderer;
use primer::output::terminal::TerminalRenderer;
use primer::records::{AffiliatedStudent, Grade, Student};
use primer::sequence;
use primer::shell::session::{self, LoopsOptions, Operands, StudentInput};
use primer::shell::{Console, ShellError};

type MemConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> MemConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(console: MemConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

// ---------------------------------------------------------------------------
// calculator
// ---------------------------------------------------------------------------

#[test]
fn ten_and_zero_scenario() {
    colored::control::set_override(false);
    for policy in [DivisionPolicy::Recovered, DivisionPolicy::Checked] {
        let mut c = console("10\n0\n");
        let diag = Diagnostics::capture();
        let report = session::calculator(
            &mut c,
            &Calculator::new(policy),
            Operands::default(),
            InputPolicy::Retry,
            &TerminalRenderer::default(),
            &diag,
        )
        .unwrap();

        assert_eq!(report.sum, 10.0);
        assert_eq!(report.difference, 10.0);
        assert_eq!(report.product, 0.0);
        assert!(report.quotient.is_nan());
        assert_eq!(report.parity, Parity::Even);
        assert_eq!(diag.lines().len(), 1, "one diagnostic under {policy}");

        let out = output_of(c);
        assert!(out.contains("10 is an even number."));
        assert!(!out.contains("Division:"));
    }
}

#[test]
fn hardened_calculator_retries_bad_input() {
    let mut c = console("ten\n10\n4\n");
    let report = session::calculator(
        &mut c,
        &Calculator::default(),
        Operands::default(),
        InputPolicy::Retry,
        &JsonRenderer,
        &Diagnostics::capture(),
    )
    .unwrap();
    assert_eq!(report.quotient, 2.5);
    assert!(output_of(c).contains("Invalid input. Please enter a valid number."));
}

#[test]
fn plain_calculator_fails_fast_on_bad_input() {
    let mut c = console("ten\n10\n4\n");
    let err = session::calculator(
        &mut c,
        &Calculator::new(DivisionPolicy::Checked),
        Operands::default(),
        InputPolicy::FailFast,
        &JsonRenderer,
        &Diagnostics::capture(),
    )
    .unwrap_err();
    assert!(matches!(err, ShellError::InvalidNumericFormat { ref input } if input == "ten"));
}

#[test]
fn division_matches_native_for_nonzero_divisors() {
    let diag = Diagnostics::capture();
    let calc = Calculator::default();
    for (a, b) in [(1.0, 3.0), (-7.5, 2.0), (1e-300, 1e10), (0.0, -5.0)] {
        assert_eq!(calc.divide(a, b, &diag), a / b);
        assert_eq!(arithmetic::try_divide(a, b), Ok(a / b));
    }
    assert!(diag.lines().is_empty());
}

// ---------------------------------------------------------------------------
// loops
// ---------------------------------------------------------------------------

#[test]
fn loop_demo_with_defaults() {
    let mut c = console("hello\nexit\n5\n");
    let options = LoopsOptions {
        range_end: 10,
        exit_keyword: "exit".into(),
        factorial: None,
        input_policy: InputPolicy::FailFast,
    };
    let summary = session::loops(&mut c, &options, &Diagnostics::capture()).unwrap();

    assert_eq!(summary.printed, sequence::range(1, 10).collect::<Vec<_>>());
    assert_eq!(summary.echoed, 1);
    assert_eq!(summary.factorial_of, 5);
    assert_eq!(summary.factorial, 120);

    let out = output_of(c);
    assert!(out.contains("Getting user input until 'exit' is typed:"));
    assert!(out.contains("Exiting..."));
    assert!(out.contains("Factorial of 5 is 120"));
}

#[test]
fn factorial_boundaries() {
    assert_eq!(sequence::factorial(0), 1);
    assert_eq!(sequence::factorial(5), 120);
    assert_eq!(sequence::factorial(-4), 1);
}

// ---------------------------------------------------------------------------
// students
// ---------------------------------------------------------------------------

#[test]
fn grade_thresholds() {
    let cases = [
        (90.0, Grade::A),
        (89.999, Grade::B),
        (80.0, Grade::B),
        (70.0, Grade::C),
        (60.0, Grade::D),
        (59.0, Grade::F),
    ];
    for (marks, grade) in cases {
        assert_eq!(Student::new("x", "y", marks).grade(), grade, "marks {marks}");
    }
}

#[test]
fn display_depends_on_reference_type() {
    let affiliated = AffiliatedStudent::new("Ana", "S1", 95.0, "North");
    assert_eq!(affiliated.grade(), Grade::A);

    let through_base: &Student = &affiliated;
    assert!(!through_base.display_details().contains("Hostel Name"));
    assert!(affiliated.display_details().contains("Hostel Name: North"));
}

#[test]
fn student_session_with_prefilled_fields_only_prompts_for_rest() {
    colored::control::set_override(false);
    let mut c = console("North\n");
    let input = StudentInput {
        name: Some("Ana".into()),
        id: Some("S1".into()),
        marks: Some(95.0),
        hostel: None,
    };
    let student =
        session::students(&mut c, input, InputPolicy::Retry, &TerminalRenderer::default())
            .unwrap();
    assert_eq!(student.hostel, "North");

    let out = output_of(c);
    assert!(!out.contains("Enter Name:"));
    assert!(out.contains("Enter Hostel Name: "));
    assert!(out.contains("Hostel Name: North\n"));
}

#[test]
fn student_session_json_stdout_parses_as_one_value() {
    let mut c = console("North\n\n").prompts_to(std::io::sink());
    let input = StudentInput {
        name: Some("Ana".into()),
        id: Some("S1".into()),
        marks: Some(72.5),
        hostel: None,
    };
    session::students(&mut c, input, InputPolicy::FailFast, &JsonRenderer).unwrap();
    c.say("").unwrap();
    c.pause().unwrap();

    let out = output_of(c);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["student"]["grade"], "C");
    assert!(parsed["student"].get("hostel").is_none());
    assert_eq!(parsed["affiliated"]["hostel"], "North");
}
