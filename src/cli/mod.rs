//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// About line with ANSI styling for clap help output.
pub const ABOUT_STYLED: &str =
    "\x1b[1mprimer\x1b[0m \x1b[2m· Calculator, loop and student-record console exercises.\x1b[0m";
