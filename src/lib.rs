//! primer: introductory console exercises (library crate).
//!
//! The arithmetic, sequence and record cores are free of console I/O; the
//! `shell` module and the binary drive them interactively. Re-exports public
//! modules for integration tests and external use.

pub mod arithmetic;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod records;
pub mod sequence;
pub mod shell;
