//! Clap argument types and their merge onto the loaded config.

use clap::Parser;
use std::path::PathBuf;

use primer::arithmetic::DivisionPolicy;
use primer::config::Config;
use primer::models::{InputPolicy, OutputFormat};
use primer::shell::session::{LoopsOptions, Operands, StudentInput};

/// Introductory console exercises.
#[derive(Parser, Debug)]
#[command(
    name = "primer",
    version = primer::constants::VERSION,
    about = super::ABOUT_STYLED,
)]
pub struct Cli {
    /// Do not wait for Enter before exiting.
    #[arg(long, global = true, default_value_t = false)]
    pub no_pause: bool,

    /// Settings file to use instead of `.primer.toml` in the working directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit debug-level structured logs on stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Add, subtract, multiply and divide two numbers.
    Calc(CalcArgs),

    /// Print a number range, echo input until an exit keyword, compute a factorial.
    Loops(LoopsArgs),

    /// Enter a student record and show it with and without its hostel.
    Students(StudentsArgs),

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// First operand (prompted for when omitted).
    #[arg(allow_negative_numbers = true)]
    pub a: Option<f64>,

    /// Second operand (prompted for when omitted).
    #[arg(allow_negative_numbers = true)]
    pub b: Option<f64>,

    /// How a zero divisor is handled.
    #[arg(long)]
    pub division_policy: Option<DivisionPolicy>,

    /// What happens when typed input is not a number.
    #[arg(long)]
    pub input_policy: Option<InputPolicy>,

    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Decimals shown for the quotient.
    #[arg(long)]
    pub precision: Option<usize>,
}

impl CalcArgs {
    /// Overlay these flags onto the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(policy) = self.division_policy {
            config.calculator.division_policy = policy;
        }
        if let Some(policy) = self.input_policy {
            config.calculator.input_policy = policy;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.calculator.precision = precision;
        }
    }

    pub fn operands(&self) -> Operands {
        Operands {
            a: self.a,
            b: self.b,
        }
    }
}

/// Arguments for the `loops` subcommand.
#[derive(Parser, Debug)]
pub struct LoopsArgs {
    /// Last number printed by the counting loop.
    #[arg(long)]
    pub end: Option<i64>,

    /// Word that ends the echo loop.
    #[arg(long)]
    pub exit_keyword: Option<String>,

    /// Factorial argument (prompted for when omitted).
    #[arg(long, allow_negative_numbers = true)]
    pub factorial: Option<i64>,

    /// What happens when the factorial argument is not an integer.
    #[arg(long)]
    pub input_policy: Option<InputPolicy>,
}

impl LoopsArgs {
    /// Overlay these flags onto the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(end) = self.end {
            config.loops.range_end = end;
        }
        if let Some(ref keyword) = self.exit_keyword {
            config.loops.exit_keyword = keyword.clone();
        }
        if let Some(policy) = self.input_policy {
            config.calculator.input_policy = policy;
        }
    }

    pub fn options(&self, config: &Config) -> LoopsOptions {
        LoopsOptions {
            range_end: config.loops.range_end,
            exit_keyword: config.loops.exit_keyword.clone(),
            factorial: self.factorial,
            input_policy: config.calculator.input_policy,
        }
    }
}

/// Arguments for the `students` subcommand.
#[derive(Parser, Debug)]
pub struct StudentsArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub marks: Option<f64>,

    /// Hostel (affiliation) name.
    #[arg(long)]
    pub hostel: Option<String>,

    /// What happens when typed marks are not a number.
    #[arg(long)]
    pub input_policy: Option<InputPolicy>,

    /// Output format.
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

impl StudentsArgs {
    /// Overlay these flags onto the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(policy) = self.input_policy {
            config.calculator.input_policy = policy;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
    }

    pub fn input(&self) -> StudentInput {
        StudentInput {
            name: self.name.clone(),
            id: self.id.clone(),
            marks: self.marks,
            hostel: self.hostel.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("primer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn calc_positional_operands() {
        let cli = parse(&["calc", "10", "-4.5"]);
        match cli.command {
            Command::Calc(args) => {
                assert_eq!(args.a, Some(10.0));
                assert_eq!(args.b, Some(-4.5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn calc_flags_override_config() {
        let cli = parse(&[
            "calc",
            "--division-policy",
            "checked",
            "--input-policy",
            "fail-fast",
            "--format",
            "json",
            "--precision",
            "3",
        ]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.calculator.division_policy, DivisionPolicy::Checked);
        assert_eq!(config.calculator.input_policy, InputPolicy::FailFast);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.calculator.precision, 3);
    }

    #[test]
    fn calc_without_flags_keeps_config() {
        let cli = parse(&["calc"]);
        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let mut config = Config::default();
        config.calculator.division_policy = DivisionPolicy::Checked;
        args.apply(&mut config);
        assert_eq!(config.calculator.division_policy, DivisionPolicy::Checked);
        assert!(args.operands().a.is_none());
    }

    #[test]
    fn loops_options_from_flags() {
        let cli = parse(&["loops", "--end", "5", "--exit-keyword", "quit", "--factorial", "-2"]);
        let Command::Loops(args) = cli.command else {
            panic!("expected loops");
        };
        let mut config = Config::default();
        args.apply(&mut config);
        let options = args.options(&config);
        assert_eq!(options.range_end, 5);
        assert_eq!(options.exit_keyword, "quit");
        assert_eq!(options.factorial, Some(-2));
    }

    #[test]
    fn students_input_from_flags() {
        let cli = parse(&["students", "--name", "Ana", "--marks", "95", "--no-pause"]);
        assert!(cli.no_pause);
        let Command::Students(args) = cli.command else {
            panic!("expected students");
        };
        let input = args.input();
        assert_eq!(input.name.as_deref(), Some("Ana"));
        assert_eq!(input.marks, Some(95.0));
        assert!(input.id.is_none());
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let result = Cli::try_parse_from(["primer", "calc", "--division-policy", "lenient"]);
        assert!(result.is_err());
    }
}
