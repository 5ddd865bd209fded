//! primer: introductory console exercises.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use primer::arithmetic::Calculator;
use primer::config::Config;
use primer::constants;
use primer::diagnostics::Diagnostics;
use primer::env::Env;
use primer::logging;
use primer::models::OutputFormat;
use primer::output;
use primer::shell::{Console, session};

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{CalcArgs, Cli, Command, LoopsArgs, StudentsArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let env = Env::process();

    logging::init(cli.verbose, &env);

    let cwd = std::env::current_dir().ok();
    let mut config = Config::load(cwd.as_deref(), cli.config.as_deref(), &env)
        .context("failed to load configuration")?;
    if cli.no_pause {
        config.output.pause = false;
    }

    match cli.command {
        Command::Calc(args) => run_calc(args, config),
        Command::Loops(args) => run_loops(args, config),
        Command::Students(args) => run_students(args, config),
        Command::Config => run_config(&config),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Print the effective layered configuration.
fn run_config(config: &Config) -> Result<()> {
    let rendered = config.to_toml().context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}

/// Run the calculator exercise.
fn run_calc(args: CalcArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    tracing::info!(
        division_policy = %config.calculator.division_policy,
        input_policy = %config.calculator.input_policy,
        "starting calculator"
    );

    let calc = Calculator::new(config.calculator.division_policy);
    let renderer = output::renderer_for(config.output.format, config.calculator.precision);
    let diagnostics = diagnostics_for(config.output.format);
    let mut console = console_for(config.output.format);

    session::calculator(
        &mut console,
        &calc,
        args.operands(),
        config.calculator.input_policy,
        renderer.as_ref(),
        &diagnostics,
    )
    .context("calculator input failed")?;

    finish(&mut console, &config)
}

/// Run the loop and function exercise.
fn run_loops(args: LoopsArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    tracing::info!(range_end = config.loops.range_end, "starting loop demo");

    let options = args.options(&config);
    let diagnostics = Diagnostics::stderr();
    let mut console = Console::stdio();

    session::loops(&mut console, &options, &diagnostics).context("loop demo input failed")?;

    finish(&mut console, &config)
}

/// Run the student record exercise.
fn run_students(args: StudentsArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    tracing::info!(format = %config.output.format, "starting student records");

    let renderer = output::renderer_for(config.output.format, config.calculator.precision);
    let mut console = console_for(config.output.format);

    session::students(
        &mut console,
        args.input(),
        config.calculator.input_policy,
        renderer.as_ref(),
    )
    .context("student record input failed")?;

    finish(&mut console, &config)
}

/// JSON output embeds diagnostics in the document; terminal output sends them to stderr.
fn diagnostics_for(format: OutputFormat) -> Diagnostics {
    match format {
        OutputFormat::Terminal => Diagnostics::stderr(),
        OutputFormat::Json => Diagnostics::capture(),
    }
}

/// JSON output keeps stdout for the document; prompts and headings go to stderr.
fn console_for(format: OutputFormat) -> Console<std::io::StdinLock<'static>, std::io::Stdout> {
    match format {
        OutputFormat::Terminal => Console::stdio(),
        OutputFormat::Json => Console::stdio().prompts_to(std::io::stderr()),
    }
}

/// End an interactive exercise: trailing newline, then the optional pause.
fn finish<R, W>(console: &mut Console<R, W>, config: &Config) -> Result<()>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    if config.output.format == OutputFormat::Json {
        console.say("")?;
    }
    if config.output.pause {
        console.pause()?;
    }
    Ok(())
}
