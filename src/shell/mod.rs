//! Console shell: prompting, reading and parsing user input.
//!
//! [`Console`] is generic over its input and output streams so the binary
//! can drive it with stdin/stdout and tests with in-memory buffers.

pub mod session;

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::constants::INVALID_NUMBER_MESSAGE;
use crate::models::InputPolicy;

/// Errors raised while talking to the user.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("invalid numeric format: '{input}'")]
    InvalidNumericFormat { input: String },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A prompt/response channel over a reader and a writer.
///
/// Results go to `output`. Prompts and headings go to the prompt stream when
/// one is set, so a machine-readable document on `output` stays clean.
pub struct Console<R, W> {
    input: R,
    output: W,
    prompts: Option<Box<dyn Write>>,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            prompts: None,
        }
    }

    /// Send prompts and headings to `sink` instead of the output stream.
    pub fn prompts_to(mut self, sink: impl Write + 'static) -> Self {
        self.prompts = Some(Box::new(sink));
        self
    }

    /// Give back the output stream (tests inspect what was written).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a full line.
    pub fn say(&mut self, text: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write text without a trailing newline.
    pub fn write(&mut self, text: &str) -> Result<(), ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a heading or hint line to the prompt stream.
    pub fn note(&mut self, text: &str) -> Result<(), ShellError> {
        match self.prompts.as_mut() {
            Some(prompts) => writeln!(prompts, "{text}")?,
            None => writeln!(self.output, "{text}")?,
        }
        Ok(())
    }

    fn write_prompt(&mut self, prompt: &str) -> Result<(), ShellError> {
        match self.prompts.as_mut() {
            Some(prompts) => {
                write!(prompts, "{prompt}")?;
                prompts.flush()?;
            }
            None => self.write(prompt)?,
        }
        Ok(())
    }

    /// Write `prompt` and read one line without its line ending.
    /// `None` means the input is exhausted.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        self.write_prompt(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like [`Console::prompt_line`], but end of input is an error.
    pub fn prompt_required(&mut self, prompt: &str) -> Result<String, ShellError> {
        self.prompt_line(prompt)?.ok_or(ShellError::UnexpectedEof)
    }

    /// Prompt for a floating-point number.
    pub fn read_number(&mut self, prompt: &str, policy: InputPolicy) -> Result<f64, ShellError> {
        self.read_parsed(prompt, policy)
    }

    /// Prompt for an integer.
    pub fn read_integer(&mut self, prompt: &str, policy: InputPolicy) -> Result<i64, ShellError> {
        self.read_parsed(prompt, policy)
    }

    fn read_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        policy: InputPolicy,
    ) -> Result<T, ShellError> {
        loop {
            let raw = self.prompt_required(prompt)?;
            match raw.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => match policy {
                    InputPolicy::Retry => {
                        tracing::debug!(input = %raw, "rejected numeric input, retrying");
                        self.note(INVALID_NUMBER_MESSAGE)?;
                    }
                    InputPolicy::FailFast => {
                        return Err(ShellError::InvalidNumericFormat { input: raw });
                    }
                },
            }
        }
    }

    /// Echo lines back until `exit_keyword` (case-insensitive) or end of input.
    ///
    /// Returns how many values were echoed.
    pub fn echo_until(&mut self, exit_keyword: &str) -> Result<usize, ShellError> {
        let keyword = exit_keyword.to_lowercase();
        let prompt = format!("Enter a value (type '{exit_keyword}' to quit): ");
        let mut echoed = 0;

        while let Some(line) = self.prompt_line(&prompt)? {
            let input = line.to_lowercase();
            if input == keyword {
                self.say("Exiting...")?;
                return Ok(echoed);
            }
            self.say(&format!("You entered: {input}"))?;
            echoed += 1;
        }

        // Input ran out before the keyword; finish the prompt line.
        self.say("")?;
        Ok(echoed)
    }

    /// Wait for the user before exiting. End of input counts as a keypress.
    pub fn pause(&mut self) -> Result<(), ShellError> {
        self.prompt_line("\nPress Enter to exit...")?;
        Ok(())
    }
}
