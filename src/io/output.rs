//! Output management for CLI commands.
//!
//! Signature lines go to stdout, errors and suggestions to stderr.

use crate::error::LoadError;
use crate::io::exit_code::ExitCode;
use console::style;
use std::io::{self, Write};

/// Manages line output and error display.
pub struct OutputManager {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    color: bool,
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    /// Create an output manager writing to the process streams.
    pub fn new() -> Self {
        Self {
            stdout: Box::new(io::stdout().lock()),
            stderr: Box::new(io::stderr()),
            color: console::colors_enabled_stderr(),
        }
    }

    /// Create an output manager with custom writers (no colors).
    pub fn new_with_writers(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self {
            stdout,
            stderr,
            color: false,
        }
    }

    /// Write one line per signature.
    ///
    /// A closed stdout (`gosig | head`) ends the listing quietly with success.
    pub fn lines<I, S>(&mut self, lines: I) -> io::Result<ExitCode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.write_lines(lines) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("stdout closed, stopping output");
                Ok(ExitCode::Success)
            }
            other => other.map(|()| ExitCode::Success),
        }
    }

    fn write_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            writeln!(self.stdout, "{}", line.as_ref())?;
        }
        self.stdout.flush()
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &LoadError) -> io::Result<ExitCode> {
        let exit_code = ExitCode::from_error(error);
        tracing::debug!(
            "{} ({}), exiting with {}",
            error.status_code(),
            exit_code.description(),
            i32::from(exit_code)
        );

        if self.color {
            writeln!(self.stderr, "{} {error}", style("Error:").red().bold())?;
        } else {
            writeln!(self.stderr, "Error: {error}")?;
        }
        for suggestion in error.recovery_suggestions() {
            writeln!(self.stderr, "  Suggestion: {suggestion}")?;
        }
        Ok(exit_code)
    }

    /// Output a block of text as-is (used for `--print-config`).
    pub fn text(&mut self, text: &str) -> io::Result<ExitCode> {
        match write!(self.stdout, "{text}").and_then(|()| self.stdout.flush()) {
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
            _ => Ok(ExitCode::Success),
        }
    }
}
