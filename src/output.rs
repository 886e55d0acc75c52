//! Output formatting
//!
//! `IndentFormatter` renders walker events as indented plain text on
//! stdout: directory labels with a trailing slash, file names one
//! indentation unit deeper than their directory's label.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeOutput;

/// One indentation unit; depth N renders as N copies.
const INDENT: &str = "  ";

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

/// Streaming formatter - writes directly to stdout without buffering.
pub struct IndentFormatter {
    stdout: StandardStream,
}

impl IndentFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }
}

impl TreeOutput for IndentFormatter {
    fn dir(&mut self, depth: usize, name: &str) -> io::Result<()> {
        write!(self.stdout, "{}", INDENT.repeat(depth))?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}/", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }

    fn file(&mut self, depth: usize, name: &str) -> io::Result<()> {
        write!(self.stdout, "{}", INDENT.repeat(depth + 1))?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}
