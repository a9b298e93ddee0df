//! Line-oriented console abstraction.
//!
//! The turn coordinator only reads and writes whole lines, so the terminal
//! can be replaced by a scripted sequence in tests.

use crate::error::GameError;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Source of player input and sink for game messages.
pub trait Console {
    /// Reads one line of input, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>, GameError>;

    /// Writes one message followed by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), GameError>;
}

/// Console backed by a reader and a writer, normally stdin and stdout.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Creates a console over any buffered reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        trace!(read, "Read console line");
        Ok((read > 0).then_some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Console that replays prepared input lines and records everything written.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Every line written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// How many times exactly `line` was written.
    pub fn count(&self, line: &str) -> usize {
        self.output.iter().filter(|l| *l == line).count()
    }

    /// Input lines not yet consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>, GameError> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<(), GameError> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_console_reads_until_eof() {
        let mut console = StdConsole::new("A1\nB2\n".as_bytes(), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("A1\n"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("B2\n"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_std_console_writes_lines() {
        let mut console = StdConsole::new(io::empty(), Vec::new());
        console.write_line("Game tie!").unwrap();
        assert_eq!(console.into_writer(), b"Game tie!\n");
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::new(["C3"]);
        console.write_line("hello").unwrap();
        console.write_line("hello").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("C3"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.count("hello"), 2);
        assert_eq!(console.remaining_input(), 0);
    }
}
