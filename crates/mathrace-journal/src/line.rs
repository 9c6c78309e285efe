use crate::errors::JournalError;
use crate::version::SETUP_PREFIX;
use std::io::{self, BufRead};

/// One journal line, split into its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalLine<'a> {
    /// Empty or whitespace-only line.
    Blank,
    /// Line starting with `#`.
    Comment(&'a str),
    /// Line starting with `---`.
    Setup {
        /// Three-digit setup code.
        code: &'a str,
        /// Everything after the code.
        payload: &'a str,
    },
    /// Race event line.
    Event {
        /// Timestamp token.
        timestamp: &'a str,
        /// Three-digit event code, empty when missing.
        code: &'a str,
        /// Everything after the code.
        payload: &'a str,
    },
}

impl<'a> JournalLine<'a> {
    /// Splits a line into its fields.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            return JournalLine::Blank;
        }
        if line.starts_with('#') {
            return JournalLine::Comment(line);
        }
        if let Some(rest) = line.strip_prefix(SETUP_PREFIX) {
            let (code, payload) = split_token(rest.trim_start());
            return JournalLine::Setup { code, payload };
        }
        let (timestamp, rest) = split_token(line);
        let (code, payload) = split_token(rest);
        JournalLine::Event {
            timestamp,
            code,
            payload,
        }
    }

    /// Whether readers skip the line.
    pub fn is_skipped(&self) -> bool {
        matches!(self, JournalLine::Blank | JournalLine::Comment(_))
    }

    /// Setup code, if this is a setup line.
    pub fn setup_code(&self) -> Option<&'a str> {
        match self {
            JournalLine::Setup { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Splits off the first space-separated token.
pub(crate) fn split_token(text: &str) -> (&str, &str) {
    match text.split_once(' ') {
        Some((token, rest)) => (token, rest),
        None => (text, ""),
    }
}

/// A line together with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberedLine {
    pub number: usize,
    pub text: String,
}

impl NumberedLine {
    pub fn fields(&self) -> JournalLine<'_> {
        JournalLine::parse(&self.text)
    }
}

/// Line iterator that skips blank lines and comments and supports one-line lookahead.
pub(crate) struct LineCursor<R> {
    lines: io::Lines<R>,
    line_number: usize,
    peeked: Option<NumberedLine>,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            peeked: None,
        }
    }

    /// Returns the next meaningful line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<NumberedLine>, JournalError> {
        if let Some(line) = self.peeked.take() {
            return Ok(Some(line));
        }
        self.read_meaningful()
    }

    /// Returns the next meaningful line without consuming it.
    pub fn peek_line(&mut self) -> Result<Option<&NumberedLine>, JournalError> {
        if self.peeked.is_none() {
            self.peeked = self.read_meaningful()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Setup code of the next meaningful line, if it is a setup line.
    pub fn peek_setup_code(&mut self) -> Result<Option<String>, JournalError> {
        Ok(self
            .peek_line()?
            .and_then(|line| line.fields().setup_code().map(str::to_string)))
    }

    fn read_meaningful(&mut self) -> Result<Option<NumberedLine>, JournalError> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;
            if JournalLine::parse(&line).is_skipped() {
                continue;
            }
            return Ok(Some(NumberedLine {
                number: self.line_number,
                text: line.trim_end().to_string(),
            }));
        }
        Ok(None)
    }
}
