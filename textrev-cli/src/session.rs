//! Interactive read-reverse-print session
//!
//! The session is a two-state machine. It starts `Running`: it reads one
//! line, prints that line reversed by every method, then loops over a small
//! menu until the user picks exit or input runs out, at which point it is
//! `Terminated`. Reader and writer are injected so the whole transcript can
//! be driven from a scripted buffer.

use crate::error::{CliError, CliResult};
use std::io::{BufRead, Write};
use textrev_core::{Method, Reverser};

const BANNER: &str = "=== String Reversal Techniques by Shramik ===";
const SEPARATOR: &str = "=====================================";
const MENU_HEADER: &str = "=== Choose an option ===";
const TEXT_PROMPT: &str = "Enter a string to reverse: ";
const CHOICE_PROMPT: &str = "Enter your choice: ";
const FAREWELL: &str = "Thank you for using Shramik's String Reversal Tool!";
const INVALID_CHOICE: &str = "Invalid choice! Please try again.";
const INVALID_INPUT: &str = "Invalid input! Please enter a number.";

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting input
    Running,
    /// Finished; nothing more is read
    Terminated,
}

/// A parsed menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// Reverse another string with the builder method
    ReverseAnother,
    /// Leave the session
    Exit,
    /// A number with no menu entry
    Unknown(i64),
    /// Not a number at all
    NotANumber(String),
}

impl MenuChoice {
    /// Parse one line of menu input
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<i64>() {
            Ok(1) => MenuChoice::ReverseAnother,
            Ok(2) => MenuChoice::Exit,
            Ok(n) => MenuChoice::Unknown(n),
            Err(_) => MenuChoice::NotANumber(line.to_string()),
        }
    }
}

/// Interactive session over an injected reader and writer
pub struct InteractiveSession<R, W> {
    reverser: Reverser,
    reader: R,
    writer: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> InteractiveSession<R, W> {
    /// Create a session in the `Running` state
    pub fn new(reverser: Reverser, reader: R, writer: W) -> Self {
        Self {
            reverser,
            reader,
            writer,
            state: SessionState::Running,
        }
    }

    /// Current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Consume the session and hand back the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run the session until it terminates
    pub fn run(&mut self) -> CliResult<()> {
        log::debug!("Session started");
        self.start()?;
        while self.state == SessionState::Running {
            self.step()?;
        }
        log::debug!("Session terminated");
        Ok(())
    }

    /// Banner, first input, and the all-methods report
    fn start(&mut self) -> CliResult<()> {
        writeln!(self.writer, "{BANNER}")?;
        writeln!(self.writer)?;

        let Some(input) = self.prompt_line(TEXT_PROMPT)? else {
            return Ok(());
        };

        writeln!(self.writer)?;
        writeln!(self.writer, "Original String: {input}")?;
        writeln!(self.writer, "{SEPARATOR}")?;

        for (index, reversal) in self.reverser.reverse_all(&input).iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {}: {}",
                index + 1,
                reversal.method.label(),
                reversal.output
            )?;
        }
        Ok(())
    }

    /// Show the menu once and act on the answer
    pub fn step(&mut self) -> CliResult<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "{MENU_HEADER}")?;
        writeln!(self.writer, "1. Reverse another string")?;
        writeln!(self.writer, "2. Exit")?;

        let Some(line) = self.prompt_line(CHOICE_PROMPT)? else {
            return Ok(self.state);
        };

        match MenuChoice::parse(&line) {
            MenuChoice::ReverseAnother => {
                let Some(input) = self.prompt_line(TEXT_PROMPT)? else {
                    return Ok(self.state);
                };
                let reversed = self.reverser.apply(Method::Builder, &input);
                writeln!(self.writer)?;
                writeln!(self.writer, "Original: {input}")?;
                writeln!(self.writer, "Reversed: {reversed}")?;
            }
            MenuChoice::Exit => {
                writeln!(self.writer, "{FAREWELL}")?;
                self.terminate();
            }
            MenuChoice::Unknown(n) => {
                log::debug!("No menu entry for choice {n}");
                writeln!(self.writer, "{INVALID_CHOICE}")?;
            }
            MenuChoice::NotANumber(raw) => {
                log::debug!("Menu choice {raw:?} is not a number");
                writeln!(self.writer, "{INVALID_INPUT}")?;
            }
        }

        Ok(self.state)
    }

    /// Print `prompt`, then read a line. End of input terminates the session.
    fn prompt_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut buffer = Vec::new();
        let bytes = self
            .reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| CliError::InputError(e.to_string()))?;

        if bytes == 0 {
            log::debug!("End of input");
            self.terminate();
            return Ok(None);
        }

        if buffer.ends_with(b"\n") {
            buffer.pop();
            if buffer.ends_with(b"\r") {
                buffer.pop();
            }
        }

        // Invalid UTF-8 becomes U+FFFD rather than ending the session
        let line = String::from_utf8_lossy(&buffer).into_owned();
        log::trace!("Read {} chars", line.chars().count());
        Ok(Some(line))
    }

    fn terminate(&mut self) {
        log::debug!("Session state: {:?} -> Terminated", self.state);
        self.state = SessionState::Terminated;
    }
}
