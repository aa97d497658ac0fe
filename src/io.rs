// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Host I/O abstraction for `SYS_PRINT`/`SYS_INPUT`/diagnostics.
//!
//! The engine never talks to `std::io::stdin`/`stdout` directly; it goes
//! through this trait, the same way the teacher's execution core talks to
//! memory through `MemorySpace` rather than touching host RAM directly.
//! That keeps the engine reentrant and lets tests drive it against an
//! in-memory buffer instead of real file descriptors.
//!
//! `SYS_INPUT` parses directly off the byte stream rather than by lines:
//! the format allows several integers separated by arbitrary whitespace
//! on one line, so the engine needs to peek one byte at a time and decide
//! whether to consume it, not slurp a whole line per call.

#[cfg(test)]
mod io_test;

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// Host-provided console I/O: the only side-effecting surface the engine
/// touches besides the bytecode file mapping itself.
pub trait Console {
    /// Write a line of output (newline appended).
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Look at the next unread input byte without consuming it.
    ///
    /// Returns `None` at end of input.
    fn peek_byte(&mut self) -> io::Result<Option<u8>>;

    /// Discard the next unread input byte.
    fn consume_byte(&mut self) -> io::Result<()>;
}

/// The real, process-wide console: standard output and standard input.
pub struct StdConsole {
    reader: io::BufReader<io::Stdin>,
    peeked: Option<u8>,
}

impl Default for StdConsole {
    fn default() -> Self {
        Self { reader: io::BufReader::new(io::stdin()), peeked: None }
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{line}")
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        if self.peeked.is_none() {
            let mut buf = [0u8; 1];
            let n = self.reader.read(&mut buf)?;
            self.peeked = if n == 0 { None } else { Some(buf[0]) };
        }
        Ok(self.peeked)
    }

    fn consume_byte(&mut self) -> io::Result<()> {
        if self.peeked.is_none() {
            self.peek_byte()?;
        }
        self.peeked = None;
        Ok(())
    }
}

/// An in-memory console for tests: writes accumulate in a buffer, reads
/// are served from a preloaded byte queue.
#[derive(Default)]
pub struct MockConsole {
    /// Everything written via [`Console::write_line`], concatenated.
    pub output: String,
    input: VecDeque<u8>,
}

impl MockConsole {
    /// Create a mock console whose reads are served from `input`'s bytes.
    #[must_use]
    pub fn with_input(input: impl Into<String>) -> Self {
        Self { output: String::new(), input: input.into().into_bytes().into() }
    }
}

impl Console for MockConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push_str(line);
        self.output.push('\n');
        Ok(())
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.front().copied())
    }

    fn consume_byte(&mut self) -> io::Result<()> {
        self.input.pop_front();
        Ok(())
    }
}
