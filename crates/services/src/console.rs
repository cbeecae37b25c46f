use std::io::{self, BufRead, Write};

use flashcards_core::Transcript;

//
// ─── CONSOLE ───────────────────────────────────────────────────────────────────
//

/// Line-oriented console that mirrors everything into the session
/// transcript: every message printed and every line read.
///
/// Generic over the reader/writer pair so tests can drive scripted sessions
/// through in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            transcript: Transcript::new(),
        }
    }

    /// Prints a message and records it verbatim in the transcript.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the write fails.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;
        self.transcript.record(message);
        Ok(())
    }

    /// Prints a message without recording it.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the write fails.
    pub fn print(&mut self, message: &str) -> io::Result<()> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()
    }

    /// Reads one line, trims surrounding whitespace, and records the result.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns the underlying `io::Error` if the read fails.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = String::new();
        if self.input.read_line(&mut raw)? == 0 {
            return Ok(None);
        }
        let line = raw.trim().to_owned();
        self.transcript.record(line.clone());
        Ok(Some(line))
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Tears the console down into its writer and transcript.
    #[must_use]
    pub fn into_parts(self) -> (W, Transcript) {
        (self.output, self.transcript)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
