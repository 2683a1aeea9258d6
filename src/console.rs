//! Line-oriented console the session talks through.

use derive_more::{Display, Error, From};
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Error raised by the console.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(io::Error),

    /// The input stream ended.
    #[display("Console input closed")]
    InputClosed,
}

/// Text input and output for an interactive session.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Writes `prompt` without a newline and reads one line of input.
    ///
    /// Returns `None` once the input stream is exhausted. The returned
    /// line has its trailing line break removed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;
}

/// Console over any buffered reader and writer.
///
/// [`TerminalConsole::stdio`] drives a real terminal; tests feed it a
/// byte cursor and inspect the written bytes.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console attached to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not an I/O failure.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            trace!("End of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        trace!(line = %line, "Read line");
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_writes_prompt_and_strips_line_break() {
        let mut console = scripted("5\r\nn\n");
        assert_eq!(console.ask("> ").unwrap(), Some("5".to_string()));
        assert_eq!(console.ask("? ").unwrap(), Some("n".to_string()));
        assert_eq!(console.ask("! ").unwrap(), None);
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> ? ! ");
    }

    #[test]
    fn test_ask_replaces_invalid_utf8() {
        let mut console =
            TerminalConsole::new(Cursor::new(b"\xff\xfe\n5\n".to_vec()), Vec::<u8>::new());
        assert_eq!(console.ask("> ").unwrap(), Some("\u{fffd}\u{fffd}".to_string()));
        assert_eq!(console.ask("> ").unwrap(), Some("5".to_string()));
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = scripted("");
        console.say("hello").unwrap();
        console.say("").unwrap();
        assert_eq!(console.output().as_slice(), b"hello\n\n");
    }

    #[test]
    fn test_closed_input_displays() {
        assert_eq!(ConsoleError::InputClosed.to_string(), "Console input closed");
    }
}
