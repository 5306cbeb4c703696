//! Operator-facing console and the yes/no confirmation gate.

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use auto_impl::auto_impl;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::error::{Error, Result};

/// Line based interaction with the operator.
#[auto_impl(&mut, Box)]
pub trait Console {
    /// Shows `prompt` and reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` at the end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Console over any reader/writer pair.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> StdConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R, W> Console for StdConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

/// Interactive console with line editing.
///
/// Ctrl-C at the prompt is reported as [`Error::Canceled`] instead of
/// terminating the process, so callers get a chance to clean up.
pub struct LineEditorConsole {
    editor: DefaultEditor,
}

impl LineEditorConsole {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(readline_error)?;
        Ok(Self { editor })
    }
}

impl fmt::Debug for LineEditorConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineEditorConsole").finish_non_exhaustive()
    }
}

fn readline_error(e: ReadlineError) -> Error {
    match e {
        ReadlineError::Io(e) => Error::Io(e),
        ReadlineError::Interrupted => Error::Canceled {
            message: "interrupted at the prompt".to_owned(),
        },
        e => Error::Other(anyhow::anyhow!("line editor: {e}")),
    }
}

impl Console for LineEditorConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(readline_error(e)),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// Asks `question` until the operator answers y, yes, n or no (any case).
///
/// Blocks until a valid answer arrives; there is no timeout.
pub fn ask<C>(console: &mut C, question: &str) -> Result<bool>
where
    C: Console + ?Sized,
{
    let prompt = format!("{question} (y/n): ");
    loop {
        let Some(answer) = console.read_line(&prompt)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the question was answered",
            )
            .into());
        };
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => {
                debug!(answer = other, "unrecognized answer");
                console.write_line("Input yes or no.")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> StdConsole<Cursor<Vec<u8>>, Vec<u8>> {
        StdConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &StdConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    #[test]
    fn test_accepts_yes_and_no_variants() {
        for (input, expected) in [
            ("y\n", true),
            ("YES\n", true),
            (" Yes \r\n", true),
            ("n\n", false),
            ("No\n", false),
            ("nO", false),
        ] {
            let mut c = console(input);
            assert_eq!(ask(&mut c, "Continue?").unwrap(), expected, "{input:?}");
            assert_eq!(output(&c), "Continue? (y/n): ");
        }
    }

    #[test]
    fn test_reprompts_until_recognized() {
        let mut c = console("maybe\nyep\n\nnope\nn\ny\n");
        assert!(!ask(&mut c, "Q").unwrap());
        let out = output(&c);
        assert_eq!(out.matches("Input yes or no.").count(), 4);
        assert_eq!(out.matches("Q (y/n): ").count(), 5);

        // the trailing answer is left unread
        assert!(ask(&mut c, "Q").unwrap());
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut c = console("what\n");
        let e = ask(&mut c, "Q").unwrap_err();
        assert!(matches!(e, Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }
}
