//! Terminal implementation of the session console.

use std::io::{self, BufRead, Write};

use roster_core::{
    console::{strip_line_terminator, Console},
    Result, RosterError,
};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::renderer::TerminalRenderer;

/// Where input lines come from.
pub enum LineSource<R> {
    /// Line editing and history on an interactive terminal.
    Editor(Box<DefaultEditor>),
    /// Plain line reads, for piped or redirected input.
    Reader(R),
}

/// Reads prompts from a line source and renders output as markdown.
pub struct TerminalConsole<R, W> {
    input: LineSource<R>,
    output: W,
    renderer: TerminalRenderer,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: LineSource<R>, output: W, renderer: TerminalRenderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }
}

/// End of file and Ctrl-C both close the session.
fn readline_error(error: ReadlineError) -> RosterError {
    match error {
        ReadlineError::Eof | ReadlineError::Interrupted => RosterError::InputClosed,
        ReadlineError::Io(source) => RosterError::Io { source },
        other => RosterError::Io {
            source: io::Error::other(other.to_string()),
        },
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match &mut self.input {
            LineSource::Editor(editor) => {
                self.output.flush()?;
                let line = editor.readline(prompt).map_err(readline_error)?;
                if !line.trim().is_empty() {
                    editor
                        .add_history_entry(line.as_str())
                        .map_err(readline_error)?;
                }
                Ok(line)
            }
            LineSource::Reader(reader) => {
                write!(self.output, "{prompt}")?;
                self.output.flush()?;

                let mut line = String::new();
                if reader.read_line(&mut line)? == 0 {
                    return Err(RosterError::InputClosed);
                }
                strip_line_terminator(&mut line);
                Ok(line)
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.renderer.render(&mut self.output, text)?;
        Ok(())
    }
}
