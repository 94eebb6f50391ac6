//! Line-based prompt/response port between the session and a terminal.
//!
//! The session never touches stdin or stdout directly. It asks a [`Console`]
//! for one line at a time and hands it markdown text to show. The binary
//! implements the trait over the real terminal; [`ScriptedConsole`] replays a
//! fixed list of lines and records everything shown.

use std::collections::VecDeque;

use crate::error::{RosterError, Result};

/// Synchronous prompt/response channel.
pub trait Console {
    /// Shows `prompt` and blocks until one line of input is available.
    ///
    /// The trailing line terminator is removed; nothing else is altered.
    /// Returns [`RosterError::InputClosed`] once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Shows a block of markdown output.
    fn write(&mut self, text: &str) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

/// Removes one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Console that answers prompts from a script and keeps a transcript.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: String,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
            prompts: Vec::new(),
        }
    }

    /// Everything shown so far, prompts included.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Scripted lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push_str(prompt);
        self.prompts.push(prompt.to_string());

        let line = self.input.pop_front().ok_or(RosterError::InputClosed)?;
        self.transcript.push_str(&line);
        self.transcript.push('\n');
        Ok(line)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }
}
