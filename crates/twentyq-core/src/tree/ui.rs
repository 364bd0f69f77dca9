use std::collections::VecDeque;

use log::warn;

/// Input/output collaborator the tree talks to while a game is played.
/// Turning raw input into a yes/no answer is up to the implementation.
pub trait UserInterface {
    /// Display one line of text.
    fn print(&mut self, text: &str);

    /// Block until the user gives a yes/no response.
    fn read_bool(&mut self) -> bool;

    /// Block until the user gives a line of free text.
    fn read_line(&mut self) -> String;
}

#[derive(Debug, Clone, Default)]
/// In-memory collaborator that replays queued responses and records every printed line.
/// Yes/no responses and text lines are consumed from two separate queues.
pub struct ScriptedUi {
    answers: VecDeque<bool>,
    lines: VecDeque<String>,
    printed: Vec<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a script from yes/no responses and text lines, each consumed in order.
    pub fn from_script<A, L, S>(answers: A, lines: L) -> Self
    where
        A: IntoIterator<Item = bool>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedUi {
            answers: answers.into_iter().collect(),
            lines: lines.into_iter().map(Into::into).collect(),
            printed: Vec::new(),
        }
    }

    /// Queue one yes/no response
    pub fn push_answer(&mut self, yes: bool) -> &mut Self {
        self.answers.push_back(yes);
        self
    }

    /// Queue one line of text
    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push_back(line.into());
        self
    }

    /// Every line printed so far, oldest first
    pub fn printed(&self) -> &[String] {
        &self.printed
    }

    /// True once every queued response has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty() && self.lines.is_empty()
    }
}

impl UserInterface for ScriptedUi {
    fn print(&mut self, text: &str) {
        self.printed.push(text.to_string());
    }

    fn read_bool(&mut self) -> bool {
        self.answers.pop_front().unwrap_or_else(|| {
            warn!("script ran out of yes/no responses, answering no");
            false
        })
    }

    fn read_line(&mut self) -> String {
        self.lines.pop_front().unwrap_or_else(|| {
            warn!("script ran out of text lines, answering with an empty line");
            String::new()
        })
    }
}
