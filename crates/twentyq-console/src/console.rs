use std::io::{self, BufRead, ErrorKind, StdinLock, Stdout, Write};

use log::warn;
use twentyq_core::UserInterface;

const REPROMPT: &str = "Please answer yes or no.";
const RETYPE: &str = "That line could not be read, please type it again.";

/// One attempt at reading a line of input.
enum Input {
    Line(String),
    /// The line was consumed but is not valid UTF-8.
    Unreadable,
    Closed,
}

/// Interpret a typed response: anything starting with `y` is yes, with `n` is no.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim_start().chars().next()?.to_ascii_lowercase() {
        'y' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
/// Line-based collaborator over any reader/writer pair.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
}

impl ConsoleUi<StdinLock<'static>, Stdout> {
    /// Collaborator bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        ConsoleUi::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ConsoleUi { input, output }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_line(&mut self) -> Input {
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) => Input::Closed,
            Ok(_) => {
                let trimmed = buf.trim_end_matches(['\n', '\r']).len();
                buf.truncate(trimmed);
                Input::Line(buf)
            }
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!("skipping input line that is not valid UTF-8");
                Input::Unreadable
            }
            Err(err) => {
                warn!("failed to read input: {err}");
                Input::Closed
            }
        }
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleUi<R, W> {
    fn print(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}").and_then(|_| self.output.flush()) {
            warn!("failed to write output: {err}");
        }
    }

    fn read_bool(&mut self) -> bool {
        loop {
            match self.next_line() {
                Input::Line(line) => match parse_yes_no(&line) {
                    Some(answer) => return answer,
                    None => {
                        warn!("unrecognised yes/no response '{line}'");
                        self.print(REPROMPT);
                    }
                },
                Input::Unreadable => self.print(REPROMPT),
                Input::Closed => {
                    warn!("input closed while waiting for yes/no, answering no");
                    return false;
                }
            }
        }
    }

    fn read_line(&mut self) -> String {
        loop {
            match self.next_line() {
                Input::Line(line) => return line,
                Input::Unreadable => self.print(RETYPE),
                Input::Closed => {
                    warn!("input closed while waiting for text, answering with an empty line");
                    return String::new();
                }
            }
        }
    }
}
