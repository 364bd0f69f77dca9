use std::io::{BufRead, Lines, Write};

use crate::tree::{error::TreeError, node::Node};

/// Separator between the record tag and the node text.
pub const SEPARATOR: char = ':';

/// Deepest question nesting `parse_node` accepts.
pub const MAX_DEPTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One-character tag opening every record of the text format.
pub enum Tag {
    Question,
    Answer,
}

impl Tag {
    /// Return the character written for this tag
    pub fn as_char(self) -> char {
        match self {
            Tag::Question => 'Q',
            Tag::Answer => 'A',
        }
    }

    /// Resolve a tag character, `None` if it is not a known tag
    pub fn from_char(c: char) -> Option<Tag> {
        match c {
            'Q' => Some(Tag::Question),
            'A' => Some(Tag::Answer),
            _ => None,
        }
    }
}

/// Write `node` and its subtrees in preorder, one `<tag>:<text>` line per node.
/// Text is written verbatim: a line break inside a node text cannot be read back.
pub fn write_node<W: Write + ?Sized>(node: &Node, sink: &mut W) -> Result<(), TreeError> {
    writeln!(sink, "{}{}{}", node.tag().as_char(), SEPARATOR, node.text())?;
    if let Node::Question { yes, no, .. } = node {
        write_node(yes, sink)?;
        write_node(no, sink)?;
    }
    Ok(())
}

/// Parse one complete preorder dump from `source`.
/// Reading stops as soon as the root record is complete; any later lines are left unread.
/// More than `MAX_DEPTH` nested questions is rejected with `TreeError::TooDeep`.
pub fn parse_node<R: BufRead>(source: R) -> Result<Node, TreeError> {
    RecordReader::new(source).read_node()
}

/// Line cursor that keeps the 1-based line number for error reporting.
struct RecordReader<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> RecordReader<R> {
    fn new(source: R) -> Self {
        RecordReader {
            lines: source.lines(),
            line: 0,
        }
    }

    fn read_node(&mut self) -> Result<Node, TreeError> {
        // open questions on the current path, with their yes subtree once it is complete
        let mut open: Vec<(String, Option<Node>)> = Vec::new();

        loop {
            let (tag, text) = self.read_record()?;
            let mut done = match tag {
                Tag::Question => {
                    if open.len() >= MAX_DEPTH {
                        return Err(TreeError::TooDeep {
                            line: self.line,
                            limit: MAX_DEPTH,
                        });
                    }
                    open.push((text, None));
                    continue;
                }
                Tag::Answer => Node::answer(text),
            };

            // preorder: a finished subtree fills the yes slot first, then the no slot
            loop {
                match open.pop() {
                    None => return Ok(done),
                    Some((question, None)) => {
                        open.push((question, Some(done)));
                        break;
                    }
                    Some((question, Some(yes))) => done = Node::question(question, yes, done),
                }
            }
        }
    }

    fn read_record(&mut self) -> Result<(Tag, String), TreeError> {
        let line_no = self.line + 1;
        let line = match self.lines.next() {
            Some(line) => line?,
            None => return Err(TreeError::UnexpectedEof { line: line_no }),
        };
        self.line = line_no;

        let mut chars = line.chars();
        let (tag, separator) = match (chars.next(), chars.next()) {
            (Some(tag), Some(separator)) => (tag, separator),
            _ => {
                return Err(TreeError::MalformedRecord {
                    line: line_no,
                    content: line.clone(),
                });
            }
        };
        let tag = Tag::from_char(tag).ok_or(TreeError::UnknownTag { line: line_no, tag })?;
        if separator != SEPARATOR {
            return Err(TreeError::MalformedRecord {
                line: line_no,
                content: line.clone(),
            });
        }

        Ok((tag, chars.as_str().to_string()))
    }
}
