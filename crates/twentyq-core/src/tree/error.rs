use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for saving, loading and parsing question trees.
pub enum TreeError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("unexpected end of input at line {line}: a question is missing its answers")]
    UnexpectedEof { line: usize },

    #[error("malformed record at line {line}: '{content}' (expected 'Q:<text>' or 'A:<text>')")]
    MalformedRecord { line: usize, content: String },

    #[error("unknown record tag '{tag}' at line {line}")]
    UnknownTag { line: usize, tag: char },

    #[error("questions nested deeper than {limit} at line {line}")]
    TooDeep { line: usize, limit: usize },

    #[error("failed to read or write tree text: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeError {
    /// Whether the error comes from the shape of the input rather than the I/O layer.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            TreeError::UnexpectedEof { .. }
                | TreeError::MalformedRecord { .. }
                | TreeError::UnknownTag { .. }
                | TreeError::TooDeep { .. }
        )
    }
}
