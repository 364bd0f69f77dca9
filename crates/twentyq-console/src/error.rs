use thiserror::Error;
use twentyq_core::TreeError;

#[derive(Debug, Error)]
/// Error type for file-level console operations.
pub enum ConsoleError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
