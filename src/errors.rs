/// Navigation Error Types
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Pop on a stack with no entries
    #[error("Stack is empty")]
    EmptyStack,

    /// Push of an identifier already present in the stack
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Standardized rejection for operations not permitted in the current state
    #[error("Nothing to pop")]
    Rejected,

    /// Lookup of an identifier that is not resident
    #[error("Not found: {0}")]
    NotFound(String),

    /// A promise was dropped before it was settled
    #[error("Promise dropped before it was settled")]
    PromiseDropped,

    /// Stack order and entry map disagree
    #[error("Stack corruption: {0}")]
    Corruption(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Navigation script errors
    #[error("Script error: {0}")]
    Script(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NavError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NavError::Config(msg.into())
    }

    pub fn script<S: Into<String>>(msg: S) -> Self {
        NavError::Script(msg.into())
    }

    pub fn not_found<S: Into<String>>(id: S) -> Self {
        NavError::NotFound(id.into())
    }

    pub fn corruption<S: Into<String>>(msg: S) -> Self {
        NavError::Corruption(msg.into())
    }

    /// True for the standardized state rejection
    pub fn is_rejection(&self) -> bool {
        matches!(self, NavError::Rejected)
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
