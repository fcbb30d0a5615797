//! Error types for todo list operations.

/// Errors returned by [`TodoList`](crate::list::TodoList) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoListError {
    #[error("can only add Todo objects (got {found})")]
    TypeMismatch { found: &'static str },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias for todo list operations.
pub type Result<T> = std::result::Result<T, TodoListError>;
