use thiserror::Error;

/// A violated precondition. Signals a programming error on the caller's
/// side, never a transient condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckError {
    #[error("null reference: {message}")]
    NullReference { message: &'static str },
}

impl CheckError {
    pub fn message(&self) -> &'static str {
        match self {
            CheckError::NullReference { message } => message,
        }
    }
}
