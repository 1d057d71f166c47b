use checks::CheckError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Contract violations raised by optional operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A caller passed null where the contract forbids it.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: &'static str },

    /// A caller-supplied function or supplier returned null.
    #[error("null result: {message}")]
    NullResult { message: &'static str },

    /// The value was read from an absent optional.
    #[error("illegal state: {message}")]
    IllegalState { message: &'static str },
}

impl Error {
    pub fn message(&self) -> &'static str {
        match self {
            Error::InvalidArgument { message }
            | Error::NullResult { message }
            | Error::IllegalState { message } => message,
        }
    }

    /// Re-attributes a failed null check to the value a function returned.
    pub(crate) fn null_result(err: CheckError) -> Self {
        Error::NullResult {
            message: err.message(),
        }
    }
}

impl From<CheckError> for Error {
    fn from(err: CheckError) -> Self {
        match err {
            CheckError::NullReference { message } => Error::InvalidArgument { message },
        }
    }
}
