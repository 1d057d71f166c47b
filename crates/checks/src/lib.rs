#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::CheckError;

/// A reference that may be missing. `None` stands for the null reference
/// that the optional contract forbids in most argument positions.
pub type Nullable<T> = Option<T>;

/// Returns the wrapped value, or fails with [`CheckError::NullReference`]
/// carrying `message` when `reference` is null.
pub fn check_not_null<T>(reference: Nullable<T>, message: &'static str) -> Result<T, CheckError> {
    match reference {
        Some(value) => Ok(value),
        None => {
            log::debug!("null reference rejected: {}", message);
            Err(CheckError::NullReference { message })
        }
    }
}
