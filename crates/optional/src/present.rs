use core::fmt;
use core::hash::{Hash, Hasher};

use checks::{Nullable, check_not_null};
use functions::Function;

use crate::hash::{PRESENT_SEED, hash_code};
use crate::{Error, Optional, Result, SetView};

pub(crate) const OR_NULL_DEFAULT: &str = "use Optional.orNull() instead of Optional.or(null)";
pub(crate) const OR_NULL_SECOND_CHOICE: &str = "the second choice passed to Optional.or() must not be null";
const NULL_REFERENCE: &str = "Optional.of() requires a non-null reference";
const TRANSFORM_NULL_RESULT: &str = "the Function passed to Optional.transform() must not return null.";

/// An optional that holds a value.
///
/// A `Present` is never empty: the only constructors take the value itself,
/// and no operation mutates it afterwards. Fallbacks are accepted for
/// contract parity with the absent case but are never used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Present<T> {
    reference: T,
}

impl<T> Present<T> {
    pub const fn new(reference: T) -> Self {
        Self { reference }
    }

    /// Wraps a nullable reference, rejecting null.
    pub fn try_new(reference: Nullable<T>) -> Result<Self> {
        Ok(Self::new(check_not_null(reference, NULL_REFERENCE)?))
    }

    pub const fn is_present(&self) -> bool {
        true
    }

    /// The wrapped value itself, not a copy.
    pub const fn get(&self) -> &T {
        &self.reference
    }

    pub fn into_inner(self) -> T {
        self.reference
    }

    /// Returns the wrapped value. A null `default_value` is still rejected:
    /// callers wanting null as a fallback must use [`Present::or_null`].
    pub fn or(self, default_value: Nullable<T>) -> Result<T> {
        check_not_null(default_value, OR_NULL_DEFAULT)?;
        Ok(self.reference)
    }

    /// Returns `self` unchanged; `second_choice` must be non-null but is
    /// never inspected.
    pub fn or_optional(self, second_choice: Nullable<Optional<T>>) -> Result<Optional<T>> {
        check_not_null(second_choice, OR_NULL_SECOND_CHOICE)?;
        Ok(Optional::Present(self))
    }

    /// Returns the wrapped value without calling `supplier`.
    pub fn or_else<S>(self, _supplier: S) -> T
    where
        S: FnOnce() -> Nullable<T>,
    {
        self.reference
    }

    pub fn or_null(self) -> Nullable<T> {
        Some(self.reference)
    }

    pub fn as_set(&self) -> SetView<'_, T> {
        SetView::singleton(&self.reference)
    }

    /// Applies `function` to the wrapped value and wraps the result.
    ///
    /// A null result fails with [`Error::NullResult`]: a present optional
    /// never turns into an absent one through `transform`.
    pub fn transform<V, F>(self, function: F) -> Result<Present<V>>
    where
        F: Function<T, V>,
    {
        let result = check_not_null(function.apply(self.reference), TRANSFORM_NULL_RESULT)
            .map_err(Error::null_result)?;
        Ok(Present::new(result))
    }

    pub const fn as_ref(&self) -> Present<&T> {
        Present::new(&self.reference)
    }
}

impl<T: Hash> Present<T> {
    pub fn hash_code(&self) -> u64 {
        hash_code(self)
    }
}

impl<T: Hash> Hash for Present<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(PRESENT_SEED);
        self.reference.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Present<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Optional.of({})", self.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn try_new_rejects_null() {
        assert_eq!(Present::try_new(Some(3)), Ok(Present::new(3)));
        assert_eq!(
            Present::<u8>::try_new(None),
            Err(Error::InvalidArgument {
                message: NULL_REFERENCE
            })
        );
    }

    #[test]
    fn as_ref_borrows_the_same_value() {
        let present = Present::new([1u8, 2, 3]);
        let borrowed = present.as_ref();
        assert!(core::ptr::eq(*borrowed.get(), present.get()));
    }

    #[test]
    fn display_embeds_value() {
        assert_eq!(Present::new("abc").to_string(), "Optional.of(abc)");
    }
}
