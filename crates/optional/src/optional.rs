use core::fmt;
use core::hash::{Hash, Hasher};

use checks::{Nullable, check_not_null};
use functions::Function;

use crate::hash::{ABSENT_SEED, hash_code};
use crate::present::{OR_NULL_DEFAULT, OR_NULL_SECOND_CHOICE};
use crate::{Error, Present, Result, SetView};

const GET_ON_ABSENT: &str = "Optional.get() cannot be called on an absent value";
const SUPPLIER_NULL_RESULT: &str = "use Optional.orNull() instead of a Supplier that returns null";

/// Either a present value or nothing.
#[derive(Clone, Copy, Debug)]
pub enum Optional<T> {
    Present(Present<T>),
    Absent,
}

impl<T> Optional<T> {
    /// Constructs a present optional.
    pub const fn of(reference: T) -> Self {
        Optional::Present(Present::new(reference))
    }

    /// Constructs an absent optional.
    pub const fn absent() -> Self {
        Optional::Absent
    }

    /// Present when `nullable` holds a value, absent otherwise.
    pub fn from_nullable(nullable: Nullable<T>) -> Self {
        match nullable {
            Some(reference) => Optional::of(reference),
            None => Optional::Absent,
        }
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Fails with [`Error::IllegalState`] when absent.
    pub fn get(&self) -> Result<&T> {
        match self {
            Optional::Present(present) => Ok(present.get()),
            Optional::Absent => {
                log::debug!("{}", GET_ON_ABSENT);
                Err(Error::IllegalState {
                    message: GET_ON_ABSENT,
                })
            }
        }
    }

    /// The held value, or `default_value` when absent. Null defaults are
    /// rejected in both cases.
    pub fn or(self, default_value: Nullable<T>) -> Result<T> {
        match self {
            Optional::Present(present) => present.or(default_value),
            Optional::Absent => Ok(check_not_null(default_value, OR_NULL_DEFAULT)?),
        }
    }

    /// `self` when present, `second_choice` otherwise.
    pub fn or_optional(self, second_choice: Nullable<Optional<T>>) -> Result<Optional<T>> {
        match self {
            Optional::Present(present) => present.or_optional(second_choice),
            Optional::Absent => Ok(check_not_null(second_choice, OR_NULL_SECOND_CHOICE)?),
        }
    }

    /// The held value, or whatever `supplier` yields when absent. The
    /// supplier is only called in the absent case and must not return null.
    pub fn or_else<S>(self, supplier: S) -> Result<T>
    where
        S: FnOnce() -> Nullable<T>,
    {
        match self {
            Optional::Present(present) => Ok(present.or_else(supplier)),
            Optional::Absent => {
                check_not_null(supplier(), SUPPLIER_NULL_RESULT).map_err(Error::null_result)
            }
        }
    }

    pub fn or_null(self) -> Nullable<T> {
        match self {
            Optional::Present(present) => present.or_null(),
            Optional::Absent => None,
        }
    }

    /// Immutable view holding the value, or nothing when absent.
    pub fn as_set(&self) -> SetView<'_, T> {
        match self {
            Optional::Present(present) => present.as_set(),
            Optional::Absent => SetView::empty(),
        }
    }

    /// Maps the held value through `function`. An absent optional stays
    /// absent and `function` is not called.
    pub fn transform<V, F>(self, function: F) -> Result<Optional<V>>
    where
        F: Function<T, V>,
    {
        match self {
            Optional::Present(present) => Ok(Optional::Present(present.transform(function)?)),
            Optional::Absent => Ok(Optional::Absent),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(present) => Optional::Present(present.as_ref()),
            Optional::Absent => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.or_null()
    }
}

impl<T: Hash> Optional<T> {
    pub fn hash_code(&self) -> u64 {
        hash_code(self)
    }
}

/// Yields the values of the present optionals in order, skipping absent ones.
pub fn present_instances<T, I>(optionals: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    optionals.into_iter().filter_map(Optional::into_option)
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Optional::Present(this), Optional::Present(that)) => this == that,
            (Optional::Absent, Optional::Absent) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Optional::Present(present) => present.hash(state),
            Optional::Absent => state.write_u32(ABSENT_SEED),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(present) => fmt::Display::fmt(present, f),
            Optional::Absent => f.write_str("Optional.absent()"),
        }
    }
}

impl<T> From<Present<T>> for Optional<T> {
    fn from(present: Present<T>) -> Self {
        Optional::Present(present)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        Optional::from_nullable(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Option<T> {
        optional.into_option()
    }
}
