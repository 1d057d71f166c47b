#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt::Display;

pub use checks::Nullable;

/// A unary function from `F` to `T`.
///
/// The result is nullable: implementations may return `None`, and it is up
/// to the consumer to decide whether that is acceptable. `Optional::transform`
/// treats it as a contract violation.
pub trait Function<F, T> {
    fn apply(&self, input: F) -> Nullable<T>;
}

impl<F, T, C> Function<F, T> for C
where
    C: Fn(F) -> Nullable<T>,
{
    fn apply(&self, input: F) -> Nullable<T> {
        self(input)
    }
}

/// Lifts an infallible closure into a [`Function`] that never returns null.
pub fn total<F, T>(function: impl Fn(F) -> T) -> impl Function<F, T> {
    move |input: F| Some(function(input))
}

/// Returns its input unchanged.
pub fn identity<T>() -> impl Function<T, T> + Copy {
    |input: T| Some(input)
}

/// Ignores its input and yields a clone of `value`.
pub fn constant<F, T: Clone>(value: T) -> impl Function<F, T> {
    move |_input: F| Some(value.clone())
}

/// Applies `f`, then `g` to its result. A null from `f` short-circuits and
/// `g` is not called.
pub fn compose<A, B, C>(g: impl Function<B, C>, f: impl Function<A, B>) -> impl Function<A, C> {
    move |input: A| f.apply(input).and_then(|intermediate| g.apply(intermediate))
}

/// Renders its input with `Display`.
pub fn to_string_function<T: Display>() -> impl Function<T, String> + Copy {
    |input: T| Some(input.to_string())
}

/// Looks the input up in `map`; keys with no entry map to null.
pub fn for_map<K: Ord, V: Clone>(map: BTreeMap<K, V>) -> impl Function<K, V> {
    move |key: K| map.get(&key).cloned()
}
