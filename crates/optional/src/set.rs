use alloc::collections::BTreeSet;
use core::fmt;
use core::option;

/// A read-only set of at most one element, borrowed from an optional.
///
/// There is no way to insert into or remove from the view; callers that need
/// a set they can mutate take an owned copy with [`SetView::to_set`].
pub struct SetView<'a, T> {
    element: Option<&'a T>,
}

impl<'a, T> SetView<'a, T> {
    pub(crate) const fn singleton(element: &'a T) -> Self {
        Self {
            element: Some(element),
        }
    }

    pub(crate) const fn empty() -> Self {
        Self { element: None }
    }

    pub const fn len(&self) -> usize {
        if self.element.is_some() { 1 } else { 0 }
    }

    pub const fn is_empty(&self) -> bool {
        self.element.is_none()
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.element.is_some_and(|element| element == value)
    }

    pub fn iter(&self) -> option::IntoIter<&'a T> {
        self.element.into_iter()
    }

    /// Owned copy of the view's contents.
    pub fn to_set(&self) -> BTreeSet<T>
    where
        T: Ord + Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for SetView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SetView<'_, T> {}

impl<T: PartialEq> PartialEq for SetView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<T: Eq> Eq for SetView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for SetView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for SetView<'a, T> {
    type Item = &'a T;
    type IntoIter = option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.element.into_iter()
    }
}

impl<'a, T> IntoIterator for &SetView<'a, T> {
    type Item = &'a T;
    type IntoIter = option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
