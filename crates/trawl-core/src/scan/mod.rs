// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Search, Counting & Removal
//!
//! Predicate-based operations over element sources: first-match search,
//! counting, short-circuiting membership tests, and in-place bulk removal.
//!
//! ## Highlights
//!
//! - The membership test comes in three named forms: a predicate
//!   ([`any_matches`]), a literal value compared by equality
//!   ([`any_equals`]), and a slice of candidates ([`any_of`]). All of them
//!   stop scanning at the first match.
//! - [`count`] answers directly from a sized source's length, touching no
//!   element; [`count_where`] scans.
//! - In-place removal is a capability ([`RemoveWhere`]) a container opts
//!   into. Mutable ordered containers remove and report how many elements
//!   went; frozen containers refuse with
//!   [`Error::Unsupported`](crate::error::Error::Unsupported).
//! - The free functions accept plain sources; a source that is itself a
//!   [`CloseableIterator`](crate::iter::CloseableIterator) should use its
//!   own terminal operations, which release it on every exit path.
//!
//! ## Usage
//!
//! ```rust
//! use trawl_core::scan::{any_of, find_first, remove_where};
//!
//! assert_eq!(find_first([5, 6, 7], |v| *v > 5), Some(6));
//! assert!(any_of([1, 2, 3], &[2, 9]));
//!
//! let mut values = vec![1, 2, 3, 4, 5];
//! assert_eq!(remove_where(&mut values, |v| v % 2 == 0), Ok(2));
//! assert_eq!(values, vec![1, 3, 5]);
//! ```

use crate::convert::FxIndexSet;
use crate::error::Error;
use crate::iter::{closeable, CloseableIterator};
use std::hash::Hash;

/// Returns the first element of `source`, or `None` if it is empty.
pub fn first_of<I>(source: I) -> Option<I::Item>
where
    I: IntoIterator,
{
    closeable(source.into_iter()).first()
}

/// Returns the first element of `source` satisfying `predicate`, or `None`
/// if no element matches.
///
/// # Examples
///
/// ```rust
/// use trawl_core::scan::find_first;
///
/// assert_eq!(find_first([5, 6, 7], |v| *v > 5), Some(6));
/// assert_eq!(find_first(Vec::<i32>::new(), |_| true), None);
/// ```
pub fn find_first<I, P>(source: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    closeable(source.into_iter()).find_where(predicate)
}

/// Returns the number of elements in a sized source without traversing it.
///
/// # Examples
///
/// ```rust
/// use trawl_core::scan::count;
///
/// let values = vec![1, 2, 3, 4, 5];
/// assert_eq!(count(&values), 5);
/// ```
pub fn count<I>(source: I) -> usize
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    source.into_iter().len()
}

/// Counts the elements of `source` satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use trawl_core::scan::count_where;
///
/// assert_eq!(count_where([1, 2, 3, 4], |v| v % 2 == 0), 2);
/// ```
pub fn count_where<I, P>(source: I, predicate: P) -> usize
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    closeable(source.into_iter()).count_where(predicate)
}

/// Returns `true` if any element of `source` satisfies `predicate`,
/// stopping the scan at the first match.
pub fn any_matches<I, P>(source: I, predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    closeable(source.into_iter()).any_where(predicate)
}

/// Returns `true` if any element of `source` equals `needle`, stopping the
/// scan at the first match.
///
/// # Examples
///
/// ```rust
/// use trawl_core::scan::any_equals;
///
/// assert!(any_equals([1, 2, 3], &2));
/// assert!(!any_equals([1, 2, 3], &9));
/// ```
pub fn any_equals<I>(source: I, needle: &I::Item) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    any_matches(source, |item| item == needle)
}

/// Returns `true` if any element of `source` is one of `members`, stopping
/// the scan at the first match.
pub fn any_of<I>(source: I, members: &[I::Item]) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    any_matches(source, |item| members.contains(item))
}

/// In-place bulk removal, the capability [`remove_where`] and
/// [`remove_all`] require of their target.
///
/// Containers that can remove elements while preserving the order of the
/// remainder implement this; a container that cannot (a frozen one)
/// reports [`Error::Unsupported`](crate::error::Error::Unsupported) and
/// leaves its content untouched.
pub trait RemoveWhere {
    /// Element type of the container.
    type Item;

    /// Removes every element satisfying `predicate`, returning how many
    /// were removed.
    fn remove_where<P>(&mut self, predicate: P) -> Result<usize, Error>
    where
        P: FnMut(&Self::Item) -> bool;
}

impl<T> RemoveWhere for Vec<T> {
    type Item = T;

    fn remove_where<P>(&mut self, mut predicate: P) -> Result<usize, Error>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let before = self.len();
        self.retain(|item| !predicate(item));
        Ok(before - self.len())
    }
}

impl<T> RemoveWhere for FxIndexSet<T>
where
    T: Eq + Hash,
{
    type Item = T;

    fn remove_where<P>(&mut self, mut predicate: P) -> Result<usize, Error>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let before = self.len();
        self.retain(|item| !predicate(item));
        Ok(before - self.len())
    }
}

/// Removes from `target`, in place, every element satisfying `predicate`;
/// returns the count removed.
///
/// # Examples
///
/// ```rust
/// use trawl_core::scan::remove_where;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// assert_eq!(remove_where(&mut values, |v| v % 2 == 0), Ok(2));
/// assert_eq!(values, vec![1, 3, 5]);
/// ```
pub fn remove_where<C, P>(target: &mut C, predicate: P) -> Result<usize, Error>
where
    C: RemoveWhere,
    P: FnMut(&C::Item) -> bool,
{
    target.remove_where(predicate)
}

/// Removes every element of `target` in place; returns the count removed.
pub fn remove_all<C>(target: &mut C) -> Result<usize, Error>
where
    C: RemoveWhere,
{
    target.remove_where(|_| true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::to_set;

    #[test]
    fn test_first_of() {
        assert_eq!(first_of([7, 8, 9]), Some(7));
        assert_eq!(first_of(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_find_first_match_and_no_match() {
        assert_eq!(find_first([5, 6, 7], |v| *v > 5), Some(6));
        assert_eq!(find_first([5, 6, 7], |v| *v > 9), None);
        assert_eq!(find_first(Vec::<i32>::new(), |_| true), None);
    }

    /// An exact-size source that panics if any element is requested.
    struct SizedOnly {
        len: usize,
    }

    impl Iterator for SizedOnly {
        type Item = i32;

        fn next(&mut self) -> Option<Self::Item> {
            panic!("count must not traverse a sized source");
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.len, Some(self.len))
        }
    }

    impl ExactSizeIterator for SizedOnly {
        fn len(&self) -> usize {
            self.len
        }
    }

    #[test]
    fn test_count_answers_from_length_without_traversal() {
        assert_eq!(count(SizedOnly { len: 5 }), 5);
        let values = vec![1, 2, 3, 4, 5];
        assert_eq!(count(&values), 5);
    }

    #[test]
    fn test_count_where() {
        assert_eq!(count_where([1, 2, 3, 4], |v| v % 2 == 0), 2);
        assert_eq!(count_where(Vec::<i32>::new(), |_| true), 0);
    }

    #[test]
    fn test_any_matches_short_circuits() {
        let mut probed = Vec::new();
        assert!(any_matches([1, 2, 3], |v| {
            probed.push(*v);
            *v == 2
        }));
        assert_eq!(probed, vec![1, 2]);
    }

    #[test]
    fn test_any_equals() {
        assert!(any_equals([1, 2, 3], &2));
        assert!(!any_equals([1, 2, 3], &9));
        assert!(!any_equals(Vec::<i32>::new(), &1));
    }

    #[test]
    fn test_any_of() {
        assert!(any_of([1, 2, 3], &[2, 9]));
        assert!(any_of([9, 0], &[2, 9]));
        assert!(!any_of([1, 3], &[2, 9]));
        assert!(!any_of([1, 2, 3], &[]));
    }

    #[test]
    fn test_remove_where_on_vec() {
        let mut values = vec![1, 2, 3, 4, 5];
        assert_eq!(remove_where(&mut values, |v| v % 2 == 0), Ok(2));
        assert_eq!(values, vec![1, 3, 5]);
    }

    #[test]
    fn test_remove_where_without_match() {
        let mut values = vec![1, 3, 5];
        assert_eq!(remove_where(&mut values, |v| v % 2 == 0), Ok(0));
        assert_eq!(values, vec![1, 3, 5]);
    }

    #[test]
    fn test_remove_all_on_vec() {
        let mut values = vec![1, 2, 3];
        assert_eq!(remove_all(&mut values), Ok(3));
        assert!(values.is_empty());
    }

    #[test]
    fn test_remove_where_on_set_preserves_order() {
        let mut set = to_set([5, 2, 7, 4, 1]);
        assert_eq!(remove_where(&mut set, |v| v % 2 == 0), Ok(2));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![5, 7, 1]);
    }
}
