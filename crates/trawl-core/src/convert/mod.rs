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

//! # Container Construction
//!
//! Conversions from arbitrary element sources into ordered and unique
//! containers, in mutable and frozen flavors, plus insertion-ordered
//! pair-map constructors.
//!
//! ## Submodules
//!
//! - `frozen`: the immutable [`FrozenSeq`] and [`FrozenSet`] containers the
//!   `to_frozen_*` conversions produce.
//!
//! ## Highlights
//!
//! - Every conversion preserves the encounter order of its source; unique
//!   containers keep the first occurrence of equal elements.
//! - Unique containers are `indexmap` sets/maps keyed with `FxHasher`,
//!   exposed through the [`FxIndexSet`] and [`FxIndexMap`] aliases.
//! - Absent sources become empty containers by wrapping them with
//!   [`maybe`](crate::iter::maybe) at the boundary; no conversion returns
//!   an error for an empty or absent source.
//! - The free functions accept plain sources. A source that is itself a
//!   [`CloseableIterator`] should be drained with its own terminal
//!   operations ([`collect_seq`](CloseableIterator::collect_seq),
//!   [`collect_set`](CloseableIterator::collect_set)), which release it on
//!   every exit path.
//!
//! ## Usage
//!
//! ```rust
//! use trawl_core::convert::{to_seq, to_set};
//! use trawl_core::iter::maybe;
//!
//! assert_eq!(to_seq([3, 1, 2]), vec![3, 1, 2]);
//! assert_eq!(to_seq(maybe(None::<Vec<i32>>)), vec![]);
//!
//! let unique = to_set([3, 1, 3, 2, 1]);
//! assert_eq!(unique.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
//! ```

pub mod frozen;

use crate::error::Error;
use crate::iter::{closeable, CloseableIterator};
use frozen::{FrozenSeq, FrozenSet};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;
use std::hash::{BuildHasherDefault, Hash};

/// An insertion-ordered set keyed with the fast, non-cryptographic
/// `FxHasher`.
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// An insertion-ordered map keyed with the fast, non-cryptographic
/// `FxHasher`.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Collects `source` into an ordered sequence, preserving encounter order.
///
/// # Examples
///
/// ```rust
/// use trawl_core::convert::to_seq;
/// use trawl_core::iter::maybe;
///
/// assert_eq!(to_seq([1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(to_seq(maybe(None::<Vec<i32>>)), Vec::<i32>::new());
/// ```
pub fn to_seq<I>(source: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    closeable(source.into_iter()).collect_seq()
}

/// Collects `source` into a frozen ordered sequence.
///
/// The result offers read access only; the in-place mutation capability
/// answers [`Error::Unsupported`](crate::error::Error::Unsupported).
pub fn to_frozen_seq<I>(source: I) -> FrozenSeq<I::Item>
where
    I: IntoIterator,
{
    FrozenSeq::from_vec(to_seq(source))
}

/// Collects `source` into a unique ordered set.
///
/// Duplicates are suppressed; the first occurrence decides the position.
///
/// # Examples
///
/// ```rust
/// use trawl_core::convert::to_set;
///
/// let set = to_set([3, 1, 3, 2, 1]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
/// ```
pub fn to_set<I>(source: I) -> FxIndexSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    closeable(source.into_iter()).collect_set()
}

/// Collects `source` into a frozen unique ordered set.
pub fn to_frozen_set<I>(source: I) -> FrozenSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    FrozenSet::from_set(to_set(source))
}

/// Collects key/value pairs into an insertion-ordered map.
///
/// The first insertion of a key decides its position; a later binding of
/// the same key overwrites the value in place.
///
/// # Examples
///
/// ```rust
/// use trawl_core::convert::to_map;
///
/// let map = to_map([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(map["a"], 3);
/// ```
pub fn to_map<K, V, I>(pairs: I) -> FxIndexMap<K, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: Eq + Hash,
{
    pairs.into_iter().collect()
}

/// Collects a flat `[k1, v1, k2, v2, ...]` list into an insertion-ordered
/// map.
///
/// An odd-length list fails with [`Error::OddPairList`] and produces no
/// partial result.
///
/// # Examples
///
/// ```rust
/// use trawl_core::convert::to_map_flat;
/// use trawl_core::error::Error;
///
/// let map = to_map_flat(["k1", "v1", "k2", "v2"]).unwrap();
/// assert_eq!(map["k1"], "v1");
///
/// assert_eq!(
///     to_map_flat(["k1", "v1", "dangling"]),
///     Err(Error::OddPairList { len: 3 })
/// );
/// ```
pub fn to_map_flat<T, I>(items: I) -> Result<FxIndexMap<T, T>, Error>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut map = FxIndexMap::default();
    let mut iter = items.into_iter();
    let mut len = 0usize;
    while let Some(key) = iter.next() {
        len += 1;
        match iter.next() {
            Some(value) => {
                len += 1;
                map.insert(key, value);
            }
            None => return Err(Error::OddPairList { len }),
        }
    }
    Ok(map)
}

/// Appends every element of `source` to `target`.
///
/// Wrap optional sources with [`maybe`](crate::iter::maybe); an absent
/// source appends nothing.
pub fn add_all<T, C, I>(target: &mut C, source: I)
where
    C: Extend<T>,
    I: IntoIterator<Item = T>,
{
    target.extend(source);
}

/// Returns `true` if `source` yields no elements.
pub fn is_empty_source<I>(source: I) -> bool
where
    I: IntoIterator,
{
    source.into_iter().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::maybe;
    use rand::Rng;

    #[test]
    fn test_to_seq_preserves_order_and_length() {
        let seq = to_seq(vec![5, 4, 4, 1]);
        assert_eq!(seq, vec![5, 4, 4, 1]);
    }

    #[test]
    fn test_to_seq_from_iterator_source() {
        let seq = to_seq((1..=4).map(|v| v * 10));
        assert_eq!(seq, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_to_seq_of_absent_source_is_empty() {
        let seq: Vec<i32> = to_seq(maybe(None::<Vec<i32>>));
        assert!(seq.is_empty());
    }

    #[test]
    fn test_to_set_first_occurrence_wins() {
        let set = to_set([3, 1, 3, 2, 1]);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_to_set_of_absent_source_is_empty() {
        let set = to_set(maybe(None::<Vec<i32>>));
        assert!(set.is_empty());
    }

    #[test]
    fn test_to_frozen_seq_content() {
        let frozen = to_frozen_seq([1, 2, 2, 3]);
        assert_eq!(frozen.as_slice(), &[1, 2, 2, 3]);
    }

    #[test]
    fn test_to_frozen_set_content() {
        let frozen = to_frozen_set(["b", "a", "b"]);
        assert_eq!(frozen.len(), 2);
        assert!(frozen.contains(&"a"));
        assert_eq!(frozen.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn test_to_map_preserves_first_insertion_order() {
        let map = to_map([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map["a"], 3);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn test_to_map_flat_even_length() {
        let map = to_map_flat([1, 10, 2, 20]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], 10);
        assert_eq!(map[&2], 20);
    }

    #[test]
    fn test_to_map_flat_empty() {
        let map = to_map_flat(Vec::<i32>::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_to_map_flat_odd_length_fails() {
        assert_eq!(
            to_map_flat([1, 10, 2]),
            Err(Error::OddPairList { len: 3 })
        );
    }

    #[test]
    fn test_add_all_appends_in_order() {
        let mut target = vec![1];
        add_all(&mut target, [2, 3]);
        add_all(&mut target, maybe(None::<Vec<i32>>));
        assert_eq!(target, vec![1, 2, 3]);
    }

    #[test]
    fn test_is_empty_source() {
        assert!(is_empty_source(Vec::<i32>::new()));
        assert!(is_empty_source(maybe(None::<Vec<i32>>)));
        assert!(!is_empty_source([1]));
    }

    #[test]
    fn test_to_set_matches_naive_first_occurrence_on_random_input() {
        let mut rng = rand::thread_rng();
        let input: Vec<u8> = (0..200).map(|_| rng.gen_range(0..10)).collect();

        let mut expected = Vec::new();
        for v in &input {
            if !expected.contains(v) {
                expected.push(*v);
            }
        }

        let set = to_set(input);
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }
}
