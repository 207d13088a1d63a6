//! Combinators built on top of the core `Maybe` operations.
//!
//! - [`Maybe::flatten`]: collapses one level of nesting.
//! - [`Maybe::to_outcome`]: turns absence into a typed failure.
//! - [`GetMaybe`] / [`get_maybe`]: dictionary lookup that never fails for a
//!   missing key.
//! - [`Somes`] / [`somes`]: a lazy sequence of the present payloads.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::Maybe;
use crate::outcome::Outcome;

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// assert_eq!(Maybe::some(Maybe::some(1)).flatten(), Maybe::some(1));
    /// assert_eq!(Maybe::some(Maybe::<i32>::none()).flatten(), Maybe::none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Maybe<T> {
    /// Converts into an [`Outcome`], using `on_none` as the failure payload
    /// for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Maybe, Outcome};
    ///
    /// let found = Maybe::some(1).to_outcome(Failure::new("missing"));
    /// assert_eq!(found, Outcome::success(1));
    ///
    /// let missing = Maybe::<i32>::none().to_outcome(Failure::new("missing"));
    /// assert_eq!(missing, Outcome::failure(Failure::new("missing")));
    /// ```
    #[inline]
    pub fn to_outcome<F>(self, on_none: F) -> Outcome<T, F> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(on_none),
        }
    }

    /// Like [`to_outcome`](Self::to_outcome), building the failure only when
    /// it is needed.
    #[inline]
    pub fn to_outcome_with<F, N>(self, on_none: N) -> Outcome<T, F>
    where
        N: FnOnce() -> F,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(on_none()),
        }
    }
}

// =============================================================================
// Dictionary Lookup
// =============================================================================

/// Key lookup that answers with a [`Maybe`] instead of failing for a missing
/// key.
///
/// The key bound follows the map: a `HashMap` needs `Q: Hash + Eq`, a
/// `BTreeMap` needs `Q: Ord`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use maybe_result::{GetMaybe, Maybe};
///
/// let ages: HashMap<&str, u32> = [("ada", 36)].into_iter().collect();
/// assert_eq!(ages.get_maybe("ada"), Maybe::some(&36));
/// assert_eq!(ages.get_maybe("bob"), Maybe::none());
/// ```
pub trait GetMaybe<Q: ?Sized, V> {
    /// Returns the value for `key`, or `None` if absent.
    fn get_maybe(&self, key: &Q) -> Maybe<&V>;
}

impl<K, V, S, Q> GetMaybe<Q, V> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    fn get_maybe(&self, key: &Q) -> Maybe<&V> {
        self.get(key).into()
    }
}

impl<K, V, Q> GetMaybe<Q, V> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn get_maybe(&self, key: &Q) -> Maybe<&V> {
        self.get(key).into()
    }
}

/// Looks up `key` in `map`, returning `None` for a missing key.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use maybe_result::{get_maybe, Maybe};
///
/// let map: BTreeMap<String, i32> = [("one".to_string(), 1)].into_iter().collect();
/// assert_eq!(get_maybe(&map, "one"), Maybe::some(&1));
/// assert_eq!(get_maybe(&map, "two"), Maybe::none());
/// ```
#[inline]
pub fn get_maybe<'a, M, V, Q>(map: &'a M, key: &Q) -> Maybe<&'a V>
where
    M: GetMaybe<Q, V>,
    Q: ?Sized,
{
    map.get_maybe(key)
}

// =============================================================================
// Somes
// =============================================================================

/// A lazy iterator over the payloads of the present elements of a sequence
/// of [`Maybe`]s.
///
/// Created by [`somes`] and [`MaybeIteratorExt::somes`]. Order is preserved;
/// absent elements are skipped. The source may be unbounded.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Somes<I> {
    iterator: I,
}

impl<I, T> Iterator for Somes<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iterator.by_ref().find_map(Maybe::into_option)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}

impl<I, T> DoubleEndedIterator for Somes<I>
where
    I: DoubleEndedIterator<Item = Maybe<T>>,
{
    fn next_back(&mut self) -> Option<T> {
        self.iterator.by_ref().rev().find_map(Maybe::into_option)
    }
}

impl<I, T> FusedIterator for Somes<I> where I: FusedIterator<Item = Maybe<T>> {}

/// Returns a lazy sequence of the payloads of the present elements.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{somes, Maybe};
///
/// let values: Vec<i32> = somes(vec![Maybe::some(1), Maybe::none(), Maybe::some(3)]).collect();
/// assert_eq!(values, vec![1, 3]);
/// ```
pub fn somes<I, T>(sequence: I) -> Somes<I::IntoIter>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    Somes {
        iterator: sequence.into_iter(),
    }
}

/// Iterator adapters for sequences of [`Maybe`]s.
pub trait MaybeIteratorExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Yields the payload of every present element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Maybe, MaybeIteratorExt};
    ///
    /// let evens = (1..)
    ///     .map(|n| if n % 2 == 0 { Maybe::some(n) } else { Maybe::none() })
    ///     .somes()
    ///     .take(3)
    ///     .collect::<Vec<_>>();
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// ```
    fn somes(self) -> Somes<Self> {
        Somes { iterator: self }
    }
}

impl<I, T> MaybeIteratorExt<T> for I where I: Iterator<Item = Maybe<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::Failure;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Maybe::some(Maybe::some(1)), Maybe::some(1))]
    #[case(Maybe::some(Maybe::none()), Maybe::none())]
    #[case(Maybe::none(), Maybe::none())]
    fn flatten_removes_one_level(#[case] nested: Maybe<Maybe<i32>>, #[case] expected: Maybe<i32>) {
        assert_eq!(nested.flatten(), expected);
    }

    #[rstest]
    fn to_outcome_maps_branches() {
        assert_eq!(
            Maybe::some(1).to_outcome(Failure::new("none")),
            Outcome::success(1)
        );
        assert_eq!(
            Maybe::<i32>::none().to_outcome(Failure::new("none")),
            Outcome::failure(Failure::new("none"))
        );
    }

    #[rstest]
    fn to_outcome_with_builds_failure_lazily() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, Failure> = Maybe::some(1).to_outcome_with(|| {
            calls.set(calls.get() + 1);
            Failure::new("none")
        });
        assert!(outcome.is_success());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn get_maybe_on_hash_map_with_string_keys() {
        let map: HashMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
        assert_eq!(map.get_maybe("a"), Maybe::some(&1));
        assert_eq!(map.get_maybe("b"), Maybe::none());
        assert_eq!(get_maybe(&map, "a").map(|value| value * 10), Maybe::some(10));
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    struct UserId(u32);

    #[rstest]
    fn get_maybe_on_hash_map_with_unordered_keys() {
        let names: HashMap<UserId, &str> = HashMap::from([(UserId(1), "ada")]);
        assert_eq!(names.get_maybe(&UserId(1)), Maybe::some(&"ada"));
        assert_eq!(get_maybe(&names, &UserId(2)), Maybe::none());
    }

    #[rstest]
    fn get_maybe_on_btree_map_with_borrowed_keys() {
        let map: BTreeMap<String, i32> = BTreeMap::from([("a".to_string(), 1)]);
        assert_eq!(map.get_maybe("a"), Maybe::some(&1));
        assert_eq!(get_maybe(&map, "z"), Maybe::none());
    }

    #[rstest]
    fn somes_preserves_order_and_drops_none() {
        let values: Vec<i32> = somes([Maybe::some(1), Maybe::none(), Maybe::some(3)]).collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[rstest]
    fn somes_is_lazy() {
        let pulled = Cell::new(0);
        let mut iterator = (0..10)
            .map(|n| {
                pulled.set(pulled.get() + 1);
                if n % 3 == 0 { Maybe::some(n) } else { Maybe::none() }
            })
            .somes();

        assert_eq!(pulled.get(), 0);
        assert_eq!(iterator.next(), Some(0));
        assert_eq!(pulled.get(), 1);
        assert_eq!(iterator.next(), Some(3));
        assert_eq!(pulled.get(), 4);
    }

    #[rstest]
    fn somes_runs_backwards() {
        let values: Vec<i32> = somes(vec![Maybe::some(1), Maybe::none(), Maybe::some(3)])
            .rev()
            .collect();
        assert_eq!(values, vec![3, 1]);
    }
}
