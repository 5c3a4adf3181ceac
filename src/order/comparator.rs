//! Stateless comparator building blocks. All of them compose, e.g.
//! `by_key(|p: &Person| p.age).reversed().then_by_key(|p: &Person| p.name.clone())`.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::Comparator;

/// Comparator for the [`Ord`] implementation of `T`.
pub struct Natural<T: ?Sized> {
    _marker: PhantomData<fn(&T, &T)>,
}

impl<T> Comparator<T> for Natural<T>
where
    T: Ord + ?Sized,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized> Default for Natural<T> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Clone for Natural<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Natural<T> {}

impl<T: ?Sized> fmt::Debug for Natural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Natural")
    }
}

#[inline]
pub fn natural<T: ?Sized>() -> Natural<T> {
    Natural::default()
}

/// Identity function that pins the argument types of a comparison closure, so that
/// `from_fn(|a, b| ..)` infers like a closure passed to `slice::sort_by`.
#[inline]
pub fn from_fn<T, F>(compare: F) -> F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    compare
}

/// See [`Comparator::reversed`].
#[derive(Clone, Copy, Debug)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the comparator whose order is inverted.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Comparator<T> for Reversed<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(a, b).reverse()
    }
}

/// See [`Comparator::then`].
#[derive(Clone, Copy, Debug)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Comparator<T> for Then<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.second.compare(a, b),
            ord => ord,
        }
    }
}

/// Orders values by the [`Ord`] key `key` extracts from them.
pub struct ByKey<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<T, K, F> Comparator<T> for ByKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _key: PhantomData,
        }
    }
}

impl<F: Copy, K> Copy for ByKey<F, K> {}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

/// Returns a comparator ordering values by the key `key` extracts.
///
/// The key is extracted twice per comparison, keep the extraction cheap.
#[inline]
pub fn by_key<T, K, F>(key: F) -> ByKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey {
        key,
        _key: PhantomData,
    }
}

/// Lifts a comparator over `T` to `Option<T>`, ordering `None` before every `Some`.
#[derive(Clone, Copy, Debug)]
pub struct NullsFirst<C> {
    inner: C,
}

/// Lifts a comparator over `T` to `Option<T>`, ordering `None` after every `Some`.
#[derive(Clone, Copy, Debug)]
pub struct NullsLast<C> {
    inner: C,
}

#[inline]
pub fn nulls_first<C>(inner: C) -> NullsFirst<C> {
    NullsFirst { inner }
}

#[inline]
pub fn nulls_last<C>(inner: C) -> NullsLast<C> {
    NullsLast { inner }
}

impl<T, C> Comparator<Option<T>> for NullsFirst<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}

impl<T, C> Comparator<Option<T>> for NullsLast<C>
where
    C: Comparator<T>,
{
    fn compare(&self, a: &Option<T>, b: &Option<T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => self.inner.compare(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Employee {
        name: &'static str,
        age: u32,
    }

    const ALICE: Employee = Employee {
        name: "alice",
        age: 41,
    };
    const BOB: Employee = Employee {
        name: "bob",
        age: 29,
    };
    const CAROL: Employee = Employee {
        name: "carol",
        age: 41,
    };

    #[test]
    fn reversed_inverts_sign() {
        let by_age = by_key(|e: &Employee| e.age);

        assert_eq!(by_age.compare(&BOB, &ALICE), Ordering::Less);
        assert_eq!(by_age.reversed().compare(&BOB, &ALICE), Ordering::Greater);
        assert_eq!(by_age.reversed().compare(&ALICE, &CAROL), Ordering::Equal);
    }

    #[test]
    fn then_breaks_ties_only() {
        let cmp = by_key(|e: &Employee| e.age).then_by_key(|e: &Employee| e.name);

        assert_eq!(cmp.compare(&ALICE, &CAROL), Ordering::Less);
        assert_eq!(cmp.compare(&CAROL, &ALICE), Ordering::Greater);
        // The first key decides whenever it differs.
        assert_eq!(cmp.compare(&CAROL, &BOB), Ordering::Greater);
    }

    #[test]
    fn natural_matches_ord() {
        assert_eq!(natural().compare(&i32::MIN, &i32::MAX), Ordering::Less);
        assert_eq!(natural().compare("pat", "amir"), Ordering::Greater);
        assert_eq!(natural().compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn nulls_placement() {
        let first = nulls_first(natural());
        let last = nulls_last(natural());

        assert_eq!(first.compare(&None, &Some(1)), Ordering::Less);
        assert_eq!(last.compare(&None, &Some(1)), Ordering::Greater);
        assert_eq!(first.compare(&Some(2), &Some(1)), Ordering::Greater);
        assert_eq!(last.compare(&None::<i32>, &None), Ordering::Equal);
    }

    #[test]
    fn closures_are_comparators() {
        let by_len = from_fn(|a: &str, b: &str| a.len().cmp(&b.len()));

        assert_eq!(by_len.compare("fred", "bob"), Ordering::Greater);
        assert_eq!(by_len.reversed().compare("fred", "bob"), Ordering::Less);
    }
}
