//! Stable sorting driven by either the natural ordering a type defines for itself, or by external
//! comparators chosen at the call site.
//!
//! ```
//! use ordsort::{by_key, sort_natural, sort_with, Comparator};
//!
//! let mut v = [7, 12, -4, 7, 0];
//! sort_natural(&mut v).unwrap();
//! assert_eq!(v, [-4, 0, 7, 7, 12]);
//!
//! let mut names = ["fred", "bob", "chris", "albert"];
//! sort_with(&mut names, &by_key(|s: &&str| s.len()));
//! assert_eq!(names, ["bob", "fred", "chris", "albert"]);
//!
//! sort_with(&mut names, &by_key(|s: &&str| s.len()).reversed());
//! assert_eq!(names, ["albert", "chris", "fred", "bob"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

mod engine;
pub mod error;
pub mod order;

pub use error::{ConsistencyLaw, SortError, SortResult};
pub use order::check::verify_consistency;
pub use order::comparator::{
    by_key, from_fn, natural, nulls_first, nulls_last, ByKey, Natural, NullsFirst, NullsLast,
    Reversed, Then,
};
pub use order::three_way;
pub use order::{Comparator, NaturalOrder, Orderable};

#[doc(hidden)]
pub use paste::paste as __paste;

/// Selects how elements are compared by [`sort`].
///
/// [`sort`] requires `T: Orderable` for both variants. Types without an [`Orderable`] impl use
/// [`sort_with`] directly, or opt in with [`not_orderable!`] to accept only `External`.
pub enum Strategy<'a, T> {
    /// The natural ordering of `T`, see [`Orderable`].
    Natural,
    /// A caller supplied comparator.
    External(&'a dyn Comparator<T>),
}

impl<T> Clone for Strategy<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Strategy<'_, T> {}

impl<T> Default for Strategy<'_, T> {
    fn default() -> Self {
        Strategy::Natural
    }
}

impl<T> fmt::Debug for Strategy<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Natural => f.write_str("Natural"),
            Strategy::External(_) => f.write_str("External(..)"),
        }
    }
}

/// Sorts the slice by the natural ordering of `T`.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// Returns [`SortError::NotOrderable`] without touching the slice if `T` declares no natural
/// ordering, regardless of the slice length.
#[inline]
pub fn sort_natural<T>(v: &mut [T]) -> SortResult<()>
where
    T: Orderable,
{
    let compare = natural_order_of::<T>()?;
    engine::stable_sort(v, |a, b| compare(a, b) == Ordering::Less);

    Ok(())
}

/// Sorts the slice with a comparator.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator must define a total ordering for the elements in the slice. If it does not, the
/// order of the elements is unspecified, but the slice still contains every original element and
/// the call terminates.
///
/// Descending order is obtained by passing a [reversed](Comparator::reversed) comparator.
#[inline]
pub fn sort_with<T, C>(v: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    engine::stable_sort(v, |a, b| comparator.compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a comparison closure.
///
/// Unlike [`sort_with`] the closure may carry mutable state, e.g. a comparison counter.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    engine::stable_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with the given strategy.
///
/// `Strategy::Natural` behaves like [`sort_natural`], `Strategy::External` like [`sort_with`].
/// The `T: Orderable` bound applies to both, see [`Strategy`].
pub fn sort<T>(v: &mut [T], strategy: Strategy<'_, T>) -> SortResult<()>
where
    T: Orderable,
{
    match strategy {
        Strategy::Natural => sort_natural(v),
        Strategy::External(comparator) => {
            sort_with(v, comparator);
            Ok(())
        }
    }
}

/// Collects `iter` into a new vector sorted by the natural ordering of `T`.
pub fn sorted_natural<T, I>(iter: I) -> SortResult<Vec<T>>
where
    T: Orderable,
    I: IntoIterator<Item = T>,
{
    // Reject before consuming the iterator.
    natural_order_of::<T>()?;

    let mut v: Vec<T> = iter.into_iter().collect();
    sort_natural(&mut v)?;

    Ok(v)
}

/// Collects `iter` into a new vector sorted with `comparator`.
pub fn sorted_with<T, I, C>(iter: I, comparator: &C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    C: Comparator<T> + ?Sized,
{
    let mut v: Vec<T> = iter.into_iter().collect();
    sort_with(&mut v, comparator);

    v
}

/// Returns `true` if no adjacent pair of `v` compares `Greater` under `comparator`.
pub fn is_sorted_with<T, C>(v: &[T], comparator: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    v.windows(2)
        .all(|w| comparator.compare(&w[0], &w[1]) != Ordering::Greater)
}

fn natural_order_of<T: Orderable>() -> SortResult<NaturalOrder<T>> {
    T::natural_order().ok_or_else(|| {
        let err = SortError::not_orderable::<T>();
        log::debug!("rejected natural-order sort: {err}");
        err
    })
}
