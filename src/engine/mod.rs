use std::mem;

mod merge;
mod smallsort;

/// Slices up to this length are sorted with insertion sort alone.
pub(crate) const MAX_INSERTION: usize = 20;

/// Sorts `v` stable and ascending with respect to `is_less`.
///
/// *O*(*n* \* log(*n*)) comparisons worst-case. Allocates a scratch buffer of `v.len() / 2`
/// elements for inputs longer than [`MAX_INSERTION`].
#[inline]
pub(crate) fn stable_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    if len <= MAX_INSERTION {
        log::trace!("insertion sort of {len} elements");
        smallsort::insertion_sort_shift_left(v, 1, &mut is_less);
        return;
    }

    log::trace!("merge sort of {len} elements");
    merge::merge_sort(v, &mut is_less);
}
