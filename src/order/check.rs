//! Diagnostic for comparators that break the ordering laws. The sort engine never calls this, an
//! inconsistent comparator only makes the resulting order unspecified.

use std::cmp::Ordering;

use crate::error::{ConsistencyLaw, SortError, SortResult};
use crate::order::Comparator;

/// Checks `comparator` for reflexivity, antisymmetry and transitivity on every pair and triple
/// drawn from `sample`.
///
/// Passing says nothing about values outside the sample. The transitivity check performs
/// `sample.len()^3` comparisons, keep samples small.
pub fn verify_consistency<T, C>(sample: &[T], comparator: &C) -> SortResult<()>
where
    C: Comparator<T> + ?Sized,
{
    let len = sample.len();

    for i in 0..len {
        if comparator.compare(&sample[i], &sample[i]) != Ordering::Equal {
            return Err(violation(ConsistencyLaw::Reflexivity, vec![i]));
        }
    }

    for i in 0..len {
        for j in (i + 1)..len {
            let ab = comparator.compare(&sample[i], &sample[j]);
            let ba = comparator.compare(&sample[j], &sample[i]);
            if ab != ba.reverse() {
                return Err(violation(ConsistencyLaw::Antisymmetry, vec![i, j]));
            }
        }
    }

    for i in 0..len {
        for j in 0..len {
            let ab = comparator.compare(&sample[i], &sample[j]);
            if ab == Ordering::Greater {
                continue;
            }

            for k in 0..len {
                let bc = comparator.compare(&sample[j], &sample[k]);
                if bc == Ordering::Greater {
                    continue;
                }

                // a <= b <= c, strict as soon as one step is strict.
                let expected = if ab == Ordering::Equal && bc == Ordering::Equal {
                    Ordering::Equal
                } else {
                    Ordering::Less
                };

                if comparator.compare(&sample[i], &sample[k]) != expected {
                    return Err(violation(ConsistencyLaw::Transitivity, vec![i, j, k]));
                }
            }
        }
    }

    Ok(())
}

fn violation(law: ConsistencyLaw, indices: Vec<usize>) -> SortError {
    log::debug!("comparator violates {law} at sample indices {indices:?}");

    SortError::InconsistentComparator { law, indices }
}
