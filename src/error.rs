use std::fmt;

use thiserror::Error;

pub type SortResult<T> = Result<T, SortError>;

/// Errors reported by the sort entry points and the comparator diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// A natural-order sort was requested for a type that defines no natural order.
    /// Recoverable by sorting with an explicit comparator instead.
    #[error("type `{type_name}` has no natural ordering, sort it with a comparator")]
    NotOrderable { type_name: &'static str },

    /// A comparator broke one of the ordering laws on the inspected sample.
    #[error("comparator violates {law} at sample indices {indices:?}")]
    InconsistentComparator {
        law: ConsistencyLaw,
        indices: Vec<usize>,
    },
}

impl SortError {
    pub(crate) fn not_orderable<T>() -> Self {
        SortError::NotOrderable {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// The ordering law a comparator was caught violating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyLaw {
    /// `compare(a, a)` must be `Equal`.
    Reflexivity,
    /// `compare(a, b)` must be the reverse of `compare(b, a)`.
    Antisymmetry,
    /// `a < b` and `b < c` must imply `a < c`, likewise for `==`.
    Transitivity,
}

impl fmt::Display for ConsistencyLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConsistencyLaw::Reflexivity => "reflexivity",
            ConsistencyLaw::Antisymmetry => "antisymmetry",
            ConsistencyLaw::Transitivity => "transitivity",
        };

        f.write_str(name)
    }
}
