//! Shared test battery for stable sort implementations.
//!
//! Implement [`Sort`] for a sort under test and call [`instantiate_sort_tests!`] with it in an
//! integration test file, every function in [`tests`] then runs as its own `#[test]`.

use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
