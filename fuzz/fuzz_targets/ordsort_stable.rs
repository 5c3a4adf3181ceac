#![no_main]

use libfuzzer_sys::fuzz_target;

use ordsort::{by_key, Comparator};

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    ordsort::sort_natural(&mut v).unwrap();

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(v, expected);

    // Key collisions are frequent with 4 buckets, the original index checks stability.
    let mut tagged: Vec<(u8, usize)> = data.iter().copied().zip(0..).collect();
    ordsort::sort_with(&mut tagged, &by_key(|t: &(u8, usize)| t.0 % 4).reversed());

    let mut expected = data.iter().copied().zip(0..).collect::<Vec<(u8, usize)>>();
    expected.sort_by(|a, b| (b.0 % 4).cmp(&(a.0 % 4)));
    assert_eq!(tagged, expected);
});
