//! Input patterns for testing and benchmarking sorts. Limited to i32 values, other types are
//! derived from them by the callers.
//!
//! All random patterns draw from a seed that is fixed for the whole process, so a failure can be
//! reproduced by passing the printed seed back in via the `OVERRIDE_SEED` env var.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| true)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| directions.get(i).copied().unwrap_or(0) == 1)
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random_vec(len);

    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Makes every following call to a random pattern draw from a new seed. Meant for benchmarks,
/// where repeating the exact same input would let the branch predictor learn it.
pub fn use_random_seed_each_time() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

/// The seed the random patterns of this process are derived from.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|seed| u64::from_str(&seed).ok())
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn new_rng() -> StdRng {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        StdRng::seed_from_u64(thread_rng().gen())
    } else {
        StdRng::seed_from_u64(random_init_seed())
    }
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values split into `saw_count` chunks, each sorted ascending, or descending if
/// `is_descending(chunk_idx)` says so.
fn saw(len: usize, saw_count: usize, is_descending: impl Fn(usize) -> bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut v = random_vec(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if is_descending(i) {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        } else {
            chunk.sort_unstable();
        }
    }

    v
}
