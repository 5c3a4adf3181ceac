use std::cell::Cell;
use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use once_cell::sync::Lazy;

use ordsort::{Comparator, Orderable};
use sort_test_tools::patterns;

static BENCH_FILTER: Lazy<Option<String>> = Lazy::new(|| env::var("BENCH_FILTER").ok());

fn should_run_benchmark(name: &str) -> bool {
    match BENCH_FILTER.as_deref() {
        Some(filter) => name.contains(filter),
        None => true,
    }
}

/// The ways of sorting a slice that are compared against each other.
#[derive(Clone, Copy)]
enum Variant {
    Natural,
    Comparator,
    ComparatorReversed,
    StdSortBy,
}

impl Variant {
    const ALL: [Variant; 4] = [
        Variant::Natural,
        Variant::Comparator,
        Variant::ComparatorReversed,
        Variant::StdSortBy,
    ];

    fn name(self) -> &'static str {
        match self {
            Variant::Natural => "ordsort_natural",
            Variant::Comparator => "ordsort_comparator",
            Variant::ComparatorReversed => "ordsort_reversed",
            Variant::StdSortBy => "std_sort_by",
        }
    }

    #[inline(never)]
    fn sort<T: Ord + Orderable>(self, v: &mut [T]) {
        match self {
            Variant::Natural => {
                if let Err(err) = ordsort::sort_natural(v) {
                    panic!("{err}");
                }
            }
            Variant::Comparator => ordsort::sort_with(v, &ordsort::natural()),
            Variant::ComparatorReversed => ordsort::sort_with(v, &ordsort::natural().reversed()),
            Variant::StdSortBy => v.sort_by(|a, b| a.cmp(b)),
        }
    }

    /// Same as `sort` but through a counting closure, keeps the element type untouched.
    fn sort_counting<T: Ord>(self, v: &mut [T], comp_count: &Cell<u64>) {
        let compare = |a: &T, b: &T| {
            comp_count.set(comp_count.get() + 1);
            a.cmp(b)
        };

        match self {
            Variant::Natural | Variant::Comparator => ordsort::sort_by(v, compare),
            Variant::ComparatorReversed => ordsort::sort_by(v, |a, b| compare(a, b).reverse()),
            Variant::StdSortBy => v.sort_by(compare),
        }
    }
}

fn measure_comp_count<T: Ord>(
    name: &str,
    test_len: usize,
    variant: Variant,
    transform: fn(Vec<i32>) -> Vec<T>,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else {
        100
    };

    let comp_count = Cell::new(0u64);
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        variant.sort_counting(black_box(test_data.as_mut_slice()), &comp_count);
    }

    // Integer division, reads 0 for sizes that average below one comparison.
    let total = comp_count.get() / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_variant<T: Ord + Orderable>(
    c: &mut Criterion,
    test_len: usize,
    variant: Variant,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    if env::var("MEASURE_COMP").is_ok() {
        let name = format!(
            "{}-comp-{}-{}-{}",
            variant.name(),
            transform_name,
            pattern_name,
            test_len
        );

        if should_run_benchmark(&name) {
            measure_comp_count(&name, test_len, variant, transform, pattern_provider);
        }
        return;
    }

    let name = format!(
        "{}-hot-{}-{}-{}",
        variant.name(),
        transform_name,
        pattern_name,
        test_len
    );
    if !should_run_benchmark(&name) {
        return;
    }

    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&name, |b| {
        b.iter_batched(
            || transform(pattern_provider(test_len)),
            |mut test_data| variant.sort(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

fn bench_patterns<T: Ord + Orderable>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if test_len > 100_000 && transform_name == "string" {
        // Too expensive.
        return;
    }

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 8] = [
        ("random", patterns::random),
        ("random_d20", |len| patterns::random_uniform(len, 0..=20)),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("random_s95", |len| patterns::random_sorted(len, 95.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("saws_short", |len| {
            patterns::saw_mixed(len, (len as f64 / 22.0).round() as usize)
        }),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        if test_len < 3 && pattern_name != "random" {
            continue;
        }

        for variant in Variant::ALL {
            bench_variant(
                c,
                test_len,
                variant,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }
    }
}

fn ensure_true_random() {
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    // Identical inputs would let the branch predictor learn the benchmark.
    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_lens = [
        0, 1, 2, 3, 7, 8, 15, 16, 20, 21, 31, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
        1_000_000,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_len in test_lens {
        bench_patterns(c, test_len, "i32", |values| values);

        // Order preserving widening into the u64 range, the common index type.
        bench_patterns(c, test_len, "u64", |values| {
            values
                .into_iter()
                .map(|val| ((val as i64) + (i32::MAX as i64) + 1) as u64 * (i32::MAX as u64))
                .collect()
        });

        // Not Copy, heap access on every comparison.
        bench_patterns(c, test_len, "string", |values| {
            values
                .into_iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

