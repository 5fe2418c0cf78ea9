use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_test_tools::patterns::{Pattern, DEFAULT_VALUE_RANGE};
use sort_test_tools::Sort;
use sort_toolkit_rs::sort::{heap, insertion_binary, insertion_classic, quick};
use sort_toolkit_rs::DynamicArray;

// The insertion sorts are quadratic, keep their sizes small enough to finish.
const QUADRATIC_SIZES: [usize; 4] = [16, 128, 1_000, 5_000];
const SIZES: [usize; 5] = [16, 128, 1_000, 10_000, 50_000];

fn bench_sort<S: Sort>(c: &mut Criterion, sizes: &[usize]) {
    for pattern in Pattern::ALL {
        let mut group = c.benchmark_group(format!("{}/{}", S::name(), pattern.name()));
        group.measurement_time(Duration::from_secs(3));

        for &size in sizes {
            let input = pattern.generate(size, DEFAULT_VALUE_RANGE);

            group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
                b.iter_batched_ref(
                    || DynamicArray::from(input.as_slice()),
                    |array| S::sort(black_box(array.as_mut_slice())),
                    BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

macro_rules! bench_sorts {
    ($($module:ident => $sizes:expr),* $(,)?) => {
        paste::paste! {
            $(
                fn [<bench_ $module>](c: &mut Criterion) {
                    bench_sort::<$module::SortImpl>(c, &$sizes);
                }
            )*

            criterion_group!(benches, $([<bench_ $module>]),*);
        }
    };
}

bench_sorts!(
    insertion_classic => QUADRATIC_SIZES,
    insertion_binary => QUADRATIC_SIZES,
    heap => SIZES,
    quick => SIZES,
);

criterion_main!(benches);
