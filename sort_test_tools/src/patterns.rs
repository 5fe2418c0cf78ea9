use std::cmp::Ordering;
use std::env;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every generator in this process. Set `OVERRIDE_SEED` to replay a failing run.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

// --- Patterns of the array generator ---

/// Default value range used by the generator patterns.
pub const DEFAULT_VALUE_RANGE: RangeInclusive<i32> = 0..=1000;

/// Input shapes produced by the array generator. Partially sorted shapes sort the leading third
/// or two thirds of an otherwise random input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    PureRandom,
    SortedAscending,
    SortedDescending,
    OneThirdAscending,
    OneThirdDescending,
    TwoThirdsAscending,
    TwoThirdsDescending,
}

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::PureRandom,
        Pattern::SortedAscending,
        Pattern::SortedDescending,
        Pattern::OneThirdAscending,
        Pattern::OneThirdDescending,
        Pattern::TwoThirdsAscending,
        Pattern::TwoThirdsDescending,
    ];

    /// Name used in reports, e.g. `SortedAsc`.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::PureRandom => "PureRandom",
            Pattern::SortedAscending => "SortedAsc",
            Pattern::SortedDescending => "SortedDesc",
            Pattern::OneThirdAscending => "OneThirdAsc",
            Pattern::OneThirdDescending => "OneThirdDesc",
            Pattern::TwoThirdsAscending => "TwoThirdsAsc",
            Pattern::TwoThirdsDescending => "TwoThirdsDesc",
        }
    }

    pub fn generate(self, len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
        let mut v = random_uniform(len, range);
        self.shape(&mut v, |a, b| a.cmp(b));
        v
    }

    /// Same shapes with uniformly distributed floats.
    pub fn generate_f32(self, len: usize, range: RangeInclusive<f32>) -> Vec<f32> {
        let mut v = random_uniform_f32(len, range);
        self.shape(&mut v, |a, b| a.total_cmp(b));
        v
    }

    /// Sorts the prefix this pattern prescribes, `compare` gives the ascending order.
    fn shape<T, F>(self, v: &mut [T], compare: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let len = v.len();
        let (prefix_len, descending) = match self {
            Pattern::PureRandom => return,
            Pattern::SortedAscending => (len, false),
            Pattern::SortedDescending => (len, true),
            Pattern::OneThirdAscending => (len / 3, false),
            Pattern::OneThirdDescending => (len / 3, true),
            Pattern::TwoThirdsAscending => (len * 2 / 3, false),
            Pattern::TwoThirdsDescending => (len * 2 / 3, true),
        };

        let prefix = &mut v[..prefix_len];
        if descending {
            prefix.sort_unstable_by(|a, b| compare(b, a));
        } else {
            prefix.sort_unstable_by(compare);
        }
    }
}

// --- Patterns of the test battery ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_seeded_rng();
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_uniform_f32(len: usize, range: RangeInclusive<f32>) -> Vec<f32> {
    let mut rng = new_seeded_rng();
    let dist = rand::distributions::Uniform::from(range);
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_u64(len: usize) -> Vec<u64> {
    let mut rng = new_seeded_rng();
    (0..len).map(|_| rng.gen::<u64>()).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_seeded_rng();
    match ZipfDistribution::new(len, exponent) {
        Ok(dist) => (0..len).map(|_| dist.sample(&mut rng) as i32).collect(),
        Err(()) => all_equal(len),
    }
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

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
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

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    for chunk in v.chunks_mut(chunk_len) {
        chunk.sort_unstable();
    }

    v
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    for chunk in v.chunks_mut(chunk_len) {
        chunk.sort_unstable_by(|a, b| b.cmp(a));
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let first_half = &mut v[0..(len / 2)];
    first_half.sort_unstable();

    let second_half = &mut v[(len / 2)..len];
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}
