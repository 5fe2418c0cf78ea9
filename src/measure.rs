//! Timing harness and semicolon separated report.
//!
//! Every [`Record`] summarises `sample_size` runs of one sort on one input size and pattern. A
//! [`Section`] groups the records of one element type and sort order under a title:
//!
//! ```text
//! Results: int, Ascending
//! KindOfRandom;ArraySize;SampleSize;AvgTime;MinTime;MaxTime;Unit
//! PureRandom;500;25;1.2345;1.0000;2.0000;us
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use sort_test_tools::patterns::{Pattern, DEFAULT_VALUE_RANGE};
use sort_test_tools::Sort;
use tracing::{debug, trace};

use crate::array::DynamicArray;
use crate::sort::{heap, insertion_binary, insertion_classic, quick};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureConfig {
    /// Input lengths, one record per length.
    pub sizes: Vec<usize>,
    /// Runs per length. Zero produces no records.
    pub sample_size: usize,
    /// Values are drawn uniformly from this range.
    pub value_range: RangeInclusive<i32>,
}

impl MeasureConfig {
    pub const DEFAULT_SAMPLE_SIZE: usize = 25;

    /// Size ladder for the quadratic sorts: 500 to 3500 in steps of 500.
    pub fn quadratic(sample_size: usize) -> Self {
        Self::with_sizes((500..=3_500).step_by(500).collect(), sample_size)
    }

    /// Size ladder for quicksort: 1000 to 7000 in steps of 1000.
    pub fn quick(sample_size: usize) -> Self {
        Self::with_sizes((1_000..=7_000).step_by(1_000).collect(), sample_size)
    }

    fn with_sizes(sizes: Vec<usize>, sample_size: usize) -> Self {
        Self {
            sizes,
            sample_size,
            value_range: DEFAULT_VALUE_RANGE,
        }
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self::quadratic(Self::DEFAULT_SAMPLE_SIZE)
    }
}

/// Direction the measured sort is asked to produce.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    pub const ALL: [Order; 2] = [Order::Ascending, Order::Descending];

    pub fn name(self) -> &'static str {
        match self {
            Order::Ascending => "Ascending",
            Order::Descending => "Descending",
        }
    }

    /// Comparator producing this order from the ascending one.
    pub fn apply(self, ascending: Ordering) -> Ordering {
        match self {
            Order::Ascending => ascending,
            Order::Descending => ascending.reverse(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element types the harness can generate inputs for.
pub trait Element: Copy + fmt::Debug {
    /// Name used in section titles.
    const NAME: &'static str;

    fn generate(pattern: Pattern, len: usize, range: &RangeInclusive<i32>) -> Vec<Self>;

    /// Total ascending order.
    fn compare(a: &Self, b: &Self) -> Ordering;
}

impl Element for i32 {
    const NAME: &'static str = "int";

    fn generate(pattern: Pattern, len: usize, range: &RangeInclusive<i32>) -> Vec<Self> {
        pattern.generate(len, range.clone())
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }
}

impl Element for f32 {
    const NAME: &'static str = "float";

    fn generate(pattern: Pattern, len: usize, range: &RangeInclusive<i32>) -> Vec<Self> {
        pattern.generate_f32(len, *range.start() as f32..=*range.end() as f32)
    }

    fn compare(a: &Self, b: &Self) -> Ordering {
        a.total_cmp(b)
    }
}

/// Times `S::sort_by` for every configured size on `E` inputs of shape `pattern`, sorted in
/// `order`.
///
/// Inputs are generated before the clock starts, only the sort itself is timed.
pub fn measure<S: Sort, E: Element>(
    config: &MeasureConfig,
    pattern: Pattern,
    order: Order,
) -> Vec<Record> {
    debug!(
        sort = %S::name(),
        element = E::NAME,
        %order,
        pattern = pattern.name(),
        sizes = ?config.sizes,
        samples = config.sample_size,
        "measuring"
    );

    config
        .sizes
        .iter()
        .filter_map(|&size| {
            let samples = (0..config.sample_size)
                .map(|_| {
                    let mut array =
                        DynamicArray::from(E::generate(pattern, size, &config.value_range));

                    let start = Instant::now();
                    S::sort_by(array.as_mut_slice(), |a, b| order.apply(E::compare(a, b)));
                    let elapsed = start.elapsed();

                    trace!(size, ?elapsed, "sample");
                    elapsed
                })
                .collect::<Vec<_>>();

            Record::from_samples(pattern, size, &samples)
        })
        .collect()
}

/// Writes [`Record::HEADER`] followed by one row per record.
pub fn write_report<W: io::Write>(mut out: W, records: &[Record]) -> io::Result<()> {
    writeln!(out, "{}", Record::HEADER)?;
    for record in records {
        writeln!(out, "{}", record.to_csv_row())?;
    }
    out.flush()
}

/// Records of one element type and order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub element: &'static str,
    pub order: Order,
    pub records: Vec<Record>,
}

impl Section {
    pub fn title(&self) -> String {
        format!("Results: {}, {}", self.element, self.order)
    }
}

fn measure_section<S: Sort, E: Element>(config: &MeasureConfig, order: Order) -> Section {
    let records = Pattern::ALL
        .iter()
        .flat_map(|&pattern| measure::<S, E>(config, pattern, order))
        .collect();

    Section {
        element: E::NAME,
        order,
        records,
    }
}

/// Measures every pattern in the section order `int, Ascending`, `float, Ascending`,
/// `int, Descending`, `float, Descending`.
pub fn measure_sections<S: Sort>(config: &MeasureConfig) -> Vec<Section> {
    Order::ALL
        .iter()
        .flat_map(|&order| {
            [
                measure_section::<S, i32>(config, order),
                measure_section::<S, f32>(config, order),
            ]
        })
        .collect()
}

/// Writes each section as its title, [`Record::HEADER`] and rows. Sections are separated by a
/// blank line.
pub fn write_sections<W: io::Write>(mut out: W, sections: &[Section]) -> io::Result<()> {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", section.title())?;
        write_report(&mut out, &section.records)?;
    }
    out.flush()
}

/// Report file names, in the order [`all_to_files`] writes them.
pub const REPORT_FILES: [&str; 4] = [
    "results_quicksort.csv",
    "results_heapsort.csv",
    "results_insertionsort_classic.csv",
    "results_insertionsort_binary.csv",
];

/// Measures every sort with its default size ladder and writes one sectioned report per sort
/// into `dir`.
pub fn all_to_files(dir: &Path, sample_size: usize) -> io::Result<Vec<PathBuf>> {
    all_to_files_with(
        dir,
        &MeasureConfig::quick(sample_size),
        &MeasureConfig::quadratic(sample_size),
    )
}

/// [`all_to_files`] with explicit configurations for quicksort and for the other sorts.
pub fn all_to_files_with(
    dir: &Path,
    quick_config: &MeasureConfig,
    config: &MeasureConfig,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let [quick_file, heap_file, classic_file, binary_file] = REPORT_FILES;
    let reports = [
        (quick_file, measure_sections::<quick::SortImpl>(quick_config)),
        (heap_file, measure_sections::<heap::SortImpl>(config)),
        (classic_file, measure_sections::<insertion_classic::SortImpl>(config)),
        (binary_file, measure_sections::<insertion_binary::SortImpl>(config)),
    ];

    reports
        .into_iter()
        .map(|(name, sections)| -> io::Result<PathBuf> {
            let path = dir.join(name);
            debug!(path = %path.display(), "writing report");
            write_sections(BufWriter::new(File::create(&path)?), &sections)?;
            Ok(path)
        })
        .collect()
}

/// Summary of the samples taken for one pattern and size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub pattern: Pattern,
    pub size: usize,
    pub samples: usize,
    pub avg: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl Record {
    pub const HEADER: &'static str = "KindOfRandom;ArraySize;SampleSize;AvgTime;MinTime;MaxTime;Unit";

    /// Returns `None` for an empty sample set.
    pub fn from_samples(pattern: Pattern, size: usize, samples: &[Duration]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let total: Duration = samples.iter().sum();
        let avg_nanos = total.as_nanos() / samples.len() as u128;
        let avg = Duration::from_nanos(u64::try_from(avg_nanos).unwrap_or(u64::MAX));

        Some(Self {
            pattern,
            size,
            samples: samples.len(),
            avg,
            min,
            max,
        })
    }

    /// All times of a row are printed in the unit of the slowest sample.
    pub fn unit(&self) -> TimeUnit {
        TimeUnit::for_duration(self.max)
    }

    pub fn to_csv_row(&self) -> String {
        let unit = self.unit();
        format!(
            "{};{};{};{:.4};{:.4};{:.4};{}",
            self.pattern.name(),
            self.size,
            self.samples,
            unit.scale(self.avg),
            unit.scale(self.min),
            unit.scale(self.max),
            unit,
        )
    }
}

/// Largest unit in which a duration is at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub fn for_duration(d: Duration) -> Self {
        if d >= Duration::from_secs(3600) {
            TimeUnit::Hours
        } else if d >= Duration::from_secs(60) {
            TimeUnit::Minutes
        } else if d >= Duration::from_secs(1) {
            TimeUnit::Seconds
        } else if d >= Duration::from_millis(1) {
            TimeUnit::Milliseconds
        } else if d >= Duration::from_micros(1) {
            TimeUnit::Microseconds
        } else {
            TimeUnit::Nanoseconds
        }
    }

    /// `d` expressed in this unit.
    pub fn scale(self, d: Duration) -> f64 {
        let nanos = d.as_nanos() as f64;
        match self {
            TimeUnit::Nanoseconds => nanos,
            TimeUnit::Microseconds => nanos / 1e3,
            TimeUnit::Milliseconds => nanos / 1e6,
            TimeUnit::Seconds => nanos / 1e9,
            TimeUnit::Minutes => nanos / 60e9,
            TimeUnit::Hours => nanos / 3600e9,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
