use std::cmp::Ordering;
use std::env;
use std::fs;
use std::time::Duration;

use sort_test_tools::patterns::Pattern;
use sort_test_tools::Sort;
use sort_toolkit_rs::measure::{
    all_to_files_with, measure, measure_sections, write_report, write_sections, Element,
    MeasureConfig, Order, Record, Section, TimeUnit, REPORT_FILES,
};
use sort_toolkit_rs::sort::{heap, insertion_binary, quick};

fn tiny_config() -> MeasureConfig {
    MeasureConfig {
        sizes: vec![4, 16],
        sample_size: 2,
        value_range: 0..=100,
    }
}

#[test]
fn default_config() {
    let config = MeasureConfig::default();
    assert_eq!(config.sizes, [500, 1000, 1500, 2000, 2500, 3000, 3500]);
    assert_eq!(config.sample_size, 25);
    assert_eq!(config.value_range, 0..=1000);

    assert_eq!(MeasureConfig::quadratic(25), config);
}

#[test]
fn quick_config() {
    let config = MeasureConfig::quick(10);
    assert_eq!(config.sizes, [1000, 2000, 3000, 4000, 5000, 6000, 7000]);
    assert_eq!(config.sample_size, 10);
    assert_eq!(config.value_range, 0..=1000);
}

#[test]
fn order_comparator() {
    assert_eq!(Order::Ascending.apply(Ordering::Less), Ordering::Less);
    assert_eq!(Order::Descending.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(Order::Descending.apply(Ordering::Equal), Ordering::Equal);
    assert_eq!(Order::Descending.to_string(), "Descending");

    let mut ints = Pattern::PureRandom.generate(300, 0..=1000);
    quick::SortImpl::sort_by(&mut ints, |a, b| Order::Descending.apply(i32::compare(a, b)));
    assert!(ints.windows(2).all(|w| w[0] >= w[1]));

    let mut floats = <f32 as Element>::generate(Pattern::OneThirdAscending, 300, &(0..=1000));
    assert!(floats.iter().all(|x| (0.0..=1000.0).contains(x)));
    heap::SortImpl::sort_by(&mut floats, |a, b| Order::Descending.apply(f32::compare(a, b)));
    assert!(floats.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn descending_rows() {
    let config = tiny_config();

    for order in Order::ALL {
        let pattern = Pattern::SortedAscending;
        let ints = measure::<insertion_binary::SortImpl, i32>(&config, pattern, order);
        let floats = measure::<insertion_binary::SortImpl, f32>(&config, pattern, order);

        for records in [ints, floats] {
            let sizes: Vec<_> = records.iter().map(|r| r.size).collect();
            assert_eq!(sizes, [4, 16], "{order}");
            assert!(records.iter().all(|r| r.samples == 2 && r.pattern == pattern));
        }
    }
}

#[test]
fn section_order() {
    let sections = measure_sections::<heap::SortImpl>(&tiny_config());

    let titles: Vec<_> = sections.iter().map(Section::title).collect();
    assert_eq!(
        titles,
        [
            "Results: int, Ascending",
            "Results: float, Ascending",
            "Results: int, Descending",
            "Results: float, Descending",
        ]
    );

    // Patterns outer, sizes inner.
    let expected: Vec<_> = Pattern::ALL
        .iter()
        .flat_map(|&p| [(p, 4), (p, 16)])
        .collect();
    for section in &sections {
        let rows: Vec<_> = section.records.iter().map(|r| (r.pattern, r.size)).collect();
        assert_eq!(rows, expected, "{}", section.title());
    }
}

#[test]
fn sections_layout() {
    let row = |pattern, size, nanos| {
        Record::from_samples(pattern, size, &[Duration::from_nanos(nanos)]).unwrap()
    };
    let sections = [
        Section {
            element: "int",
            order: Order::Ascending,
            records: vec![row(Pattern::PureRandom, 500, 700)],
        },
        Section {
            element: "float",
            order: Order::Descending,
            records: vec![
                row(Pattern::SortedDescending, 500, 900),
                row(Pattern::SortedDescending, 1000, 2_000),
            ],
        },
    ];

    let mut out = Vec::new();
    write_sections(&mut out, &sections).unwrap();

    let report = String::from_utf8(out).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "Results: int, Ascending",
            "KindOfRandom;ArraySize;SampleSize;AvgTime;MinTime;MaxTime;Unit",
            "PureRandom;500;1;700.0000;700.0000;700.0000;ns",
            "",
            "Results: float, Descending",
            "KindOfRandom;ArraySize;SampleSize;AvgTime;MinTime;MaxTime;Unit",
            "SortedDesc;500;1;900.0000;900.0000;900.0000;ns",
            "SortedDesc;1000;1;2.0000;2.0000;2.0000;us",
        ]
    );
}

#[test]
fn report_files() {
    let dir = env::temp_dir().join(format!("sort_toolkit_rs_reports_{}", std::process::id()));
    let config = MeasureConfig {
        sizes: vec![8],
        sample_size: 1,
        value_range: 0..=50,
    };

    let paths = all_to_files_with(&dir, &config, &config).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, REPORT_FILES);

    for path in &paths {
        let report = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = report.lines().collect();

        // 4 sections of title, header and one row per pattern, blank lines in between.
        assert_eq!(lines.len(), 4 * (2 + Pattern::ALL.len()) + 3);
        assert_eq!(lines[0], "Results: int, Ascending");
        assert_eq!(lines[1], Record::HEADER);
        assert!(lines[2].starts_with("PureRandom;8;1;"));
        assert!(lines.contains(&"Results: float, Descending"));
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn one_record_per_size() {
    let config = MeasureConfig {
        sizes: vec![0, 10, 100],
        sample_size: 3,
        value_range: 0..=10,
    };

    for pattern in Pattern::ALL {
        let records = measure::<quick::SortImpl, i32>(&config, pattern, Order::Ascending);
        assert_eq!(records.len(), 3);

        for (record, size) in records.iter().zip(&config.sizes) {
            assert_eq!(record.pattern, pattern);
            assert_eq!(record.size, *size);
            assert_eq!(record.samples, 3);
            assert!(record.min <= record.avg && record.avg <= record.max);
        }
    }
}

#[test]
fn no_samples_no_records() {
    let config = MeasureConfig {
        sizes: vec![10],
        sample_size: 0,
        ..MeasureConfig::default()
    };

    let records = measure::<heap::SortImpl, f32>(&config, Pattern::PureRandom, Order::Descending);
    assert!(records.is_empty());
}

#[test]
fn record_statistics() {
    let samples = [
        Duration::from_micros(1_500),
        Duration::from_micros(1_000),
        Duration::from_micros(3_500),
    ];

    let record = Record::from_samples(Pattern::OneThirdDescending, 10_000, &samples).unwrap();
    assert_eq!(record.min, Duration::from_micros(1_000));
    assert_eq!(record.max, Duration::from_micros(3_500));
    assert_eq!(record.avg, Duration::from_micros(2_000));
    assert_eq!(record.unit(), TimeUnit::Milliseconds);
    assert_eq!(
        record.to_csv_row(),
        "OneThirdDesc;10000;3;2.0000;1.0000;3.5000;ms"
    );

    assert!(Record::from_samples(Pattern::PureRandom, 1, &[]).is_none());
}

#[test]
fn unit_follows_slowest_sample() {
    let samples = [Duration::from_nanos(500), Duration::from_millis(2_500)];
    let record = Record::from_samples(Pattern::SortedAscending, 20_000, &samples).unwrap();

    assert_eq!(record.unit(), TimeUnit::Seconds);
    assert_eq!(
        record.to_csv_row(),
        "SortedAsc;20000;2;1.2500;0.0000;2.5000;s"
    );
}

#[test]
fn time_units() {
    assert_eq!(TimeUnit::for_duration(Duration::ZERO), TimeUnit::Nanoseconds);
    assert_eq!(TimeUnit::for_duration(Duration::from_nanos(999)), TimeUnit::Nanoseconds);
    assert_eq!(TimeUnit::for_duration(Duration::from_micros(1)), TimeUnit::Microseconds);
    assert_eq!(TimeUnit::for_duration(Duration::from_secs(59)), TimeUnit::Seconds);
    assert_eq!(TimeUnit::for_duration(Duration::from_secs(60)), TimeUnit::Minutes);
    assert_eq!(TimeUnit::for_duration(Duration::from_secs(7200)), TimeUnit::Hours);

    assert_eq!(TimeUnit::Minutes.scale(Duration::from_secs(90)), 1.5);
    assert_eq!(TimeUnit::Microseconds.to_string(), "us");
}

#[test]
fn report_layout() {
    let records = [
        Record::from_samples(Pattern::PureRandom, 10, &[Duration::from_nanos(250)]).unwrap(),
        Record::from_samples(Pattern::TwoThirdsAscending, 20, &[Duration::from_micros(3)]).unwrap(),
    ];

    let mut out = Vec::new();
    write_report(&mut out, &records).unwrap();

    let report = String::from_utf8(out).unwrap();
    let lines: Vec<_> = report.lines().collect();
    assert_eq!(
        lines,
        [
            "KindOfRandom;ArraySize;SampleSize;AvgTime;MinTime;MaxTime;Unit",
            "PureRandom;10;1;250.0000;250.0000;250.0000;ns",
            "TwoThirdsAsc;20;1;3.0000;3.0000;3.0000;us",
        ]
    );
}

#[test]
fn sort_names() {
    assert_eq!(quick::SortImpl::name(), "quick_middle_pivot_unstable");
    assert_eq!(heap::SortImpl::name(), "heap_unstable");
}
