use sort_test_tools::patterns::{self, Pattern, DEFAULT_VALUE_RANGE};

fn is_sorted_by(v: &[i32], ok: impl Fn(i32, i32) -> bool) -> bool {
    v.windows(2).all(|w| ok(w[0], w[1]))
}

#[test]
fn generator_shapes() {
    let len = 300;

    for pattern in Pattern::ALL {
        let v = pattern.generate(len, DEFAULT_VALUE_RANGE);
        assert_eq!(v.len(), len, "{}", pattern.name());
        assert!(v.iter().all(|x| DEFAULT_VALUE_RANGE.contains(x)));

        let (prefix, descending) = match pattern {
            Pattern::PureRandom => continue,
            Pattern::SortedAscending => (len, false),
            Pattern::SortedDescending => (len, true),
            Pattern::OneThirdAscending => (100, false),
            Pattern::OneThirdDescending => (100, true),
            Pattern::TwoThirdsAscending => (200, false),
            Pattern::TwoThirdsDescending => (200, true),
        };

        let ordered = if descending {
            is_sorted_by(&v[..prefix], |a, b| a >= b)
        } else {
            is_sorted_by(&v[..prefix], |a, b| a <= b)
        };
        assert!(ordered, "{}", pattern.name());
    }
}

#[test]
fn float_generator_shapes() {
    let len = 300;

    for pattern in Pattern::ALL {
        let v = pattern.generate_f32(len, 0.0..=1000.0);
        assert_eq!(v.len(), len, "{}", pattern.name());
        assert!(v.iter().all(|x| (0.0..=1000.0).contains(x)));

        let (prefix, descending) = match pattern {
            Pattern::PureRandom => continue,
            Pattern::SortedAscending => (len, false),
            Pattern::SortedDescending => (len, true),
            Pattern::OneThirdAscending => (100, false),
            Pattern::OneThirdDescending => (100, true),
            Pattern::TwoThirdsAscending => (200, false),
            Pattern::TwoThirdsDescending => (200, true),
        };

        let ordered = if descending {
            v[..prefix].windows(2).all(|w| w[0] >= w[1])
        } else {
            v[..prefix].windows(2).all(|w| w[0] <= w[1])
        };
        assert!(ordered, "{}", pattern.name());
    }

    assert_eq!(
        Pattern::PureRandom.generate_f32(50, 0.0..=1.0),
        Pattern::PureRandom.generate_f32(50, 0.0..=1.0)
    );
}

#[test]
fn generator_respects_range() {
    let v = Pattern::PureRandom.generate(500, -5..=5);
    assert!(v.iter().all(|x| (-5..=5).contains(x)));

    assert!(Pattern::SortedDescending.generate(0, 0..=1).is_empty());
}

#[test]
fn report_names() {
    let names: Vec<_> = Pattern::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        [
            "PureRandom",
            "SortedAsc",
            "SortedDesc",
            "OneThirdAsc",
            "OneThirdDesc",
            "TwoThirdsAsc",
            "TwoThirdsDesc"
        ]
    );
}

#[test]
fn battery_patterns() {
    assert_eq!(patterns::ascending(4), [0, 1, 2, 3]);
    assert_eq!(patterns::descending(4), [3, 2, 1, 0]);
    assert!(patterns::all_equal(10).windows(2).all(|w| w[0] == w[1]));

    let organ = patterns::pipe_organ(10);
    assert_eq!(organ.len(), 10);

    let seed = patterns::random_init_seed();
    assert_eq!(seed, patterns::random_init_seed());
    assert_eq!(patterns::random(50), patterns::random(50));
}
