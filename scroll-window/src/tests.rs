use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 11
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_extent(&mut self, start: u64, end_exclusive: u64) -> f64 {
        self.gen_range_u64(start, end_exclusive) as f64
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

// Greatest `k` with sum(values[..k]) <= target.
fn expected_lower_bound(values: &[f64], target: f64) -> usize {
    let mut prefix = 0.0f64;
    let mut consumed = 0usize;
    for &v in values {
        if prefix + v <= target {
            prefix += v;
            consumed += 1;
        } else {
            break;
        }
    }
    consumed
}

fn scenario_state() -> WindowState {
    WindowState::new(WindowOptions::uniform(1000, 40.0, 400.0).with_buffer(10)).unwrap()
}

#[test]
fn uniform_scenario_commits_forward_past_buffer() {
    let mut w = scenario_state();
    assert_eq!(w.range(), WindowRange::new(0, 30));

    assert_eq!(w.on_sample(0.0), SampleOutcome::Held);
    assert_eq!(w.range().start, 0);

    let out = w.on_sample(2000.0);
    assert_eq!(
        out,
        SampleOutcome::Moved {
            from: WindowRange::new(0, 30)
        }
    );
    // resolved 50 >= 0 + 10, start = 50 - 10, end = 40 + ceil(400 / 40) + 2 * 10
    assert_eq!(w.range(), WindowRange::new(40, 70));
    assert_eq!(w.offset(), 2000.0);
    assert_eq!(w.direction(), ScrollDirection::Forward);
}

#[test]
fn heterogeneous_scenario_with_sparse_ledger() {
    let extents = [50.0; 5];
    assert_eq!(
        resolve_start(180.0, Regime::Heterogeneous, 1000, 50.0, &extents),
        3
    );
}

#[test]
fn non_positive_offsets_clamp_to_zero() {
    for regime in [Regime::Uniform, Regime::Heterogeneous] {
        for offset in [0.0, -0.0, -1.0, -1e9, f64::NAN, f64::NEG_INFINITY] {
            assert_eq!(resolve_start(offset, regime, 100, 10.0, &[5.0, 7.0]), 0);
        }
    }
}

#[test]
fn offsets_past_total_resolve_to_count() {
    assert_eq!(resolve_start(100.0, Regime::Uniform, 10, 10.0, &[]), 10);
    assert_eq!(resolve_start(1e12, Regime::Uniform, 10, 10.0, &[]), 10);
    assert_eq!(
        resolve_start(f64::INFINITY, Regime::Uniform, 10, 10.0, &[]),
        10
    );

    // total = 10 + 20
    assert_eq!(
        resolve_start(30.0, Regime::Heterogeneous, 2, 15.0, &[10.0, 20.0]),
        2
    );
    assert_eq!(
        resolve_start(29.9, Regime::Heterogeneous, 2, 15.0, &[10.0, 20.0]),
        1
    );
    // total = 3 known * 10 + 7 unknown * 5
    assert_eq!(
        resolve_start(65.0, Regime::Heterogeneous, 10, 5.0, &[10.0; 3]),
        10
    );
    assert_eq!(resolve_start(1.0, Regime::Heterogeneous, 0, 5.0, &[]), 0);
}

#[test]
fn boundary_offsets_belong_to_the_item_starting_there() {
    assert_eq!(resolve_start(40.0, Regime::Uniform, 100, 40.0, &[]), 1);
    assert_eq!(resolve_start(39.99, Regime::Uniform, 100, 40.0, &[]), 0);

    let extents = [50.0; 5];
    assert_eq!(
        resolve_start(150.0, Regime::Heterogeneous, 1000, 50.0, &extents),
        3
    );
    assert_eq!(
        resolve_start(50.0, Regime::Heterogeneous, 1000, 50.0, &extents),
        1
    );

    // A zero-extent item never owns an offset.
    let extents = [50.0, 0.0, 50.0];
    assert_eq!(
        resolve_start(50.0, Regime::Heterogeneous, 3, 50.0, &extents),
        2
    );
}

#[test]
fn unmeasured_tail_is_interpolated_with_the_average() {
    let extents = [50.0; 5];
    assert_eq!(
        resolve_start(300.0, Regime::Heterogeneous, 1000, 50.0, &extents),
        6
    );
    // 250 known, then 30 / 25 = 1.2 average items.
    assert_eq!(
        resolve_start(280.0, Regime::Heterogeneous, 1000, 25.0, &extents),
        6
    );
    // More known extents than items: only the first `count` are considered.
    assert_eq!(
        resolve_start(120.0, Regime::Heterogeneous, 2, 50.0, &extents),
        2
    );
}

#[test]
fn uniform_resolution_is_monotonic() {
    let mut rng = Lcg::new(7);
    for _ in 0..2000 {
        let extent = rng.gen_extent(1, 80);
        let count = rng.gen_range_usize(0, 500);
        let a = rng.gen_extent(0, 50_000) - 100.0;
        let b = a + rng.gen_extent(0, 5_000);
        let ra = resolve_start(a, Regime::Uniform, count, extent, &[]);
        let rb = resolve_start(b, Regime::Uniform, count, extent, &[]);
        assert!(ra <= rb, "a={a} b={b} ra={ra} rb={rb}");
    }
}

#[test]
fn extent_sums_lower_bound_matches_naive() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..200 {
        let n = rng.gen_range_usize(0, 64);
        let values: Vec<f64> = (0..n).map(|_| rng.gen_extent(0, 100)).collect();
        let sums = ExtentSums::from_values(values.clone());
        let total: f64 = values.iter().sum();
        assert_eq!(sums.total(), total);
        for _ in 0..32 {
            let target = rng.gen_extent(0, total as u64 + 20);
            assert_eq!(
                sums.lower_bound(target),
                expected_lower_bound(&values, target),
                "values={values:?} target={target}"
            );
        }
    }
}

#[test]
fn extent_sums_updates_keep_prefixes_consistent() {
    let mut rng = Lcg::new(99);
    let mut values: Vec<f64> = (0..50).map(|_| rng.gen_extent(1, 60)).collect();
    let mut sums = ExtentSums::from_values(values.clone());
    for _ in 0..500 {
        let i = rng.gen_range_usize(0, values.len());
        let v = rng.gen_extent(0, 120);
        values[i] = v;
        sums.set(i, v);

        let k = rng.gen_range_usize(0, values.len() + 1);
        let expected: f64 = values[..k].iter().sum();
        assert_eq!(sums.prefix(k), expected);
        assert_eq!(sums.get(i), Some(v));
    }
    sums.set(values.len(), 1.0);
    assert_eq!(sums.len(), values.len());
    assert_eq!(ExtentSums::filled(4, 2.5).total(), 10.0);
}

#[test]
fn slice_and_fenwick_sources_agree() {
    let mut rng = Lcg::new(1234);
    for _ in 0..200 {
        let n = rng.gen_range_usize(1, 80);
        let values: Vec<f64> = (0..n).map(|_| rng.gen_extent(1, 90)).collect();
        let sums = ExtentSums::from_values(values.clone());
        let total: f64 = values.iter().sum();
        for _ in 0..16 {
            let offset = rng.gen_extent(0, total as u64 + 50);
            let from_slice = resolve_start(offset, Regime::Heterogeneous, n, 30.0, &values);
            let from_sums = resolve_start_in(offset, Regime::Heterogeneous, n, 30.0, &sums);
            assert_eq!(from_slice, from_sums, "offset={offset}");
            assert_eq!(
                compute_style_offset(from_slice, Regime::Heterogeneous, 30.0, values.as_slice()),
                compute_style_offset(from_sums, Regime::Heterogeneous, 30.0, &sums),
            );
        }
    }
}

#[test]
fn end_covers_viewport_and_clamps_to_count() {
    assert_eq!(resolve_end(40, 400.0, 1000, 40.0, 10), 70);
    assert_eq!(resolve_end(990, 400.0, 1000, 40.0, 10), 1000);
    assert_eq!(resolve_end(0, 400.0, 0, 40.0, 10), 0);
    // 401 / 40 rounds up to 11.
    assert_eq!(window_length(401.0, 40.0, 0), 11);
    assert_eq!(window_length(400.0, 40.0, 0), 10);
    assert_eq!(window_length(10.0, 40.0, 3), 7);
}

#[test]
fn backward_scroll_inside_buffer_holds_the_window() {
    let mut w = scenario_state();
    w.on_sample(2000.0);
    assert_eq!(w.range(), WindowRange::new(40, 70));

    // resolved 45 is inside [40, 50)
    assert_eq!(w.on_sample(1800.0), SampleOutcome::Held);
    assert_eq!(w.range(), WindowRange::new(40, 70));
    assert_eq!(w.direction(), ScrollDirection::Backward);
    assert_eq!(w.offset(), 1800.0);

    // resolved 40 is still inside the band.
    assert_eq!(w.on_sample(1600.0), SampleOutcome::Held);

    // resolved 37 leaves it: start = 37 - 10
    assert!(w.on_sample(1480.0).moved());
    assert_eq!(w.range(), WindowRange::new(27, 57));
}

#[test]
fn forward_scroll_from_the_top_waits_for_the_buffer() {
    let mut w = scenario_state();
    // resolved 9 < 0 + 10
    assert_eq!(w.on_sample(360.0), SampleOutcome::Held);
    // resolved 10 commits, but start = 0 again
    assert_eq!(w.on_sample(400.0), SampleOutcome::Held);
    assert_eq!(w.on_sample(440.0), SampleOutcome::Moved {
        from: WindowRange::new(0, 30)
    });
    assert_eq!(w.range(), WindowRange::new(1, 31));
}

#[test]
fn repeated_identical_samples_do_not_move_twice() {
    let mut w = scenario_state();
    assert!(w.on_sample(2000.0).moved());
    assert_eq!(w.on_sample(2000.0), SampleOutcome::Held);
    assert_eq!(w.range(), WindowRange::new(40, 70));
}

#[test]
fn small_collections_render_everything() {
    for count in [0usize, 1, 5, 10] {
        let mut w =
            WindowState::new(WindowOptions::uniform(count, 40.0, 400.0).with_buffer(10)).unwrap();
        assert_eq!(w.range(), WindowRange::new(0, count));
        for offset in [0.0, 100.0, 1e6, 30.0, 0.0] {
            w.on_sample(offset);
            assert_eq!(w.range(), WindowRange::new(0, count));
        }
    }
}

#[test]
fn empty_collection_yields_empty_window() {
    let mut w = WindowState::new(WindowOptions::heterogeneous(0, 20.0, 100.0)).unwrap();
    assert!(w.range().is_empty());
    w.on_sample(500.0);
    assert_eq!(w.range(), WindowRange::new(0, 0));
    assert_eq!(w.content_extent(), 0.0);
    assert_eq!(w.style_offset(), 0.0);
    let items: [u8; 0] = [];
    assert!(current_window(&items, w.range()).is_empty());
}

#[test]
fn overscroll_clamps_window_to_the_tail() {
    let mut w = scenario_state();
    assert!(w.on_sample(1e7).moved());
    assert_eq!(w.range(), WindowRange::new(990, 1000));
    assert_eq!(w.range().len(), 10);

    // Coming back within the band keeps the tail window.
    assert_eq!(w.on_sample(39_700.0), SampleOutcome::Held);
}

#[test]
fn invalid_configuration_fails_fast() {
    for extent in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = WindowState::new(WindowOptions::uniform(10, extent, 100.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfiguration(ConfigError::NonPositiveExtent(_))
        ));
    }
    let err = WindowState::new(WindowOptions::heterogeneous(10, 10.0, 0.0)).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::NonPositiveViewport(0.0))
    );
}

#[test]
fn malformed_samples_keep_previous_state() {
    let mut w = scenario_state();
    w.on_sample(2000.0);
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(w.on_sample(bad), SampleOutcome::Ignored);
        assert_eq!(w.range(), WindowRange::new(40, 70));
        assert_eq!(w.offset(), 2000.0);
        assert_eq!(w.direction(), ScrollDirection::Forward);
    }
}

#[test]
fn negative_samples_clamp_to_zero() {
    let mut w = scenario_state();
    w.on_sample(2000.0);
    assert!(w.on_sample(-50.0).moved());
    assert_eq!(w.offset(), 0.0);
    assert_eq!(w.direction(), ScrollDirection::Backward);
    assert_eq!(w.range(), WindowRange::new(0, 30));
}

#[test]
fn ledger_rejects_bad_measurements_and_keeps_previous() {
    let mut ledger = SizeLedger::<&'static str>::new();
    assert_eq!(ledger.set("a", 12.0), Ok(None));
    assert_eq!(ledger.set("a", 14.0), Ok(Some(12.0)));
    for bad in [-1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            ledger.set("a", bad),
            Err(Error::InvalidMeasurement { .. })
        ));
    }
    assert_eq!(ledger.get(&"a"), Some(14.0));
    assert_eq!(ledger.set("zero", 0.0), Ok(None));

    assert_eq!(ledger.delete(&"missing"), None);
    assert_eq!(ledger.delete(&"zero"), Some(0.0));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn ledger_orders_extents_with_fallback() {
    let mut ledger = SizeLedger::<u64>::new();
    ledger.set(2, 30.0).unwrap();
    ledger.set(4, 10.0).unwrap();
    assert_eq!(
        ledger.ordered_extents([1u64, 2, 3, 4], 20.0),
        alloc::vec![20.0, 30.0, 20.0, 10.0]
    );
    assert_eq!(ledger.extent_or(&9, 7.0), 7.0);
    assert!(ledger.contains(&4));
}

#[test]
fn ledger_import_is_all_or_nothing() {
    let mut ledger = SizeLedger::<u64>::new();
    ledger.set(1, 5.0).unwrap();
    let err = ledger.import([(2, 3.0), (3, -3.0)]).unwrap_err();
    assert_eq!(err, Error::InvalidMeasurement { extent: -3.0 });
    assert_eq!(ledger.export(), alloc::vec![(1, 5.0)]);

    assert_eq!(ledger.import([(2, 3.0), (3, 4.0)]), Ok(2));
    assert!(!ledger.contains(&1));
}

#[test]
fn heterogeneous_measurements_shift_offsets() {
    let mut w = WindowState::new(WindowOptions::heterogeneous(100, 50.0, 200.0).with_buffer(2))
        .unwrap();
    // ceil(200 / 50) + 2 * 2
    assert_eq!(w.range(), WindowRange::new(0, 8));
    assert_eq!(w.content_extent(), 5000.0);

    w.report(0, 100.0).unwrap();
    assert_eq!(w.item_extent(0), Some(100.0));
    assert_eq!(w.content_extent(), 5050.0);
    assert_eq!(w.ledger().len(), 1);

    // 100 + 6 * 50 = 400, so offset 400 is owned by item 7.
    assert!(w.on_sample(400.0).moved());
    assert_eq!(w.range(), WindowRange::new(5, 13));
    assert_eq!(w.style_offset(), 300.0);
    assert_eq!(w.layout().container_offset, 300.0);

    assert_eq!(w.unreport(&0), Some(100.0));
    assert_eq!(w.item_extent(0), Some(50.0));
    assert_eq!(w.style_offset(), 250.0);
    assert_eq!(w.unreport(&0), None);
}

#[test]
fn measurements_for_unrendered_items_apply_once_rendered() {
    let mut w = WindowState::new(WindowOptions::heterogeneous(1000, 50.0, 200.0).with_buffer(2))
        .unwrap();
    w.report(500, 80.0).unwrap();
    assert_eq!(w.ledger().get(&500), Some(80.0));
    assert_eq!(w.item_extent(500), Some(50.0));

    assert!(w.on_sample(25_000.0).moved());
    assert!(w.range().contains(500));
    assert_eq!(w.item_extent(500), Some(80.0));
    assert_eq!(w.content_extent(), 50_030.0);
}

#[test]
fn report_at_uses_the_given_index() {
    let mut w = WindowState::new(
        WindowOptions::heterogeneous(10, 10.0, 30.0)
            .with_buffer(1)
            .with_item_key(|i| alloc::format!("row-{i}")),
    )
    .unwrap();
    w.report_at(9, "row-9".into(), 25.0).unwrap();
    assert_eq!(w.item_extent(9), Some(25.0));
    assert_eq!(w.content_extent(), 115.0);
    // Out-of-range index: recorded in the ledger only.
    w.report_at(42, "row-42".into(), 25.0).unwrap();
    assert_eq!(w.content_extent(), 115.0);
    assert_eq!(w.ledger().len(), 2);
}

#[test]
fn rejected_report_keeps_previous_entry() {
    let mut w = WindowState::new(WindowOptions::heterogeneous(20, 10.0, 30.0)).unwrap();
    w.report(3, 12.0).unwrap();
    let err = w.report(3, f64::NAN).unwrap_err();
    assert!(matches!(err, Error::InvalidMeasurement { .. }));
    assert_eq!(w.ledger().get(&3), Some(12.0));
    assert_eq!(w.item_extent(3), Some(12.0));
}

#[test]
fn uniform_regime_ignores_measurements_for_layout() {
    let mut w = scenario_state();
    w.report(0, 400.0).unwrap();
    assert_eq!(w.ledger().get(&0), Some(400.0));
    assert_eq!(w.item_extent(0), Some(40.0));
    assert_eq!(w.content_extent(), 40_000.0);
    assert_eq!(w.rendered_extents(), alloc::vec![40.0; 30]);
}

#[test]
fn rendered_extents_follow_the_ledger() {
    let mut w = WindowState::new(WindowOptions::heterogeneous(10, 10.0, 20.0).with_buffer(1))
        .unwrap();
    w.report(1, 13.0).unwrap();
    assert_eq!(w.range(), WindowRange::new(0, 4));
    assert_eq!(w.rendered_extents(), alloc::vec![10.0, 13.0, 10.0, 10.0]);
}

#[test]
fn set_count_recomputes_from_current_offset() {
    let mut w = scenario_state();
    w.on_sample(2000.0);
    w.set_count(20);
    assert_eq!(w.range(), WindowRange::new(10, 20));
    w.set_count(5);
    assert_eq!(w.range(), WindowRange::new(0, 5));
    w.set_count(1000);
    assert_eq!(w.range(), WindowRange::new(40, 70));
}

#[test]
fn set_count_keeps_measurements_by_identity() {
    let mut w = WindowState::new(WindowOptions::heterogeneous(10, 10.0, 20.0)).unwrap();
    w.report(2, 40.0).unwrap();
    w.set_count(12);
    assert_eq!(w.item_extent(2), Some(40.0));
    assert_eq!(w.content_extent(), 150.0);
}

#[test]
fn viewport_resize_extends_the_end() {
    let mut w = scenario_state();
    w.on_sample(2000.0);
    w.set_viewport_extent(800.0).unwrap();
    assert_eq!(w.range(), WindowRange::new(40, 80));

    let err = w.set_viewport_extent(-1.0).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::NonPositiveViewport(-1.0))
    );
    assert_eq!(w.range(), WindowRange::new(40, 80));
    assert_eq!(w.layout().viewport_extent, 800.0);
}

#[test]
fn set_options_rejects_invalid_and_keeps_state() {
    let mut w = scenario_state();
    w.on_sample(2000.0);
    assert!(w.set_options(WindowOptions::uniform(1000, 0.0, 400.0)).is_err());
    assert_eq!(w.range(), WindowRange::new(40, 70));

    w.set_options(WindowOptions::uniform(1000, 20.0, 400.0).with_buffer(5))
        .unwrap();
    // 2000 / 20 = 100, start = 95, end = 95 + 20 + 10
    assert_eq!(w.range(), WindowRange::new(95, 125));
}

#[test]
fn measurements_round_trip_through_export() {
    let mut a = WindowState::new(WindowOptions::heterogeneous(50, 10.0, 40.0)).unwrap();
    a.report(1, 11.0).unwrap();
    a.report(2, 12.0).unwrap();
    let mut saved = a.export_measurements();
    saved.sort_by_key(|(k, _)| *k);

    let mut b = WindowState::new(WindowOptions::heterogeneous(50, 10.0, 40.0)).unwrap();
    assert_eq!(b.import_measurements(saved), Ok(2));
    assert_eq!(b.content_extent(), a.content_extent());

    b.reset_measurements();
    assert!(b.ledger().is_empty());
    assert_eq!(b.content_extent(), 500.0);
}

#[test]
fn current_window_slices_and_clamps() {
    let items: Vec<u32> = (0..100).collect();
    assert_eq!(
        current_window(&items, WindowRange::new(10, 13)),
        &[10, 11, 12]
    );
    assert_eq!(current_window(&items, WindowRange::new(98, 120)), &[98, 99]);
    assert!(current_window(&items, WindowRange::new(150, 160)).is_empty());
}

#[test]
fn axis_selects_matching_field() {
    assert_eq!(ScrollAxis::Primary.select(1, 2), 1);
    assert_eq!(ScrollAxis::Secondary.select(1, 2), 2);
    assert_eq!(ScrollAxis::default(), ScrollAxis::Primary);
}

#[test]
fn fuzz_window_invariants_uniform() {
    let mut rng = Lcg::new(0xA11CE);
    for _case in 0..200 {
        let count = rng.gen_range_usize(0, 300);
        let extent = rng.gen_extent(1, 50);
        let viewport = rng.gen_extent(1, 500);
        let buffer = rng.gen_range_usize(0, 15);
        let mut w = WindowState::new(
            WindowOptions::uniform(count, extent, viewport).with_buffer(buffer),
        )
        .unwrap();
        let total = count as f64 * extent;
        let visible = window_length(viewport, extent, 0);
        let mut offset = 0.0f64;

        for _step in 0..100 {
            offset = if rng.gen_bool() {
                rng.gen_extent(0, total as u64 + 200)
            } else {
                let step = rng.gen_extent(0, 3 * extent as u64 + 1);
                if rng.gen_bool() {
                    offset + step
                } else {
                    (offset - step).max(0.0)
                }
            };
            w.on_sample(offset);
            let r = w.range();

            assert!(r.start <= r.end && r.end <= count, "range={r:?} count={count}");
            assert!(r.len() >= count.min(buffer), "range={r:?} buffer={buffer}");
            if count <= buffer {
                assert_eq!(r, WindowRange::new(0, count));
                continue;
            }

            let len = window_length(viewport, extent, buffer);
            if count - r.start >= len {
                assert!(r.len() as f64 * extent >= viewport, "range={r:?}");
            }

            let first = resolve_start(offset, Regime::Uniform, count, extent, &[]);
            let last = first.saturating_add(visible).min(count);
            assert!(
                first >= r.start && last <= r.end,
                "visible {first}..{last} outside {r:?} (offset={offset})"
            );
        }
    }
}
