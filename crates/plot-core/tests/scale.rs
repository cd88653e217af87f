// File: crates/plot-core/tests/scale.rs
// Purpose: Validate band tiling, linear interpolation, and ordinal palette cycling.

use plot_core::{BandScale, ChartError, LinearScale, OrdinalScale};

const EPS: f32 = 1e-3;

#[test]
fn band_positions_increase_and_tile_the_range() {
    let band = BandScale::new(["A", "B", "C", "D"], 60.0, 550.0, 0.5);
    let n = 4.0_f32;
    let p = 0.5_f32;
    let range = 550.0 - 60.0;
    let step = range / (n + p);

    assert!((band.step() - step).abs() < EPS);
    assert!((band.bandwidth() - step * (1.0 - p)).abs() < EPS);

    let positions: Vec<f32> = band
        .domain()
        .iter()
        .map(|c| band.position(c).unwrap())
        .collect();
    for w in positions.windows(2) {
        assert!(w[1] > w[0], "positions must increase in domain order");
        assert!((w[1] - w[0] - step).abs() < EPS, "slots are one step apart");
    }

    // Outer padding on each side, slots and inner padding in between:
    // the whole range is tiled exactly.
    assert!((positions[0] - (60.0 + p * step)).abs() < EPS);
    let last_end = positions[3] + band.bandwidth();
    assert!((550.0 - last_end - p * step).abs() < EPS);
}

#[test]
fn band_dedupes_preserving_first_seen_order() {
    let band = BandScale::new(["X", "Y", "X", "Z", "Y"], 0.0, 90.0, 0.0);
    assert_eq!(band.domain(), ["X", "Y", "Z"]);
    // Zero padding: three slots of 30 px.
    assert!((band.bandwidth() - 30.0).abs() < EPS);
    assert!((band.position("Z").unwrap() - 60.0).abs() < EPS);
}

#[test]
fn band_rejects_unknown_category() {
    let band = BandScale::new(["A", "B"], 0.0, 100.0, 0.25);
    assert_eq!(
        band.position("C"),
        Err(ChartError::Domain { category: "C".into() })
    );
}

#[test]
fn linear_hits_range_endpoints_and_is_monotonic() {
    // Inverted y range: data-space up is pixel-space down.
    let y = LinearScale::new(0.0, 1000.0, 350.0, 50.0);
    assert!((y.position(0.0) - 350.0).abs() < EPS);
    assert!((y.position(1000.0) - 50.0).abs() < EPS);
    assert!((y.position(500.0) - 200.0).abs() < EPS);

    let mut prev = y.position(0.0);
    for v in [100.0, 250.0, 400.0, 999.0] {
        let px = y.position(v);
        assert!(px < prev, "larger values map to smaller y pixels");
        prev = px;
    }
}

#[test]
fn linear_degenerate_domain_maps_to_range_end() {
    let y = LinearScale::new(7.0, 7.0, 350.0, 50.0);
    assert!((y.position(7.0) - 50.0).abs() < EPS);
    assert!((y.position(123.0) - 50.0).abs() < EPS);
}

#[test]
fn ordinal_cycles_palette() {
    static PALETTE: [&str; 2] = ["red", "blue"];
    let color = OrdinalScale::new(["a", "b", "c", "a"], &PALETTE);
    assert_eq!(color.domain(), ["a", "b", "c"]);
    assert_eq!(color.color("a").unwrap(), "red");
    assert_eq!(color.color("b").unwrap(), "blue");
    assert_eq!(color.color("c").unwrap(), "red");
    assert_eq!(
        color.color("d"),
        Err(ChartError::Domain { category: "d".into() })
    );
}
