//! Geometry tests - landing math from power and angle

use hoop_duel::core::geometry::{landing_percent, resolve};
use hoop_duel::types::{ANGLE_MAX, ANGLE_MIN, POWER_MAX};

#[test]
fn test_landing_percent_centers() {
    let (x, y) = landing_percent(50.0, 0.0);
    assert!((x - 50.0).abs() < 1e-4);
    assert!((y - 50.0).abs() < 1e-4);
}

#[test]
fn test_landing_percent_extremes() {
    assert_eq!(landing_percent(POWER_MAX, ANGLE_MIN), (0.0, 0.0));
    let (x, y) = landing_percent(0.0, ANGLE_MAX);
    assert!((x - 100.0).abs() < 1e-4);
    assert!((y - 100.0).abs() < 1e-4);
}

#[test]
fn test_in_range_standard_throw_lands_exactly_one_cell() {
    for power in 0..=100 {
        for angle in -45..=45 {
            let cells = resolve(power as f32, angle as f32, false);
            assert_eq!(
                cells.len(),
                1,
                "power {} angle {} should land one cell",
                power,
                angle
            );
            assert!(cells[0] < 16);
        }
    }
}

#[test]
fn test_boundary_values_clamp_onto_edge_cells() {
    // Max angle stays in column 3; zero power stays in row 3.
    assert_eq!(resolve(0.0, ANGLE_MAX, false).as_slice(), &[15]);
    assert_eq!(resolve(POWER_MAX, ANGLE_MIN, false).as_slice(), &[0]);
    assert_eq!(resolve(POWER_MAX, ANGLE_MAX, false).as_slice(), &[3]);
    assert_eq!(resolve(0.0, ANGLE_MIN, false).as_slice(), &[12]);
}

#[test]
fn test_out_of_range_throw_misses() {
    assert!(resolve(120.0, 0.0, false).is_empty());
    assert!(resolve(-1.0, 0.0, false).is_empty());
    assert!(resolve(50.0, 60.0, false).is_empty());
    assert!(resolve(50.0, -60.0, false).is_empty());
    assert!(resolve(f32::NAN, 0.0, false).is_empty());
}

#[test]
fn test_split_places_column_neighbors_only() {
    // Middle of the grid: both neighbors land.
    let cells = resolve(50.0, 0.0, true);
    assert_eq!(cells.as_slice(), &[9, 11]);

    // Column 0: only the right neighbor exists.
    let cells = resolve(50.0, ANGLE_MIN, true);
    assert_eq!(cells.as_slice(), &[9]);

    // Column 3: only the left neighbor exists.
    let cells = resolve(50.0, ANGLE_MAX, true);
    assert_eq!(cells.as_slice(), &[10]);
}

#[test]
fn test_split_neighbors_stay_in_row() {
    for power in [10.0_f32, 40.0, 60.0, 90.0] {
        for angle in [-40.0_f32, -10.0, 10.0, 40.0] {
            let nominal = resolve(power, angle, false)[0];
            let row = nominal / 4;
            for &cell in resolve(power, angle, true).iter() {
                assert_eq!(cell / 4, row);
                assert_ne!(cell, nominal);
            }
        }
    }
}
