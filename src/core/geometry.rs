//! Geometry resolver - maps a (power, angle) pair to target grid cells
//!
//! Pure functions of their inputs, no side effects. The angle maps linearly
//! to a horizontal percentage, power (inverted) to a vertical percentage,
//! and both quantize onto the 4x4 grid. A split throw targets the two
//! columns adjacent to the nominal one, never the nominal column itself.

use arrayvec::ArrayVec;

use crate::types::{ANGLE_MAX, ANGLE_MIN, GRID_SIZE, POWER_MAX};

/// Horizontal/vertical landing position as percentages of the grid extent.
pub fn landing_percent(power: f32, angle: f32) -> (f32, f32) {
    let x_percent = (angle - ANGLE_MIN) / (ANGLE_MAX - ANGLE_MIN) * 100.0;
    let y_percent = 100.0 - power;
    (x_percent, y_percent)
}

/// Resolve a throw into 0..2 target cell indices.
///
/// Inputs outside [0,100] x [-45,45] (including NaN) resolve to no cells,
/// a miss. In-range inputs quantize to a cell with boundary values clamped
/// onto the edge row/column, so a standard throw always lands exactly one
/// cell. A split throw lands on the neighbors of the nominal column and can
/// yield one cell at a grid edge.
pub fn resolve(power: f32, angle: f32, split: bool) -> ArrayVec<usize, 2> {
    let mut cells = ArrayVec::new();

    if !(0.0..=POWER_MAX).contains(&power) || !(ANGLE_MIN..=ANGLE_MAX).contains(&angle) {
        return cells;
    }

    let (x_percent, y_percent) = landing_percent(power, angle);
    let col = (((x_percent / 25.0).floor()) as usize).min(GRID_SIZE - 1);
    let row = (((y_percent / 25.0).floor()) as usize).min(GRID_SIZE - 1);

    if split {
        if col >= 1 {
            cells.push(row * GRID_SIZE + col - 1);
        }
        if col + 1 < GRID_SIZE {
            cells.push(row * GRID_SIZE + col + 1);
        }
    } else {
        cells.push(row * GRID_SIZE + col);
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_throw_always_lands_one_cell_in_bounds() {
        for power in 0..=100 {
            for angle in -45..=45 {
                let cells = resolve(power as f32, angle as f32, false);
                assert_eq!(cells.len(), 1, "power={power} angle={angle}");
                assert!(cells[0] < GRID_SIZE * GRID_SIZE);
            }
        }
    }

    #[test]
    fn test_center_aim_mid_power() {
        // angle 0 -> x 50% -> col 2; power 50 -> y 50% -> row 2.
        let cells = resolve(50.0, 0.0, false);
        assert_eq!(cells.as_slice(), &[10]);
    }

    #[test]
    fn test_extreme_left_full_power_hits_top_left() {
        // angle -45 -> x 0% -> col 0; power 100 -> y 0% -> row 0.
        let cells = resolve(100.0, -45.0, false);
        assert_eq!(cells.as_slice(), &[0]);
    }

    #[test]
    fn test_boundary_values_clamp_onto_edge_cells() {
        // angle 45 -> x 100% clamps to col 3; power 0 -> y 100% clamps to row 3.
        let cells = resolve(0.0, 45.0, false);
        assert_eq!(cells.as_slice(), &[15]);
    }

    #[test]
    fn test_out_of_range_inputs_miss() {
        assert!(resolve(101.0, 0.0, false).is_empty());
        assert!(resolve(-1.0, 0.0, false).is_empty());
        assert!(resolve(50.0, 46.0, false).is_empty());
        assert!(resolve(50.0, -46.0, false).is_empty());
        assert!(resolve(f32::NAN, 0.0, false).is_empty());
        assert!(resolve(50.0, f32::NAN, true).is_empty());
    }

    #[test]
    fn test_split_targets_neighbors_not_center() {
        // angle 0 -> nominal col 2: split lands cols 1 and 3.
        let cells = resolve(50.0, 0.0, true);
        assert_eq!(cells.as_slice(), &[9, 11]);
    }

    #[test]
    fn test_split_at_right_edge_yields_one_cell() {
        // angle 45 -> nominal col 3: only col 2 exists.
        let cells = resolve(50.0, 45.0, true);
        assert_eq!(cells.as_slice(), &[10]);
    }

    #[test]
    fn test_split_at_left_edge_yields_one_cell() {
        // angle -45 -> nominal col 0: only col 1 exists.
        let cells = resolve(50.0, -45.0, true);
        assert_eq!(cells.as_slice(), &[9]);
    }

    #[test]
    fn test_split_never_returns_nominal_column() {
        for power in 0..=100 {
            for angle in -45..=45 {
                let nominal = resolve(power as f32, angle as f32, false)[0];
                let split = resolve(power as f32, angle as f32, true);
                assert!(!split.contains(&nominal), "power={power} angle={angle}");
                assert!(!split.is_empty());
            }
        }
    }
}
