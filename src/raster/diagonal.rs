//! Parametric ("diagonal") line rasterization.
//!
//! Samples the segment at `N + 1` evenly spaced parameter values, where `N`
//! is the Chebyshev distance between the endpoints, and snaps each sample to
//! the nearest cell independently per axis.

use crate::geometry::{lerp, round_half_up, Location};
use crate::verification_specs::{length_contracts, line_contracts};

/// Cells on the parametric line from `start` to `end`.
///
/// Produces `N + 1` cells for Chebyshev distance `N` (`N - 1` when
/// `exclusive`). Consecutive cells are always king-adjacent, but the result
/// is not a supercover: cells the segment merely clips are skipped. Ties are
/// rounded toward positive infinity on both axes.
///
/// # Examples
///
/// ```
/// use tile_lines::geometry::Location;
/// use tile_lines::raster::diagonal_line;
///
/// let cells = diagonal_line(Location::new(0, 0), Location::new(4, 2), false);
/// let rows: Vec<i32> = cells.iter().map(|c| c.row).collect();
/// assert_eq!(rows, [0, 1, 1, 2, 2]);
/// ```
pub fn diagonal_line(start: Location, end: Location, exclusive: bool) -> Vec<Location> {
    let n = start.chebyshev_distance(end);
    if n == 0 {
        return if exclusive { Vec::new() } else { vec![start] };
    }

    let skip = u64::from(exclusive);
    let (c0, r0) = (f64::from(start.col), f64::from(start.row));
    let (c1, r1) = (f64::from(end.col), f64::from(end.row));
    let steps = n as f64;

    let cells: Vec<Location> = (skip..=n - skip)
        .map(|step| {
            let t = step as f64 / steps;
            Location {
                col: round_half_up(lerp(c0, c1, t)) as i32,
                row: round_half_up(lerp(r0, r1, t)) as i32,
                map: start.map,
            }
        })
        .collect();

    debug_assert_eq!(cells.len() as u64, length_contracts::diagonal_len(n, exclusive));
    debug_assert!(line_contracts::respects_endpoints(&cells, start, end, exclusive));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MapId;
    use crate::verification_specs::line_contracts::{has_no_duplicates, is_eight_connected};

    fn coords(cells: &[Location]) -> Vec<(i32, i32)> {
        cells.iter().map(|c| c.coords()).collect()
    }

    #[test]
    fn test_single_cell() {
        let p = Location::new(3, -2);
        assert_eq!(diagonal_line(p, p, false), vec![p]);
        assert!(diagonal_line(p, p, true).is_empty());
    }

    #[test]
    fn test_shallow_slope_rounding() {
        let cells = diagonal_line(Location::new(0, 0), Location::new(4, 2), false);
        assert_eq!(coords(&cells), [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]);
    }

    #[test]
    fn test_negative_direction_ties_round_up() {
        // -0.5 -> 0 and -1.5 -> -1
        let cells = diagonal_line(Location::new(0, 0), Location::new(-4, -2), false);
        assert_eq!(coords(&cells), [(0, 0), (-1, 0), (-2, -1), (-3, -1), (-4, -2)]);
    }

    #[test]
    fn test_steep_slope() {
        let cells = diagonal_line(Location::new(0, 0), Location::new(1, 3), false);
        // cols: 0, 0.333, 0.667, 1
        assert_eq!(coords(&cells), [(0, 0), (0, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_pure_diagonal() {
        let cells = diagonal_line(Location::new(2, 2), Location::new(5, -1), false);
        assert_eq!(coords(&cells), [(2, 2), (3, 1), (4, 0), (5, -1)]);
    }

    #[test]
    fn test_vertical_run() {
        let cells = diagonal_line(Location::new(7, 1), Location::new(7, 6), false);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| c.col == 7));
        assert_eq!(cells.iter().map(|c| c.row).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_exclusive_drops_endpoints() {
        let cells = diagonal_line(Location::new(0, 0), Location::new(4, 2), true);
        assert_eq!(coords(&cells), [(1, 1), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_exclusive_adjacent_cells_is_empty() {
        let cells = diagonal_line(Location::new(0, 0), Location::new(1, 1), true);
        assert!(cells.is_empty());
        let cells = diagonal_line(Location::new(0, 0), Location::new(0, -1), true);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_map_token_propagates() {
        let map = MapId(9);
        let cells = diagonal_line(Location::on(0, 0, map), Location::new(3, 5), false);
        assert!(cells.iter().all(|c| c.map == Some(map)));
    }

    #[test]
    fn test_just_below_half_rounds_down() {
        // row at t = 1/20 is lerp(1, -9, 0.05) = 0.49999999999999994
        let cells = diagonal_line(Location::new(0, 1), Location::new(20, -9), false);
        assert_eq!(cells[1].coords(), (1, 0));
        assert_eq!(cells.len(), 21);
    }

    #[test]
    fn test_long_line_is_connected_without_duplicates() {
        let cells = diagonal_line(Location::new(-13, 4), Location::new(22, -9), false);
        assert_eq!(cells.len(), 36);
        assert!(is_eight_connected(&cells));
        assert!(has_no_duplicates(&cells));
    }
}
