//! Supercover ("covering") line rasterization.
//!
//! Walks from cell to cell one axis step at a time, choosing at each step the
//! axis whose next cell boundary the segment crosses first. The comparison is
//! done in integers: with `ix` x-steps and `iy` y-steps taken, the next
//! vertical boundary is at parameter `(1 + 2ix) / 2absx` and the next
//! horizontal one at `(1 + 2iy) / 2absy`, so cross-multiplying gives
//! `(1 + 2ix) * absy < (1 + 2iy) * absx` for "x first". Exact corner hits go
//! to the y axis.

use crate::geometry::{Location, MapId};
use crate::verification_specs::{length_contracts, line_contracts};

/// Stepping state for one traversal.
struct Walker {
    x: i64,
    y: i64,
    ix: i64,
    iy: i64,
    absx: i64,
    absy: i64,
    stepx: i64,
    stepy: i64,
}

impl Walker {
    fn new(start: Location, end: Location) -> Self {
        let dx = i64::from(end.col) - i64::from(start.col);
        let dy = i64::from(end.row) - i64::from(start.row);
        Self {
            x: i64::from(start.col),
            y: i64::from(start.row),
            ix: 0,
            iy: 0,
            absx: dx.abs(),
            absy: dy.abs(),
            stepx: dx.signum(),
            stepy: dy.signum(),
        }
    }

    fn remaining(&self) -> bool {
        self.ix < self.absx || self.iy < self.absy
    }

    fn advance(&mut self) {
        // Step counts reach 2^32 for i32 endpoints, so the products need i128.
        let lhs = i128::from(1 + 2 * self.ix) * i128::from(self.absy);
        let rhs = i128::from(1 + 2 * self.iy) * i128::from(self.absx);
        let x_first = lhs < rhs;
        if x_first {
            self.x += self.stepx;
            self.ix += 1;
        } else {
            self.y += self.stepy;
            self.iy += 1;
        }
    }

    fn cell(&self, map: Option<MapId>) -> Location {
        Location {
            col: self.x as i32,
            row: self.y as i32,
            map,
        }
    }
}

/// Every cell the segment from `start` to `end` passes through.
///
/// Consecutive cells share an edge, so the result has
/// `|dx| + |dy| + 1` cells (`|dx| + |dy| - 1` when `exclusive`).
///
/// # Examples
///
/// ```
/// use tile_lines::geometry::Location;
/// use tile_lines::raster::covering_line;
///
/// let cells = covering_line(Location::new(0, 0), Location::new(3, 1), false);
/// let coords: Vec<(i32, i32)> = cells.iter().map(|c| c.coords()).collect();
/// assert_eq!(coords, [(0, 0), (1, 0), (1, 1), (2, 1), (3, 1)]);
/// ```
pub fn covering_line(start: Location, end: Location, exclusive: bool) -> Vec<Location> {
    if start.coords() == end.coords() {
        return if exclusive { Vec::new() } else { vec![start] };
    }

    let mut walk = Walker::new(start, end);
    let total = (walk.absx + walk.absy) as u64;
    let mut cells = Vec::with_capacity(total as usize + 1);

    if exclusive {
        walk.advance();
    }
    while walk.remaining() {
        cells.push(walk.cell(start.map));
        walk.advance();
    }
    if !exclusive {
        cells.push(walk.cell(start.map));
    }

    debug_assert_eq!(cells.len() as u64, length_contracts::covering_len(total, exclusive));
    debug_assert!(line_contracts::is_four_connected(&cells));
    debug_assert!(line_contracts::respects_endpoints(&cells, start, end, exclusive));
    cells
}
