//! Grid geometry: locations on a tile map and the scalar helpers the
//! rasterizers are built from.

use std::fmt;

/// Opaque token identifying the tile map a [`Location`] belongs to.
///
/// The rasterizers never look inside it; they copy the start location's token
/// onto every cell they emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapId(pub u32);

/// A grid cell identified by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    /// Column index.
    pub col: i32,
    /// Row index.
    pub row: i32,
    /// Map this cell belongs to, if any.
    pub map: Option<MapId>,
}

impl Location {
    /// Cell (0, 0) with no map.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a location that is not tied to a map.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row, map: None }
    }

    /// Create a location on the given map.
    #[must_use]
    pub const fn on(col: i32, row: i32, map: MapId) -> Self {
        Self {
            col,
            row,
            map: Some(map),
        }
    }

    /// Same cell, tagged with `map`.
    #[must_use]
    pub const fn with_map(self, map: Option<MapId>) -> Self {
        Self { map, ..self }
    }

    /// Column and row as a tuple.
    #[must_use]
    pub const fn coords(self) -> (i32, i32) {
        (self.col, self.row)
    }

    /// Chebyshev distance (number of king moves) to another cell.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u64 {
        let dx = (i64::from(other.col) - i64::from(self.col)).unsigned_abs();
        let dy = (i64::from(other.row) - i64::from(self.row)).unsigned_abs();
        dx.max(dy)
    }

    /// Manhattan distance (number of rook steps) to another cell.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u64 {
        let dx = (i64::from(other.col) - i64::from(self.col)).unsigned_abs();
        let dy = (i64::from(other.row) - i64::from(self.row)).unsigned_abs();
        dx + dy
    }

    /// Whether `other` is one of the eight neighbours of this cell.
    #[must_use]
    pub fn is_adjacent8(self, other: Self) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Whether `other` shares an edge with this cell.
    #[must_use]
    pub fn is_adjacent4(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Location {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

/// Linear interpolation `start * (1 - t) + t * end`.
///
/// The evaluation order is fixed: rounding of the result depends on it, so
/// this must not be rewritten as `start + (end - start) * t`.
#[inline]
#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + t * end
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `0.5 -> 1`, `1.5 -> 2`, `-0.5 -> 0`, `-1.5 -> -1`.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    // `(value + 0.5).floor()` would round 0.49999999999999994 up to 1.
    let down = value.floor();
    if value - down >= 0.5 {
        down + 1.0
    } else {
        down
    }
}
