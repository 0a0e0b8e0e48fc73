//! Line rasterization over tile grids.
//!
//! Provides the two line semantics a tile map can ask for and a dispatcher
//! that picks one by [`LineMode`].
//!
//! # Algorithms
//!
//! - **Diagonal**: Parametric interpolation, one cell per Chebyshev step
//! - **Covering**: Supercover stepping, every cell the segment touches
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Patel, A. "Line drawing on a grid." Red Blob Games (stepping variant).

mod covering;
mod diagonal;

pub use covering::covering_line;
pub use diagonal::diagonal_line;

use crate::error::{Error, Result};
use crate::geometry::Location;
use std::fmt;
use std::str::FromStr;

/// Which cells a line between two locations consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
#[repr(u32)]
pub enum LineMode {
    /// One cell per Chebyshev step, rounded per axis.
    #[default]
    Diagonal = 0,
    /// Every cell the segment passes through.
    Covering = 1,
}

impl LineMode {
    /// All modes, in tag order.
    pub const ALL: [Self; 2] = [Self::Diagonal, Self::Covering];

    /// Numeric tag used by hosts that pass modes as integers.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diagonal => "diagonal",
            Self::Covering => "covering",
        }
    }
}

impl TryFrom<u32> for LineMode {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self> {
        match tag {
            0 => Ok(Self::Diagonal),
            1 => Ok(Self::Covering),
            other => Err(Error::UnknownLineMode(other)),
        }
    }
}

impl FromStr for LineMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diagonal" => Ok(Self::Diagonal),
            "covering" => Ok(Self::Covering),
            _ => Err(Error::UnknownLineModeName(s.to_string())),
        }
    }
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A line rasterization strategy.
pub trait Rasterizer {
    /// Cells from `start` to `end`, in travel order.
    ///
    /// With `exclusive`, the two endpoint cells are left out.
    fn rasterize(&self, start: Location, end: Location, exclusive: bool) -> Vec<Location>;
}

/// [`diagonal_line`] as a [`Rasterizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalLine;

/// [`covering_line`] as a [`Rasterizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CoveringLine;

impl Rasterizer for DiagonalLine {
    fn rasterize(&self, start: Location, end: Location, exclusive: bool) -> Vec<Location> {
        diagonal_line(start, end, exclusive)
    }
}

impl Rasterizer for CoveringLine {
    fn rasterize(&self, start: Location, end: Location, exclusive: bool) -> Vec<Location> {
        covering_line(start, end, exclusive)
    }
}

impl Rasterizer for LineMode {
    fn rasterize(&self, start: Location, end: Location, exclusive: bool) -> Vec<Location> {
        match self {
            Self::Diagonal => DiagonalLine.rasterize(start, end, exclusive),
            Self::Covering => CoveringLine.rasterize(start, end, exclusive),
        }
    }
}

/// Cells on the `mode` line from `start` to `end`.
///
/// Every cell carries `start.map`.
pub fn line(mode: LineMode, start: Location, end: Location, exclusive: bool) -> Vec<Location> {
    let cells = mode.rasterize(start, end, exclusive);
    log::trace!(
        "{mode} line {start} -> {end} (exclusive: {exclusive}): {} cells",
        cells.len()
    );
    cells
}

/// [`line`] for hosts that pass the mode as a numeric tag.
///
/// # Errors
///
/// Returns [`Error::UnknownLineMode`] if `tag` is not a [`LineMode`] tag.
pub fn line_from_tag(
    tag: u32,
    start: Location,
    end: Location,
    exclusive: bool,
) -> Result<Vec<Location>> {
    let mode = LineMode::try_from(tag)?;
    Ok(line(mode, start, end, exclusive))
}

/// A line query: two endpoints, a mode, and whether to drop the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRequest {
    start: Location,
    end: Location,
    mode: LineMode,
    exclusive: bool,
}

impl LineRequest {
    /// Inclusive request with the given mode.
    #[must_use]
    pub const fn new(mode: LineMode, start: Location, end: Location) -> Self {
        Self {
            start,
            end,
            mode,
            exclusive: false,
        }
    }

    /// Set whether the endpoints are left out.
    #[must_use]
    pub const fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Start location.
    #[must_use]
    pub const fn start(&self) -> Location {
        self.start
    }

    /// End location.
    #[must_use]
    pub const fn end(&self) -> Location {
        self.end
    }

    /// Line mode.
    #[must_use]
    pub const fn mode(&self) -> LineMode {
        self.mode
    }

    /// Whether the endpoints are left out.
    #[must_use]
    pub const fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Run the query.
    #[must_use]
    pub fn rasterize(&self) -> Vec<Location> {
        line(self.mode, self.start, self.end, self.exclusive)
    }
}
