//! # Tile-Lines
//!
//! Line rasterization for 2D tile maps.
//!
//! Given two cells on a grid, tile-lines computes the ordered cells on the
//! straight line between them, with one of two semantics:
//!
//! - **Diagonal**: one cell per Chebyshev step, each axis rounded to the
//!   nearest cell (ties toward positive infinity)
//! - **Covering**: every cell the segment passes through (a supercover),
//!   computed with integer-only stepping
//!
//! Both can drop their endpoints (`exclusive`), and both stamp the start
//! cell's map token on every output cell.
//!
//! ## Quick Start
//!
//! ```rust
//! use tile_lines::prelude::*;
//!
//! let cells = line(LineMode::Covering, Location::new(0, 0), Location::new(3, 1), false);
//! assert_eq!(cells.len(), 5);
//!
//! // Hosts that pass modes as integers get an explicit error for bad tags.
//! assert!(line_from_tag(999, Location::new(0, 0), Location::new(3, 1), false).is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML configuration via serde
//! - `cli`: the `tile-lines` command line binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Patel, A. "Line drawing on a grid." Red Blob Games.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Grid locations and scalar helpers.
pub mod geometry;

/// Line rasterizers and mode dispatch.
pub mod raster;

/// Tile map collaborators (walls, sampling, line of sight).
pub mod tilemap;

/// Design-by-contract checks shared by rasterizers and tests.
pub mod verification_specs;

// ============================================================================
// Configuration
// ============================================================================

/// YAML configuration for line queries.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tile-lines operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use tile_lines::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Location, MapId};
    pub use crate::raster::{
        covering_line, diagonal_line, line, line_from_tag, CoveringLine, DiagonalLine, LineMode,
        LineRequest, Rasterizer,
    };
    pub use crate::tilemap::{
        first_wall, has_line_of_sight, is_wall, random_tiles_by_type, GridMap, TileMap,
    };
}
