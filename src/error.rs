//! Error types for tile-lines operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tile-lines operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (configuration files, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Numeric line mode tag that is neither diagonal nor covering.
    #[error("Unknown line mode: {0}")]
    UnknownLineMode(u32),

    /// Line mode name that is neither `diagonal` nor `covering`.
    #[error("Unknown line mode name: {0:?}")]
    UnknownLineModeName(String),

    /// Cell outside the bounds of a grid map.
    #[error("Location ({col}, {row}) is outside the {width}x{height} map")]
    OutOfBounds {
        /// Column of the rejected cell.
        col: i32,
        /// Row of the rejected cell.
        row: i32,
        /// Map width in cells.
        width: u32,
        /// Map height in cells.
        height: u32,
    },

    /// Tile type index missing from the map's palette.
    #[error("Unknown tile type index: {0}")]
    UnknownTileType(usize),

    /// Configuration file not found or unreadable.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parse error.
    #[error("Configuration parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number (1-based, 0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_line_mode_display() {
        let err = Error::UnknownLineMode(999);
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            col: -1,
            row: 4,
            width: 8,
            height: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("(-1, 4)"));
        assert!(msg.contains("8x6"));
    }

    #[test]
    fn test_config_parse_display() {
        let err = Error::ConfigParse {
            line: 3,
            message: "bad value".to_string(),
        };
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
