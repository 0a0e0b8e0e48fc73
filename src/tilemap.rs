//! Tile map collaborators: wall queries, tile sampling, and line-of-sight.
//!
//! The rasterizers in [`crate::raster`] never look at a map. The helpers
//! here take the map explicitly and combine it with lines.

use crate::error::{Error, Result};
use crate::geometry::{Location, MapId};
use crate::raster::{line, LineMode};
use rand::seq::IteratorRandom;
use rand::Rng;

/// A 2D tile map that lines can be queried against.
pub trait TileMap {
    /// Tile image type the map's palette is keyed by.
    type Image: ?Sized;

    /// Token stamped on locations produced by this map.
    fn id(&self) -> MapId;

    /// Whether the cell blocks movement. Cells outside the map do.
    fn is_obstacle(&self, col: i32, row: i32) -> bool;

    /// Palette index of `image`, if the map uses it.
    fn image_type(&self, image: &Self::Image) -> Option<usize>;

    /// Up to `max_count` random distinct cells whose tile type is `index`.
    fn sample_tiles_by_type(&self, index: usize, max_count: usize) -> Vec<Location>;
}

/// Whether `location` is a wall on `map`.
pub fn is_wall<M: TileMap + ?Sized>(location: Location, map: &M) -> bool {
    map.is_obstacle(location.col, location.row)
}

/// Up to `max_count` random locations showing `tile` on `map`.
///
/// Returns `None` when no tile or no map is given, and an empty list when the
/// map does not use `tile`.
pub fn random_tiles_by_type<M: TileMap + ?Sized>(
    tile: Option<&M::Image>,
    max_count: usize,
    map: Option<&M>,
) -> Option<Vec<Location>> {
    let (tile, map) = (tile?, map?);
    let Some(index) = map.image_type(tile) else {
        log::debug!("tile image not in palette of map {:?}", map.id());
        return Some(Vec::new());
    };
    Some(map.sample_tiles_by_type(index, max_count))
}

/// First wall along the `mode` line from `start` to `end`, ignoring `start`.
///
/// Returns `None` if the line is clear, including the end cell.
pub fn first_wall<M: TileMap + ?Sized>(
    mode: LineMode,
    start: Location,
    end: Location,
    map: &M,
) -> Option<Location> {
    line(mode, start, end, false)
        .into_iter()
        .skip(1)
        .find(|&cell| is_wall(cell, map))
}

/// Whether the `mode` line between `start` and `end` crosses no wall.
///
/// The endpoints themselves are not checked.
pub fn has_line_of_sight<M: TileMap + ?Sized>(
    mode: LineMode,
    start: Location,
    end: Location,
    map: &M,
) -> bool {
    line(mode, start, end, true)
        .into_iter()
        .all(|cell| !is_wall(cell, map))
}

/// In-memory tile map: a row-major grid of palette indices plus a wall layer.
#[derive(Debug, Clone)]
pub struct GridMap {
    id: MapId,
    width: u32,
    height: u32,
    palette: Vec<String>,
    tiles: Vec<usize>,
    walls: Vec<bool>,
}

impl GridMap {
    /// A `width` x `height` map filled with palette entry 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTileType`] if `palette` is empty.
    pub fn new<S: Into<String>>(
        id: MapId,
        width: u32,
        height: u32,
        palette: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let palette: Vec<String> = palette.into_iter().map(Into::into).collect();
        if palette.is_empty() {
            return Err(Error::UnknownTileType(0));
        }
        let len = width as usize * height as usize;
        Ok(Self {
            id,
            width,
            height,
            palette,
            tiles: vec![0; len],
            walls: vec![false; len],
        })
    }

    /// Map width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Map height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Location of (`col`, `row`) on this map.
    #[must_use]
    pub const fn location(&self, col: i32, row: i32) -> Location {
        Location::on(col, row, self.id)
    }

    /// Whether (`col`, `row`) is inside the map.
    #[must_use]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_some()
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        let col = u32::try_from(col).ok()?;
        let row = u32::try_from(row).ok()?;
        (col < self.width && row < self.height)
            .then(|| row as usize * self.width as usize + col as usize)
    }

    fn checked_index(&self, col: i32, row: i32) -> Result<usize> {
        self.index(col, row).ok_or(Error::OutOfBounds {
            col,
            row,
            width: self.width,
            height: self.height,
        })
    }

    /// Palette index at (`col`, `row`), if inside the map.
    #[must_use]
    pub fn tile(&self, col: i32, row: i32) -> Option<usize> {
        self.index(col, row).map(|i| self.tiles[i])
    }

    /// Set the palette index at (`col`, `row`).
    pub fn set_tile(&mut self, col: i32, row: i32, tile_type: usize) -> Result<()> {
        if tile_type >= self.palette.len() {
            return Err(Error::UnknownTileType(tile_type));
        }
        let i = self.checked_index(col, row)?;
        self.tiles[i] = tile_type;
        Ok(())
    }

    /// Mark or clear a wall at (`col`, `row`).
    pub fn set_wall(&mut self, col: i32, row: i32, wall: bool) -> Result<()> {
        let i = self.checked_index(col, row)?;
        self.walls[i] = wall;
        Ok(())
    }

    /// Set every cell along a line to `tile_type`, clipping to the map.
    pub fn paint_line(
        &mut self,
        mode: LineMode,
        start: Location,
        end: Location,
        tile_type: usize,
    ) -> Result<usize> {
        if tile_type >= self.palette.len() {
            return Err(Error::UnknownTileType(tile_type));
        }
        let mut painted = 0;
        for cell in line(mode, start, end, false) {
            if let Some(i) = self.index(cell.col, cell.row) {
                self.tiles[i] = tile_type;
                painted += 1;
            }
        }
        Ok(painted)
    }

    /// [`TileMap::sample_tiles_by_type`] with an explicit random source.
    ///
    /// The result is in row-major order.
    pub fn sample_tiles_by_type_with<R: Rng + ?Sized>(
        &self,
        index: usize,
        max_count: usize,
        rng: &mut R,
    ) -> Vec<Location> {
        let mut picked = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t == index)
            .map(|(i, _)| i)
            .choose_multiple(rng, max_count);
        picked.sort_unstable();

        let width = self.width as usize;
        let cells: Vec<Location> = picked
            .into_iter()
            .map(|i| self.location((i % width) as i32, (i / width) as i32))
            .collect();
        log::debug!(
            "sampled {} of at most {max_count} tiles of type {index} on map {:?}",
            cells.len(),
            self.id
        );
        cells
    }
}

impl TileMap for GridMap {
    type Image = str;

    fn id(&self) -> MapId {
        self.id
    }

    fn is_obstacle(&self, col: i32, row: i32) -> bool {
        self.index(col, row).map_or(true, |i| self.walls[i])
    }

    fn image_type(&self, image: &str) -> Option<usize> {
        self.palette.iter().position(|name| name == image)
    }

    fn sample_tiles_by_type(&self, index: usize, max_count: usize) -> Vec<Location> {
        self.sample_tiles_by_type_with(index, max_count, &mut rand::thread_rng())
    }
}
