use thiserror::Error;
use tracing::warn;

use crate::Coord;

/// How coordinates outside of the grid resolve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Cells past the edges are permanently dead and cannot be written.
    #[default]
    Bounded,

    /// Coordinates wrap around both axes, as if the grid were drawn on a torus.
    Toroidal,
}

impl Topology {
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap { Self::Toroidal } else { Self::Bounded }
    }

    pub fn wraps(&self) -> bool {
        matches!(self, Self::Toroidal)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    EmptyDimension { width: usize, height: usize },

    #[error("A {width}x{height} grid has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("Failed to allocate a buffer of {cells} cells")]
    Allocation { cells: usize },
}

/// Allocate `len` dead cells without aborting on allocation failure.
pub(crate) fn alloc_cells(len: usize) -> Result<Vec<bool>, GridError> {
    let mut cells = Vec::new();

    if let Err(e) = cells.try_reserve_exact(len) {
        warn!(cells = len, "Cell buffer allocation failed: {e}");

        return Err(GridError::Allocation { cells: len });
    }

    cells.resize(len, false);

    Ok(cells)
}

/// Rectangular store of cell states. Cell `(x, y)` lives at index `y * width + x`.
///
/// Every access goes through [`Grid::resolve`], so callers never need to know which
/// [`Topology`] the grid was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
    topology: Topology,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize, topology: Topology) -> Result<Self, GridError> {
        let len = Self::area(width, height)?;
        let cells = alloc_cells(len)?;

        Ok(Self {
            cells,
            width,
            height,
            topology,
        })
    }

    /// Number of cells in a `width` by `height` grid.
    pub fn area(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimension { width, height });
        }

        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        // Coordinates are signed, so every in-range index must fit one.
        if Coord::try_from(width).is_err() || Coord::try_from(height).is_err() {
            return Err(GridError::TooLarge { width, height });
        }

        Ok(len)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Map a coordinate to its index in the cell buffer. `None` means the coordinate lies off a
    /// bounded grid.
    pub fn resolve(&self, x: Coord, y: Coord) -> Option<usize> {
        // `Grid::area` guarantees both dimensions fit in a `Coord`.
        let (w, h) = (self.width as Coord, self.height as Coord);

        let (x, y) = match self.topology {
            Topology::Bounded => {
                if !(0..w).contains(&x) || !(0..h).contains(&y) {
                    return None;
                }

                (x, y)
            }
            Topology::Toroidal => (x.rem_euclid(w), y.rem_euclid(h)),
        };

        Some(y as usize * self.width + x as usize)
    }

    /// Read a cell. Off-grid cells of a bounded grid are dead.
    pub fn get(&self, x: Coord, y: Coord) -> bool {
        self.resolve(x, y).is_some_and(|i| self.cells[i])
    }

    /// Writable handle to a cell, or `None` for the permanently dead cells past the edges of a
    /// bounded grid.
    pub fn cell_mut(&mut self, x: Coord, y: Coord) -> Option<&mut bool> {
        let i = self.resolve(x, y)?;

        Some(&mut self.cells[i])
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Coordinates of cell `i` of the buffer.
    pub fn xy_to(&self, i: usize) -> (Coord, Coord) {
        ((i % self.width) as Coord, (i / self.width) as Coord)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Replace the whole buffer at once. `cells` must hold exactly `width * height` entries.
    pub(crate) fn commit(&mut self, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), self.cells.len());

        self.cells = cells;
    }
}
