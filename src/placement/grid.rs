//! Dense owned store of per-cell category and assignment state

use crate::error::{AssignmentRejection, PlaceError};
use crate::models::{Category, Cell, Coord, Version};
use crate::placement::classifier;

/// Minimum supported side length for generalized (custom-classified) grids
pub const MIN_SIZE: usize = 9;

/// Square module matrix with fixed classification and at-most-once bit writes
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    usable: usize,
    standard: bool,
}

impl Grid {
    /// Build a standard-layout grid of side `size` (odd, at least 9).
    ///
    /// Classification is computed eagerly for every cell and validated before
    /// the grid is handed out.
    pub fn new(size: usize) -> Result<Self, PlaceError> {
        Self::build(size, |x, y| classifier::classify(x, y, size), true)
    }

    /// Build the standard grid for a symbol version (1-40)
    pub fn for_version(number: u8) -> Result<Self, PlaceError> {
        let version = Version::new(number)?;
        Self::new(version.size())
    }

    /// Build a grid with a caller-supplied classification, for generalized
    /// layouts and testing. Same size and validation rules as `new`.
    pub fn from_fn<F>(size: usize, classify: F) -> Result<Self, PlaceError>
    where
        F: Fn(usize, usize) -> Category,
    {
        Self::build(size, classify, false)
    }

    fn build<F>(size: usize, classify: F, standard: bool) -> Result<Self, PlaceError>
    where
        F: Fn(usize, usize) -> Category,
    {
        if size < MIN_SIZE || size % 2 == 0 {
            return Err(PlaceError::InvalidSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut usable = 0;
        for y in 0..size {
            for x in 0..size {
                let category = classify(x, y);
                if category.is_usable() {
                    usable += 1;
                }
                cells.push(Cell::new(category));
            }
        }

        let grid = Self {
            size,
            cells,
            usable,
            standard,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// One-time consistency pass over the classification.
    ///
    /// Runs at construction so traversal never has to cope with a degenerate
    /// layout: a grid with no usable cells, or a bridge row spanning the full
    /// matrix width, is rejected here.
    fn validate(&self) -> Result<(), PlaceError> {
        if self.usable == 0 {
            return Err(PlaceError::Classification(format!(
                "no usable cells in a {0}x{0} grid",
                self.size
            )));
        }
        for y in 0..self.size {
            let full_bridge_row = (0..self.size)
                .all(|x| self.cells[y * self.size + x].category == Category::AlignmentBridge);
            if full_bridge_row {
                return Err(PlaceError::Classification(format!(
                    "alignment bridge spans the full matrix width at row {}",
                    y
                )));
            }
        }
        Ok(())
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells classified `Usable`
    pub fn usable_count(&self) -> usize {
        self.usable
    }

    /// Whether this grid carries the standard classification for its size
    pub fn is_standard(&self) -> bool {
        self.standard
    }

    /// Cell at (x, y), or `None` out of bounds. Never panics.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y * self.size + x])
    }

    /// Category at (x, y), or `None` out of bounds
    pub fn category(&self, x: usize, y: usize) -> Option<Category> {
        self.get(x, y).map(|cell| cell.category)
    }

    /// Whether (x, y) is in bounds and classified `Usable`
    pub fn is_usable(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(|cell| cell.category.is_usable())
    }

    /// Whether (x, y) is in bounds and part of an alignment block
    pub fn is_bridge(&self, x: usize, y: usize) -> bool {
        self.category(x, y) == Some(Category::AlignmentBridge)
    }

    /// Whether every cell of column `x` is `Reserved` (the vertical timing
    /// column in standard layouts). Such a column must never anchor a pair.
    pub fn is_reserved_column(&self, x: usize) -> bool {
        if x >= self.size {
            return false;
        }
        (0..self.size).all(|y| self.cells[y * self.size + x].category == Category::Reserved)
    }

    /// Write a data bit into a usable, not-yet-assigned cell
    pub fn assign(&mut self, x: usize, y: usize, bit: bool) -> Result<(), PlaceError> {
        let reject = |reason| PlaceError::InvalidAssignment { x, y, reason };
        if x >= self.size || y >= self.size {
            return Err(reject(AssignmentRejection::OutOfBounds));
        }
        let cell = &mut self.cells[y * self.size + x];
        if !cell.category.is_usable() {
            return Err(reject(AssignmentRejection::NotUsable));
        }
        if cell.value.is_some() {
            return Err(reject(AssignmentRejection::AlreadyAssigned));
        }
        cell.value = Some(bit);
        Ok(())
    }

    /// Coordinates of every usable cell in row-major order (diagnostics only;
    /// the zigzag path is the authoritative placement order)
    pub fn usable_coords(&self) -> Vec<Coord> {
        let mut coords = Vec::with_capacity(self.usable);
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[y * self.size + x].category.is_usable() {
                    coords.push(Coord::new(x, y));
                }
            }
        }
        coords
    }
}
