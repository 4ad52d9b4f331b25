//! qr_placer - QR code data-module placement library
//!
//! Places an encoded bitstream into the data-carrying cells of a square
//! symbol matrix following the mandated zigzag scan order: column pairs swept
//! right to left, right-then-left within each row, function patterns skipped
//! and alignment blocks bypassed without disturbing the scan phase.
//!
//! Codeword generation, masking, and rendering are the caller's collaborators;
//! this crate owns the classification, the traversal order, and the writes.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error taxonomy shared across the pipeline
pub mod error;
/// Core data structures (Category, Cell, Coord, Version)
pub mod models;
/// Placement pipeline (classifier, grid, traversal, writer)
pub mod placement;

mod debug;

pub use error::{AssignmentRejection, PlaceError};
pub use models::{Category, Cell, Coord, Version};
pub use placement::grid::Grid;
pub use placement::traverse::{Cursor, Direction, Path, Phase, ZigzagTraversal, scan};
pub use placement::writer::WriteReport;

use rayon::prelude::*;

/// Place a bit sequence into a freshly built standard grid
///
/// # Arguments
/// * `version` - Symbol version (1-40)
/// * `bits` - Data bits in codeword order, any length
///
/// # Returns
/// The assigned grid plus the write report. Length mismatches between the
/// bit sequence and the usable cell count show up in the report, not as
/// errors.
pub fn place(version: u8, bits: &[bool]) -> Result<(Grid, WriteReport), PlaceError> {
    let mut grid = Grid::for_version(version)?;
    let report = place_into(&mut grid, bits)?;
    Ok((grid, report))
}

/// Place a bit sequence into an existing grid
///
/// Generates the zigzag path for the grid's classification and writes the
/// bits along it. The grid is borrowed exclusively for the whole pass.
pub fn place_into(grid: &mut Grid, bits: &[bool]) -> Result<WriteReport, PlaceError> {
    let path = scan(grid)?;
    placement::writer::write(grid, &path, bits)
}

/// Place many independent symbols in parallel
///
/// Each job gets its own grid; no state is shared between them, so the jobs
/// parallelize freely.
pub fn place_batch(jobs: &[(u8, Vec<bool>)]) -> Vec<Result<(Grid, WriteReport), PlaceError>> {
    jobs.par_iter()
        .map(|(version, bits)| place(*version, bits))
        .collect()
}

/// Placer that caches the traversal path across repeated placements
///
/// Standard grids of equal size share one classification, so the path can be
/// computed once and reused. Use this when filling many symbols of the same
/// version.
pub struct Placer {
    cached: Option<(usize, Path)>,
}

impl Placer {
    /// Create a placer with an empty path cache
    pub fn new() -> Self {
        Self { cached: None }
    }

    /// Place bits into a grid, reusing the cached path when the grid is a
    /// standard layout of the size seen last time
    pub fn place_into(&mut self, grid: &mut Grid, bits: &[bool]) -> Result<WriteReport, PlaceError> {
        if !grid.is_standard() {
            let path = scan(grid)?;
            return placement::writer::write(grid, &path, bits);
        }

        let size = grid.size();
        if let Some((cached_size, path)) = &self.cached {
            if *cached_size == size {
                return placement::writer::write(grid, path, bits);
            }
        }
        let path = scan(grid)?;
        let report = placement::writer::write(grid, &path, bits)?;
        self.cached = Some((size, path));
        Ok(report)
    }

    /// Drop the cached path
    pub fn clear_cache(&mut self) {
        self.cached = None;
    }
}

impl Default for Placer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_version1() {
        let bits: Vec<bool> = (0..208).map(|i| i % 2 == 0).collect();
        let (grid, report) = place(1, &bits).unwrap();
        assert_eq!(report.assigned, 208);
        assert_eq!(report.dropped, 0);
        assert_eq!(report.unfilled, 0);
        assert_eq!(grid.get(20, 20).unwrap().value, Some(true));
        assert_eq!(grid.get(19, 20).unwrap().value, Some(false));
    }

    #[test]
    fn test_place_rejects_bad_version() {
        assert!(matches!(place(0, &[]), Err(PlaceError::InvalidVersion(0))));
        assert!(matches!(place(41, &[]), Err(PlaceError::InvalidVersion(41))));
    }

    #[test]
    fn test_place_batch_independent_results() {
        let jobs: Vec<(u8, Vec<bool>)> = vec![
            (1, vec![true; 208]),
            (2, vec![false; 359]),
            (0, Vec::new()),
        ];
        let results = place_batch(&jobs);
        assert_eq!(results.len(), 3);
        let (_, report) = results[0].as_ref().unwrap();
        assert_eq!(report.assigned, 208);
        let (_, report) = results[1].as_ref().unwrap();
        assert_eq!(report.assigned, 359);
        assert!(results[2].is_err());
    }

    #[test]
    fn test_placer_cache_reuse_matches_fresh_run() {
        let bits: Vec<bool> = (0..208).map(|i| i % 5 == 0).collect();
        let mut placer = Placer::new();

        let mut first = Grid::for_version(1).unwrap();
        placer.place_into(&mut first, &bits).unwrap();
        let mut second = Grid::for_version(1).unwrap();
        placer.place_into(&mut second, &bits).unwrap();

        let (fresh, _) = place(1, &bits).unwrap();
        for y in 0..21 {
            for x in 0..21 {
                assert_eq!(first.get(x, y), fresh.get(x, y));
                assert_eq!(second.get(x, y), fresh.get(x, y));
            }
        }
    }

    #[test]
    fn test_placer_cache_invalidated_by_size_change() {
        let mut placer = Placer::new();
        let mut v1 = Grid::for_version(1).unwrap();
        let report = placer.place_into(&mut v1, &vec![true; 208]).unwrap();
        assert_eq!(report.assigned, 208);

        let mut v2 = Grid::for_version(2).unwrap();
        let report = placer.place_into(&mut v2, &vec![true; 359]).unwrap();
        assert_eq!(report.assigned, 359);
    }
}
