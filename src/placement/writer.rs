//! Bit writer: zips the traversal path with a bit sequence into the grid

use crate::error::PlaceError;
use crate::placement::grid::Grid;
use crate::placement::traverse::Path;

/// Outcome counts of one write pass.
///
/// Length mismatches between the path and the bit sequence are expected in
/// real encoding pipelines (padding and remainder bits are the caller's
/// business), so they are reported here rather than surfaced as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteReport {
    /// Bits written into usable cells
    pub assigned: usize,
    /// Trailing input bits with no path slot left
    pub dropped: usize,
    /// Path slots left unassigned because the input ran out
    pub unfilled: usize,
}

/// Assign `bits[i]` to `path[i]` for every index both sequences cover.
///
/// Mutates cell values only; categories are untouched. Fails only on an
/// invalid assignment, which a path produced from the same grid cannot cause.
pub fn write(grid: &mut Grid, path: &Path, bits: &[bool]) -> Result<WriteReport, PlaceError> {
    let take = path.len().min(bits.len());
    for (coord, bit) in path.iter().zip(bits.iter()).take(take) {
        grid.assign(coord.x, coord.y, *bit)?;
    }
    Ok(WriteReport {
        assigned: take,
        dropped: bits.len().saturating_sub(path.len()),
        unfilled: path.len() - take,
    })
}
