//! Zigzag traversal engine: canonical visiting order of usable cells
//!
//! Column pairs are swept right to left, alternating vertical direction,
//! right column before left column within each row. Non-usable cells are
//! skipped per cell; a row fully covered by an alignment block is bypassed
//! as a unit without disturbing the right/left phase.

use crate::debug::debug_enabled;
use crate::error::PlaceError;
use crate::models::Coord;
use crate::placement::grid::Grid;

/// Vertical scan direction of the active column pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Rows decreasing (bottom to top)
    Up,
    /// Rows increasing (top to bottom)
    Down,
}

impl Direction {
    fn flip(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    fn row_step(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Which column of the active pair the cursor is about to attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The anchor (right) column of the pair
    Right,
    /// The column one to the left of the anchor
    Left,
}

/// Transient traversal state, surfaced only inside `DeadEnd` diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Anchor (right) column of the active pair; negative once traversal ends
    pub x: isize,
    /// Current row
    pub y: isize,
    /// Vertical direction of the active pair
    pub direction: Direction,
    /// Right/left position within the pair
    pub phase: Phase,
}

/// One enumerated transition of the traversal state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// A usable cell was reached and claims the next output slot
    Visit(Coord),
    /// A reserved/format cell was passed over, consuming no output slot
    Skip,
    /// A contiguous run of fully-bridged rows was jumped, phase untouched
    Bypass { rows: usize },
    /// The pair was exhausted; the cursor moved to the next pair
    PairDone,
    /// All pairs down to column 0 have been swept
    Finished,
}

impl Cursor {
    fn start(grid: &Grid) -> Self {
        let n = grid.size() as isize;
        Self {
            x: n - 1,
            y: n - 1,
            direction: Direction::Up,
            phase: Phase::Right,
        }
    }

    /// Column index of the left cell of the pair; negative for a boundary pair
    fn left_column(&self) -> isize {
        self.x - 1
    }

    /// Whether every pair cell of the current row belongs to an alignment
    /// block. Only such rows are bypassed as a block; a partially bridged row
    /// falls back to per-cell skipping so the other column keeps its cells.
    fn row_bridged(&self, grid: &Grid) -> bool {
        let y = self.y as usize;
        if !grid.is_bridge(self.x as usize, y) {
            return false;
        }
        let left = self.left_column();
        left < 0 || grid.is_bridge(left as usize, y)
    }

    fn next_pair(&mut self, grid: &Grid) {
        let n = grid.size() as isize;
        self.x -= 2;
        // A wholly reserved column (the vertical timing column) must not
        // anchor a pair of its own; shift one further left.
        while self.x >= 0 && grid.is_reserved_column(self.x as usize) {
            self.x -= 1;
        }
        self.direction = self.direction.flip();
        self.phase = Phase::Right;
        self.y = match self.direction {
            Direction::Up => n - 1,
            Direction::Down => 0,
        };
    }

    fn step(&mut self, grid: &Grid) -> Step {
        let n = grid.size() as isize;
        if self.x < 0 {
            return Step::Finished;
        }
        if self.y < 0 || self.y >= n {
            self.next_pair(grid);
            return Step::PairDone;
        }
        match self.phase {
            Phase::Right => {
                if self.row_bridged(grid) {
                    let mut rows = 0;
                    while (0..n).contains(&self.y) && self.row_bridged(grid) {
                        self.y += self.direction.row_step();
                        rows += 1;
                    }
                    return Step::Bypass { rows };
                }
                let coord = Coord::new(self.x as usize, self.y as usize);
                self.phase = Phase::Left;
                if grid.is_usable(coord.x, coord.y) {
                    Step::Visit(coord)
                } else {
                    Step::Skip
                }
            }
            Phase::Left => {
                let left = self.left_column();
                let step = if left >= 0 && grid.is_usable(left as usize, self.y as usize) {
                    Step::Visit(Coord::new(left as usize, self.y as usize))
                } else {
                    Step::Skip
                };
                self.phase = Phase::Right;
                self.y += self.direction.row_step();
                step
            }
        }
    }
}

/// Canonical visiting order of all usable cells; immutable once produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    fn new(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Number of coordinates in the path
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the path holds no coordinates
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinate at position `i`, if any
    pub fn get(&self, i: usize) -> Option<Coord> {
        self.coords.get(i).copied()
    }

    /// Iterate over the coordinates in visiting order
    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter()
    }

    /// The full ordered coordinate slice
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords
    }
}

/// Path generator over one exclusively borrowed grid
pub struct ZigzagTraversal<'a> {
    grid: &'a Grid,
}

impl<'a> ZigzagTraversal<'a> {
    /// Bind the engine to a grid
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Run the state machine to completion and return the path.
    ///
    /// Bounded by a step budget; a grid that passed construction-time
    /// validation can never exhaust it.
    pub fn run(&self) -> Result<Path, PlaceError> {
        let n = self.grid.size();
        let budget = 4 * n * n + 16;
        let mut cursor = Cursor::start(self.grid);
        let mut coords = Vec::with_capacity(self.grid.usable_count());
        let mut steps = 0usize;

        loop {
            if steps > budget {
                return Err(PlaceError::DeadEnd { cursor });
            }
            match cursor.step(self.grid) {
                Step::Visit(coord) => coords.push(coord),
                Step::Skip | Step::PairDone => {}
                Step::Bypass { rows } => {
                    if debug_enabled() {
                        eprintln!(
                            "SCAN: bypassed {} bridged rows in pair anchored at column {}",
                            rows, cursor.x
                        );
                    }
                }
                Step::Finished => break,
            }
            steps += 1;
        }

        debug_assert_eq!(coords.len(), self.grid.usable_count());
        Ok(Path::new(coords))
    }
}

/// Generate the canonical zigzag path for a grid
pub fn scan(grid: &Grid) -> Result<Path, PlaceError> {
    ZigzagTraversal::new(grid).run()
}
