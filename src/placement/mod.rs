//! Data-module placement pipeline
//!
//! Classification feeds the grid, the grid feeds the traversal engine, and
//! the writer zips the resulting path with the caller's bit sequence:
//! - Module classifier (pure coordinate -> category mapping)
//! - Matrix grid (owned per-cell state with bounds-checked access)
//! - Zigzag traversal engine (the canonical visiting order)
//! - Bit writer (path x bits -> grid mutation + report)

/// Pure module classification (finder/timing/format/alignment/usable)
pub mod classifier;
/// Dense matrix store with construction-time validation
pub mod grid;
/// Zigzag traversal state machine and path type
pub mod traverse;
/// Bit writer and its report type
pub mod writer;
