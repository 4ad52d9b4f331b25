pub mod cell;
pub mod coord;
pub mod version;

pub use cell::{Category, Cell};
pub use coord::Coord;
pub use version::Version;
