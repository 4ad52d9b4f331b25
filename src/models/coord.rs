/// Integer module coordinate within a symbol matrix
///
/// `x` is the column (0 = leftmost), `y` is the row (0 = topmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major index of this coordinate in a matrix of side `size`
    pub fn index(&self, size: usize) -> usize {
        self.y * size + self.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_index() {
        assert_eq!(Coord::new(0, 0).index(21), 0);
        assert_eq!(Coord::new(20, 0).index(21), 20);
        assert_eq!(Coord::new(0, 1).index(21), 21);
        assert_eq!(Coord::new(3, 2).index(21), 45);
    }
}
