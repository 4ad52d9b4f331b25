/// Classification of a single matrix module
///
/// Assigned once at grid construction and immutable afterwards. Priority
/// between overlapping layout features is resolved by the classifier, so
/// every cell carries exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Function pattern (finder, separator, timing) or the fixed dark module
    Reserved,
    /// Format or version information strip
    FormatReserved,
    /// Alignment-pattern block; obstructs the zigzag scan mid-column
    AlignmentBridge,
    /// Eligible to carry a data bit
    Usable,
}

impl Category {
    /// Whether a cell of this category may receive a data bit
    pub fn is_usable(&self) -> bool {
        matches!(self, Category::Usable)
    }

    /// Single-character tag used by the debug map printer
    pub fn tag(&self) -> char {
        match self {
            Category::Reserved => '#',
            Category::FormatReserved => 'F',
            Category::AlignmentBridge => 'A',
            Category::Usable => '.',
        }
    }
}

/// One matrix module: fixed category plus the data bit written into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Layout classification, fixed at construction
    pub category: Category,
    /// Data bit, `None` until the writer assigns it
    pub value: Option<bool>,
}

impl Cell {
    /// Create an unassigned cell of the given category
    pub fn new(category: Category) -> Self {
        Self {
            category,
            value: None,
        }
    }
}
