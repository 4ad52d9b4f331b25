//! Module classification: maps a coordinate and matrix size to a category
//!
//! Pure functions only. Priority between overlapping layout features follows
//! the standard layout: finder blocks win over timing, timing over format
//! strips, format strips over alignment blocks. First match decides.

use crate::models::{Category, Version};

/// Classify one module of a standard-layout matrix of side `size`.
///
/// Total over `0 <= x, y < size` for any odd `size >= 9`. Sizes that match a
/// real version (`17 + 4v`) get that version's alignment blocks and, from
/// version 7 up, the version-information strips; other sizes get neither.
pub fn classify(x: usize, y: usize, size: usize) -> Category {
    if in_finder_area(x, y, size) {
        return Category::Reserved;
    }
    if x == 6 || y == 6 {
        return Category::Reserved;
    }
    // Fixed dark module, always present above the bottom-left finder
    if x == 8 && y == size - 8 {
        return Category::Reserved;
    }
    if in_format_strip(x, y, size) {
        return Category::FormatReserved;
    }
    if in_version_strip(x, y, size) {
        return Category::FormatReserved;
    }
    if in_alignment_block(x, y, size) {
        return Category::AlignmentBridge;
    }
    Category::Usable
}

/// Finder patterns plus their separators: three 8x8 corner blocks
fn in_finder_area(x: usize, y: usize, size: usize) -> bool {
    let top_left = x <= 7 && y <= 7;
    let top_right = x >= size - 8 && y <= 7;
    let bottom_left = x <= 7 && y >= size - 8;
    top_left || top_right || bottom_left
}

/// Format-information bands along row 8 and column 8
fn in_format_strip(x: usize, y: usize, size: usize) -> bool {
    if x == 8 && (y <= 8 || y >= size - 8) {
        return true;
    }
    if y == 8 && (x <= 8 || x >= size - 8) {
        return true;
    }
    false
}

/// Version-information blocks (3x6 top-right, 6x3 bottom-left), v7 and up
fn in_version_strip(x: usize, y: usize, size: usize) -> bool {
    match Version::from_size(size) {
        Some(v) if v.number() >= 7 => {}
        _ => return false,
    }
    let top_right = x >= size - 11 && x <= size - 9 && y <= 5;
    let bottom_left = x <= 5 && y >= size - 11 && y <= size - 9;
    top_right || bottom_left
}

/// Membership in any 5x5 alignment block of the matching version
fn in_alignment_block(x: usize, y: usize, size: usize) -> bool {
    let version = match Version::from_size(size) {
        Some(v) => v,
        None => return false,
    };
    let centers = alignment_centers(version);
    for &cx in &centers {
        for &cy in &centers {
            // The three finder corners never host an alignment pattern
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if in_tl || in_tr || in_bl {
                continue;
            }
            if x.abs_diff(cx) <= 2 && y.abs_diff(cy) <= 2 {
                return true;
            }
        }
    }
    false
}

/// Alignment pattern center coordinates for a given version.
///
/// First center is always 6, last is `size - 7`, interior centers spaced by
/// an even step derived from the version.
pub fn alignment_centers(version: Version) -> Vec<usize> {
    let number = version.number();
    if number == 1 {
        return Vec::new();
    }
    let num_align = (number / 7) + 2;
    let size = version.size();
    let step = if number == 32 {
        26
    } else {
        let numerator = number as usize * 4 + num_align as usize * 2 + 1;
        let denom = num_align as usize * 2 - 2;
        numerator / denom * 2
    };

    let mut centers = vec![0usize; num_align as usize];
    centers[0] = 6;
    let mut pos = size as isize - 7;
    for i in (1..num_align).rev() {
        centers[i as usize] = pos as usize;
        pos -= step as isize;
    }
    centers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finder_corners_reserved() {
        // Version 1, size 21
        assert_eq!(classify(0, 0, 21), Category::Reserved);
        assert_eq!(classify(7, 7, 21), Category::Reserved);
        assert_eq!(classify(20, 0, 21), Category::Reserved);
        assert_eq!(classify(13, 7, 21), Category::Reserved);
        assert_eq!(classify(0, 20, 21), Category::Reserved);
        // Bottom-right corner has no finder
        assert_eq!(classify(20, 20, 21), Category::Usable);
    }

    #[test]
    fn test_timing_reserved() {
        assert_eq!(classify(6, 10, 21), Category::Reserved);
        assert_eq!(classify(10, 6, 21), Category::Reserved);
    }

    #[test]
    fn test_dark_module_reserved() {
        assert_eq!(classify(8, 13, 21), Category::Reserved);
    }

    #[test]
    fn test_format_strips() {
        assert_eq!(classify(8, 0, 21), Category::FormatReserved);
        assert_eq!(classify(8, 8, 21), Category::FormatReserved);
        assert_eq!(classify(0, 8, 21), Category::FormatReserved);
        assert_eq!(classify(8, 20, 21), Category::FormatReserved);
        assert_eq!(classify(20, 8, 21), Category::FormatReserved);
        // Adjacent data cell just past the band
        assert_eq!(classify(9, 9, 21), Category::Usable);
    }

    #[test]
    fn test_alignment_block_v2() {
        // Version 2 (size 25): single alignment pattern centered at (18, 18)
        for y in 16..=20 {
            for x in 16..=20 {
                assert_eq!(classify(x, y, 25), Category::AlignmentBridge);
            }
        }
        assert_eq!(classify(15, 18, 25), Category::Usable);
        assert_eq!(classify(18, 21, 25), Category::Usable);
    }

    #[test]
    fn test_timing_wins_over_alignment() {
        // Version 7: the block centered at (6, 22) straddles the timing column
        assert_eq!(classify(6, 22, 45), Category::Reserved);
        assert_eq!(classify(5, 22, 45), Category::AlignmentBridge);
        assert_eq!(classify(8, 24, 45), Category::AlignmentBridge);
    }

    #[test]
    fn test_version_strips_v7() {
        // Top-right 3x6 block
        assert_eq!(classify(34, 0, 45), Category::FormatReserved);
        assert_eq!(classify(36, 5, 45), Category::FormatReserved);
        // Bottom-left 6x3 block
        assert_eq!(classify(0, 34, 45), Category::FormatReserved);
        assert_eq!(classify(5, 36, 45), Category::FormatReserved);
        // Absent below version 7
        assert_eq!(classify(24, 0, 41), Category::Usable);
    }

    #[test]
    fn test_alignment_centers() {
        assert!(alignment_centers(Version::new(1).unwrap()).is_empty());
        assert_eq!(alignment_centers(Version::new(2).unwrap()), vec![6, 18]);
        assert_eq!(alignment_centers(Version::new(7).unwrap()), vec![6, 22, 38]);
    }

    #[test]
    fn test_total_over_generalized_size() {
        // Non-version odd size: classification stays total, no alignment
        for y in 0..23 {
            for x in 0..23 {
                let cat = classify(x, y, 23);
                assert_ne!(cat, Category::AlignmentBridge);
            }
        }
    }
}
