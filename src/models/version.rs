use crate::error::PlaceError;

/// QR symbol version (1-40, Model 2 sizes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Create a version, rejecting numbers outside 1..=40
    pub fn new(number: u8) -> Result<Self, PlaceError> {
        if (1..=40).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PlaceError::InvalidVersion(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the symbol side length in modules (17 + 4 * version)
    pub fn size(&self) -> usize {
        17 + 4 * self.0 as usize
    }

    /// Recover the version from a side length, if it matches one exactly
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || (size - 17) % 4 != 0 {
            return None;
        }
        let number = (size - 17) / 4;
        if number > 40 {
            return None;
        }
        Some(Self(number as u8))
    }
}
