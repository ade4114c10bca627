//! Strongly typed agent identifier.
//!
//! `FishId` is the index of a fish in the population `Vec`.  The inner integer
//! is `pub` to allow direct indexing via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a fish in population storage.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FishId(pub u32);

impl FishId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: FishId = FishId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for FishId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for FishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FishId({})", self.0)
    }
}

impl From<FishId> for usize {
    #[inline(always)]
    fn from(id: FishId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for FishId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<FishId, Self::Error> {
        u32::try_from(n).map(FishId)
    }
}
