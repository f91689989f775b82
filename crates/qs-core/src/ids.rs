//! Strongly typed station identifier.

use std::fmt;

/// Index of a station in the simulation's station vector.
///
/// The inner integer is `pub` to allow direct construction from an enumerate
/// index (`StationId(i as u32)`), but callers should prefer [`index`] when
/// reading it back out.
///
/// [`index`]: StationId::index
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct StationId(pub u32);

impl StationId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "station {}", self.0)
    }
}

impl From<StationId> for usize {
    #[inline(always)]
    fn from(id: StationId) -> usize {
        id.0 as usize
    }
}
