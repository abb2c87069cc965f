//! Per-region accounting snapshots.

use crate::state::RegionState;

/// Point-in-time accounting for one region of an arena.
///
/// For an unusable region (shorter than the header, or any region before
/// the first reset) every byte count except `len` is zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionUsage {
    /// Position in the region table.
    pub index: usize,
    /// Raw length of the region.
    pub len: usize,
    /// Whether the region holds a cursor.
    pub usable: bool,
    /// Bytes reserved for the header.
    pub reserved: usize,
    /// Bytes handed out since the last reset, alignment padding included.
    pub used: usize,
    /// Bytes still available.
    pub remaining: usize,
}

impl RegionUsage {
    pub(crate) fn new(
        index: usize,
        len: usize,
        header_overhead: usize,
        cursor: Option<&RegionState>,
    ) -> Self {
        match cursor {
            Some(state) => Self {
                index,
                len,
                usable: true,
                reserved: header_overhead,
                used: len - header_overhead - state.remaining(),
                remaining: state.remaining(),
            },
            None => Self {
                index,
                len,
                usable: false,
                reserved: 0,
                used: 0,
                remaining: 0,
            },
        }
    }
}
