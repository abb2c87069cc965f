//! Per-region bump cursors.
//!
//! A [`RegionState`] is the bookkeeping for one usable region: how far the
//! bump pointer has advanced and how many bytes are left behind it. Cursors
//! live in the arena's side table, never inside the region's own memory.

use lode_core::align_up;

/// Bump cursor for one usable region.
///
/// Offsets are relative to the region's base address. The first
/// `header_overhead` bytes are reserved, so a freshly installed cursor
/// starts there rather than at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionState {
    /// Next free offset within the region.
    bump_offset: usize,
    /// Bytes between `bump_offset` and the end of the region.
    remaining: usize,
}

/// Where a request would land inside one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Fit {
    /// Aligned offset the allocation starts at.
    pub(crate) offset: usize,
    /// Bytes skipped between the old cursor and `offset`.
    pub(crate) padding: usize,
}

impl RegionState {
    /// Install a fresh cursor for a region of `len` bytes.
    ///
    /// Returns `None` if the region is too short to hold its own header.
    pub fn install(len: usize, header_overhead: usize) -> Option<Self> {
        let remaining = len.checked_sub(header_overhead)?;
        Some(Self {
            bump_offset: header_overhead,
            remaining,
        })
    }

    /// Offset of the next free byte.
    pub fn bump_offset(&self) -> usize {
        self.bump_offset
    }

    /// Free bytes left in the region, before any alignment padding.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Find the aligned placement for `size` bytes, if it fits.
    ///
    /// `base_addr` is the region's base address; alignment applies to the
    /// absolute address, not the offset. `align` must be a valid alignment.
    pub(crate) fn fit(&self, base_addr: usize, size: usize, align: usize) -> Option<Fit> {
        let cursor_addr = base_addr.checked_add(self.bump_offset)?;
        let offset = align_up(cursor_addr, align)? - base_addr;
        let padding = offset - self.bump_offset;
        let available = self.remaining.checked_sub(padding)?;
        (available >= size).then_some(Fit { offset, padding })
    }

    /// Advance the cursor past an allocation placed by [`fit`](Self::fit).
    ///
    /// Returns the number of bytes consumed, padding included.
    pub(crate) fn commit(&mut self, fit: Fit, size: usize) -> usize {
        let consumed = fit.padding + size;
        debug_assert!(consumed <= self.remaining);
        self.bump_offset = fit.offset + size;
        self.remaining -= consumed;
        consumed
    }
}
