//! The region arena: one allocation surface over many borrowed regions.
//!
//! [`Arena`] walks its region table in order and bump-allocates from the
//! first region with enough aligned space. Nothing is ever freed
//! individually; [`Arena::reset`] reclaims everything at once.
//!
//! ```text
//! Arena
//! ├── &mut [Region]        (caller's table, borrowed)
//! ├── cursors: [Option<RegionState>]   (one per region, None = unusable)
//! └── total / free         (aggregates, maintained incrementally)
//! ```

use std::alloc::Layout;
use std::ptr::NonNull;

use lode_core::{is_valid_align, Region};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::raw;
use crate::state::RegionState;
use crate::usage::RegionUsage;

/// Inline capacity of the cursor table before it spills to the heap.
const INLINE_REGIONS: usize = 8;

/// Lifecycle of an [`Arena`].
///
/// `Closed` until the first [`Arena::reset`]; `Open` forever after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaState {
    /// Constructed but never reset. Allocation fails.
    Closed,
    /// Reset at least once. Allocation is permitted.
    Open,
}

/// Bump allocator over a caller-supplied table of memory regions.
///
/// The arena borrows the table for `'t` and, through each [`Region`], the
/// backing memory for `'m`. It never writes to that memory: bookkeeping is
/// kept in an arena-owned cursor table indexed by region position.
///
/// Every usable region reserves `header_overhead` bytes at its start, so
/// capacity accounting matches a layout where the cursor lives in-band.
///
/// Allocation is first-fit in table order and fully deterministic: the same
/// sequence of requests against the same table always yields the same
/// region and offset choices.
#[derive(Debug)]
pub struct Arena<'t, 'm> {
    regions: &'t mut [Region<'m>],
    /// `None` for regions too short to hold a header, and for every region
    /// before the first reset.
    cursors: SmallVec<[Option<RegionState>; INLINE_REGIONS]>,
    config: ArenaConfig,
    total: usize,
    free: usize,
    state: ArenaState,
}

impl<'t, 'm> Arena<'t, 'm> {
    /// Build a closed arena over `regions` with the default config.
    ///
    /// Performs no writes to region memory and never fails. Both counts are
    /// zero until [`reset`](Self::reset).
    pub fn new(regions: &'t mut [Region<'m>]) -> Self {
        Self::build(regions, ArenaConfig::default())
    }

    /// Build a closed arena with an explicit config.
    ///
    /// Returns [`ArenaError::InvalidAlignment`] if the config's default
    /// alignment is not a power of two.
    pub fn with_config(
        regions: &'t mut [Region<'m>],
        config: ArenaConfig,
    ) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self::build(regions, config))
    }

    fn build(regions: &'t mut [Region<'m>], config: ArenaConfig) -> Self {
        let cursors = SmallVec::from_elem(None, regions.len());
        Self {
            regions,
            cursors,
            config,
            total: 0,
            free: 0,
            state: ArenaState::Closed,
        }
    }

    /// Discard every allocation and reinstall all region cursors.
    ///
    /// Regions shorter than the header overhead are marked unusable and
    /// contribute nothing to either count. May be called any number of
    /// times; each call invalidates every pointer returned since the last
    /// one. Using such a pointer afterwards is not detected.
    ///
    /// Both counts saturate at `usize::MAX`, which only raw-parts tables
    /// that overlap or span the address space can reach.
    pub fn reset(&mut self) {
        let header = self.config.header_overhead;
        self.total = 0;
        self.free = 0;
        let mut usable = 0usize;

        for (region, cursor) in self.regions.iter().zip(self.cursors.iter_mut()) {
            *cursor = RegionState::install(region.len(), header);
            if let Some(state) = cursor {
                usable += 1;
                // Overlapping raw-parts tables can exceed the address space.
                self.total = self.total.saturating_add(region.len());
                self.free = self.free.saturating_add(state.remaining());
            }
        }

        self.state = ArenaState::Open;
        debug!(
            regions = self.regions.len(),
            usable,
            total = self.total,
            free = self.free,
            "arena reset"
        );
    }

    /// Allocate `size` bytes at the configured default alignment.
    pub fn allocate(&mut self, size: usize) -> Result<NonNull<u8>, ArenaError> {
        self.allocate_aligned(size, self.config.default_align)
    }

    /// Allocate space for `layout`.
    pub fn allocate_layout(&mut self, layout: Layout) -> Result<NonNull<u8>, ArenaError> {
        self.allocate_aligned(layout.size(), layout.align())
    }

    /// Allocate `size` bytes whose address is a multiple of `align`.
    ///
    /// Scans regions in table order and takes the first whose remaining
    /// capacity, minus the padding needed to reach `align`, is at least
    /// `size`. Padding is charged to the region and to the free count.
    ///
    /// # Errors
    ///
    /// - [`ArenaError::Uninitialized`] before the first [`reset`](Self::reset).
    /// - [`ArenaError::InvalidAlignment`] if `align` is not a power of two.
    /// - [`ArenaError::Exhausted`] if no region fits. Counts and cursors
    ///   are left untouched.
    pub fn allocate_aligned(
        &mut self,
        size: usize,
        align: usize,
    ) -> Result<NonNull<u8>, ArenaError> {
        if self.state != ArenaState::Open {
            return Err(ArenaError::Uninitialized);
        }
        if !is_valid_align(align) {
            return Err(ArenaError::InvalidAlignment { align });
        }

        for (index, (region, slot)) in self
            .regions
            .iter()
            .zip(self.cursors.iter_mut())
            .enumerate()
        {
            let Some(cursor) = slot else { continue };
            let Some(fit) = cursor.fit(region.base_addr(), size, align) else {
                continue;
            };
            // SAFETY: `fit` placed `size` bytes at `fit.offset` inside this
            // region, so `fit.offset <= region.len()`.
            #[allow(unsafe_code)]
            let ptr = unsafe { raw::offset_ptr(region.base(), fit.offset) };
            let consumed = cursor.commit(fit, size);
            self.free = self.free.saturating_sub(consumed);
            trace!(
                region = index,
                offset = fit.offset,
                padding = fit.padding,
                size,
                free = self.free,
                "arena allocate"
            );
            return Ok(ptr);
        }

        debug!(requested = size, align, free = self.free, "arena exhausted");
        Err(ArenaError::Exhausted {
            requested: size,
            align,
        })
    }

    /// Bytes across all usable regions, headers included.
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Bytes still available for allocation, before alignment padding.
    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Bytes consumed since the last reset: headers, padding, allocations.
    pub fn used_count(&self) -> usize {
        self.total - self.free
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ArenaState {
        self.state
    }

    /// `true` once [`reset`](Self::reset) has run.
    pub fn is_open(&self) -> bool {
        self.state == ArenaState::Open
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// The region table, in allocation order.
    pub fn regions(&self) -> &[Region<'m>] {
        &*self.regions
    }

    /// Number of regions in the table, usable or not.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of regions that passed the header check on the last reset.
    pub fn usable_region_count(&self) -> usize {
        self.cursors.iter().filter(|c| c.is_some()).count()
    }

    /// Index of the first region containing `ptr`.
    pub fn owner_of<T: ?Sized>(&self, ptr: *const T) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(ptr))
    }

    /// Snapshot of one region's accounting, or `None` if `index` is out of
    /// range.
    pub fn region_usage(&self, index: usize) -> Option<RegionUsage> {
        let region = self.regions.get(index)?;
        let cursor = self.cursors.get(index)?;
        Some(RegionUsage::new(
            index,
            region.len(),
            self.config.header_overhead,
            cursor.as_ref(),
        ))
    }

    /// Per-region accounting for the whole table, in table order.
    pub fn usage(&self) -> impl Iterator<Item = RegionUsage> + '_ {
        let header = self.config.header_overhead;
        self.regions
            .iter()
            .zip(self.cursors.iter())
            .enumerate()
            .map(move |(index, (region, cursor))| {
                RegionUsage::new(index, region.len(), header, cursor.as_ref())
            })
    }
}
