//! Benchmark profiles and utilities for the lode arena allocator.
//!
//! Provides pre-built [`BootProfile`]s for benchmarking and examples:
//!
//! - [`startup_profile`]: a handful of mid-sized regions and a mixed burst
//!   of small requests, the shape of a typical init phase
//! - [`fragmented_profile`]: many small regions, a few of them too short to
//!   hold a header, and requests that force fall-through
//! - [`request_mix`]: deterministic (size, alignment) sequence via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lode_test_utils::{RegionPool, MAX_REGION_BYTES};

/// A region table shape plus the requests replayed against it.
#[derive(Clone, Debug)]
pub struct BootProfile {
    /// Region lengths, in table order.
    pub region_lens: Vec<usize>,
    /// `(size, align)` requests, in order.
    pub requests: Vec<(usize, usize)>,
}

impl BootProfile {
    /// Backing buffers for this profile's region table.
    pub fn pool(&self) -> RegionPool {
        RegionPool::new(&self.region_lens)
    }

    /// Sum of every requested size, ignoring alignment padding.
    pub fn requested_bytes(&self) -> usize {
        self.requests.iter().map(|&(size, _)| size).sum()
    }
}

/// Eight full-size regions and 64 requests.
pub fn startup_profile(seed: u64) -> BootProfile {
    BootProfile {
        region_lens: vec![MAX_REGION_BYTES; 8],
        requests: request_mix(64, 48, seed),
    }
}

/// 32 regions cycling through 8, 40, 96 and 200 bytes, and 128 requests.
pub fn fragmented_profile(seed: u64) -> BootProfile {
    let region_lens = [8, 40, 96, 200].iter().copied().cycle().take(32).collect();
    BootProfile {
        region_lens,
        requests: request_mix(128, 64, seed),
    }
}

/// Generate `n` deterministic `(size, align)` requests.
///
/// Sizes fall in `1..=max_size`; alignments are 1, 2, 4, 8 or 16.
pub fn request_mix(n: usize, max_size: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407) | 1);
            let size = (state >> 33) as usize % max_size.max(1) + 1;
            let align = 1usize << ((state >> 13) % 5);
            (size, align)
        })
        .collect()
}
