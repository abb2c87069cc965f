//! lode: a region-based, no-reclaim arena allocator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the lode sub-crates. For most users, adding `lode` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lode::prelude::*;
//!
//! // Two caller-owned buffers become one allocation surface.
//! let mut boot = [0u8; 128];
//! let mut scratch = [0u8; 512];
//! let mut table = [Region::from_bytes(&mut boot), Region::from_bytes(&mut scratch)];
//!
//! let mut arena = Arena::new(&mut table);
//! assert_eq!(arena.allocate(8), Err(ArenaError::Uninitialized));
//!
//! arena.reset();
//! assert_eq!(arena.total_count(), 128 + 512);
//!
//! let p = arena.allocate_layout(std::alloc::Layout::new::<u64>()).unwrap();
//! assert_eq!(p.as_ptr().addr() % std::mem::align_of::<u64>(), 0);
//!
//! // Nothing is freed individually; reset reclaims everything.
//! let free = arena.free_count();
//! arena.reset();
//! assert!(arena.free_count() > free);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`region`] | `lode-core` | `Region` descriptors and alignment helpers |
//! | [`arena`] | `lode-arena` | `Arena`, config, errors, usage snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Region descriptors and alignment arithmetic (`lode-core`).
pub use lode_core as region;

/// The arena allocator (`lode-arena`).
///
/// [`arena::Arena`] is also available in the [`prelude`].
pub use lode_arena as arena;

/// Common imports for typical lode usage.
///
/// ```rust
/// use lode::prelude::*;
/// ```
pub mod prelude {
    pub use lode_arena::{Arena, ArenaConfig, ArenaError, ArenaState, RegionUsage};
    pub use lode_core::Region;
}
