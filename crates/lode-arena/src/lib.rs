//! Region-based, no-reclaim arena allocation.
//!
//! Presents a single bump-allocated surface over a caller-supplied table of
//! disjoint memory regions. Intended for startup-time allocation in
//! environments where a general-purpose heap is unavailable or unwelcome.
//! Pointer construction is `unsafe` and lives in `raw.rs`; its one call site
//! in `arena.rs` carries a `// SAFETY:` comment.
//!
//! # Architecture
//!
//! ```text
//! Arena (orchestrator)
//! ├── &mut [Region]  (caller-owned table; lode-core)
//! ├── RegionState × N (arena-owned bump cursors, one per region)
//! ├── ArenaConfig     (header overhead, default alignment)
//! └── total / free    (aggregate byte counts)
//! ```
//!
//! # Reclaim model
//!
//! There is no per-allocation free. [`Arena::reset`] discards every
//! allocation at once and is the only way to recover space. Pointers from
//! before a reset must not be used after it; this is not checked.
//!
//! # Example
//!
//! ```
//! use lode_arena::Arena;
//! use lode_core::Region;
//!
//! let mut first = [0u8; 64];
//! let mut second = [0u8; 256];
//! let mut table = [Region::from_bytes(&mut first), Region::from_bytes(&mut second)];
//!
//! let mut arena = Arena::new(&mut table);
//! arena.reset();
//!
//! let before = arena.free_count();
//! let p = arena.allocate_aligned(32, 1).unwrap();
//! assert!(arena.owner_of(p.as_ptr()).is_some());
//! assert_eq!(arena.free_count(), before - 32);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
mod raw;
pub mod state;
pub mod usage;

// Public re-exports for the primary API surface.
pub use arena::{Arena, ArenaState};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use state::RegionState;
pub use usage::RegionUsage;
