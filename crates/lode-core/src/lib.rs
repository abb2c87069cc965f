//! Core types for the lode arena allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Region`] descriptor that callers hand to an arena, and the
//! address arithmetic shared by the allocator and its tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod align;
pub mod region;

pub use align::{align_up, is_valid_align};
pub use region::Region;
