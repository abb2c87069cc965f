//! Low-level pointer arithmetic for handing out region addresses.
//!
//! This module holds the crate's `unsafe` helpers. Each one documents its
//! contract under `# Safety`, and every call carries a `// SAFETY:` comment
//! tying it to the [`Region`] contract.
//!
//! [`Region`]: lode_core::Region

#![allow(unsafe_code)]

use std::ptr::NonNull;

/// Pointer `offset` bytes past `base`.
///
/// The arena never dereferences the result, so plain address arithmetic is
/// enough; provenance is carried over from `base`.
///
/// # Safety
///
/// `base` must be the base of a [`Region`](lode_core::Region) and `offset`
/// must not exceed that region's length. The region contract guarantees
/// `base + len` does not overflow, so the result cannot wrap to null.
pub(crate) unsafe fn offset_ptr(base: NonNull<u8>, offset: usize) -> NonNull<u8> {
    let ptr = base.as_ptr().wrapping_add(offset);
    // SAFETY: `base` is non-null and `base + offset <= base + len` does not
    // overflow, per the caller's contract.
    unsafe { NonNull::new_unchecked(ptr) }
}
