//! Caller-supplied memory regions.
//!
//! A [`Region`] describes one contiguous block of backing memory that an
//! arena may carve allocations out of. The region never owns its memory:
//! it borrows it for `'m`, so an arena built over a table of regions cannot
//! outlive the buffers behind them.

use std::fmt;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

/// One contiguous block of caller-owned memory.
///
/// Stores the base address and byte length verbatim. A zero-length region
/// is valid; it simply never contains any address.
///
/// Regions are not `Clone`: each one carries the exclusive borrow of its
/// backing buffer, so the same memory cannot be registered twice through
/// safe code.
pub struct Region<'m> {
    base: NonNull<u8>,
    len: usize,
    _memory: PhantomData<&'m mut [MaybeUninit<u8>]>,
}

impl<'m> Region<'m> {
    /// Describe the memory behind `buf`. The buffer may be uninitialised.
    pub fn new(buf: &'m mut [MaybeUninit<u8>]) -> Self {
        Self {
            base: NonNull::from(&mut *buf).cast(),
            len: buf.len(),
            _memory: PhantomData,
        }
    }

    /// Describe the memory behind an initialised byte buffer.
    pub fn from_bytes(buf: &'m mut [u8]) -> Self {
        Self {
            base: NonNull::from(&mut *buf).cast(),
            len: buf.len(),
            _memory: PhantomData,
        }
    }

    /// Describe `len` bytes starting at `base`.
    ///
    /// # Safety
    ///
    /// For the whole of `'m`:
    /// - `base..base + len` must be valid for reads and writes and must not
    ///   be accessed except through pointers handed out by an arena built
    ///   over this region;
    /// - `base as usize + len` must not overflow.
    ///
    /// A region that is only used for accounting (nothing ever dereferences
    /// the addresses an arena returns for it) may use any `base` satisfying
    /// the overflow requirement.
    #[allow(unsafe_code)]
    pub unsafe fn from_raw_parts(base: NonNull<u8>, len: usize) -> Self {
        Self {
            base,
            len,
            _memory: PhantomData,
        }
    }

    /// First byte of the region.
    pub fn base(&self) -> NonNull<u8> {
        self.base
    }

    /// Numeric address of the first byte.
    pub fn base_addr(&self) -> usize {
        self.base.as_ptr().addr()
    }

    /// One past the last byte, as an address.
    pub fn end_addr(&self) -> usize {
        self.base_addr() + self.len
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for a zero-length region.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `ptr` points into this region:
    /// `base <= ptr < base + len`.
    pub fn contains<T: ?Sized>(&self, ptr: *const T) -> bool {
        let addr = ptr.cast::<u8>().addr();
        addr >= self.base_addr() && addr - self.base_addr() < self.len
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("base", &self.base)
            .field("len", &self.len)
            .finish()
    }
}
