//! Test fixtures for lode development.
//!
//! Provides fixed-alignment byte buffers ([`AlignedBuf`]) and a
//! [`RegionPool`] that builds region tables of arbitrary lengths, so tests
//! can reason about padding without depending on where the stack or heap
//! happened to place a buffer.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use lode_core::Region;

/// Alignment guaranteed for every fixture buffer.
pub const BUF_ALIGN: usize = 16;

/// Largest region a [`RegionPool`] can hand out.
pub const MAX_REGION_BYTES: usize = 512;

/// Byte buffer whose first byte is [`BUF_ALIGN`]-aligned.
#[derive(Clone)]
#[repr(C, align(16))]
pub struct AlignedBuf<const N: usize>(pub [u8; N]);

impl<const N: usize> AlignedBuf<N> {
    pub fn new() -> Self {
        Self([0; N])
    }

    /// Region covering the whole buffer.
    pub fn region(&mut self) -> Region<'_> {
        Region::from_bytes(&mut self.0)
    }

    /// Region covering the first `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len > N`.
    pub fn region_prefix(&mut self, len: usize) -> Region<'_> {
        Region::from_bytes(&mut self.0[..len])
    }
}

impl<const N: usize> Default for AlignedBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns one aligned buffer per requested region length.
///
/// ```
/// use lode_test_utils::RegionPool;
///
/// let mut pool = RegionPool::new(&[64, 64, 16]);
/// let table = pool.regions();
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[2].len(), 16);
/// ```
pub struct RegionPool {
    bufs: Vec<AlignedBuf<MAX_REGION_BYTES>>,
    lens: Vec<usize>,
}

impl RegionPool {
    /// # Panics
    ///
    /// Panics if any length exceeds [`MAX_REGION_BYTES`].
    pub fn new(lens: &[usize]) -> Self {
        assert!(
            lens.iter().all(|&len| len <= MAX_REGION_BYTES),
            "region length exceeds MAX_REGION_BYTES"
        );
        Self {
            bufs: vec![AlignedBuf::new(); lens.len()],
            lens: lens.to_vec(),
        }
    }

    /// Requested lengths, in table order.
    pub fn lens(&self) -> &[usize] {
        &self.lens
    }

    /// A fresh region table over the pool's buffers, in the order the
    /// lengths were given.
    pub fn regions(&mut self) -> Vec<Region<'_>> {
        self.bufs
            .iter_mut()
            .zip(&self.lens)
            .map(|(buf, &len)| buf.region_prefix(len))
            .collect()
    }
}
