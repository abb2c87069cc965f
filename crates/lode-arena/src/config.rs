//! Arena configuration parameters.

use lode_core::is_valid_align;

use crate::error::ArenaError;
use crate::state::RegionState;

/// Configuration for the arena allocator.
///
/// Checked by [`Arena::with_config`](crate::Arena::with_config); all values
/// are immutable after the arena is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Bytes reserved at the start of every usable region for bookkeeping.
    ///
    /// Regions shorter than this are unusable and contribute nothing to the
    /// arena's counts. Default: `size_of::<RegionState>()` (two words).
    pub header_overhead: usize,

    /// Alignment used by [`Arena::allocate`](crate::Arena::allocate).
    ///
    /// Default: `align_of::<usize>()`. Must be a non-zero power of two.
    pub default_align: usize,
}

impl ArenaConfig {
    /// Default header overhead: the size of one region cursor.
    pub const DEFAULT_HEADER_OVERHEAD: usize = std::mem::size_of::<RegionState>();

    /// Default ("natural") allocation alignment.
    pub const DEFAULT_ALIGN: usize = std::mem::align_of::<usize>();

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            header_overhead: Self::DEFAULT_HEADER_OVERHEAD,
            default_align: Self::DEFAULT_ALIGN,
        }
    }

    /// Override the header overhead.
    pub const fn with_header_overhead(mut self, header_overhead: usize) -> Self {
        self.header_overhead = header_overhead;
        self
    }

    /// Override the default alignment.
    pub const fn with_default_align(mut self, align: usize) -> Self {
        self.default_align = align;
        self
    }

    /// Check that the configured values are usable.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !is_valid_align(self.default_align) {
            return Err(ArenaError::InvalidAlignment {
                align: self.default_align,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_header_is_two_words() {
        let config = ArenaConfig::default();
        assert_eq!(config.header_overhead, 2 * std::mem::size_of::<usize>());
        assert_eq!(config.default_align, std::mem::align_of::<usize>());
    }

    #[test]
    fn default_config_validates() {
        assert!(ArenaConfig::new().validate().is_ok());
    }

    #[test]
    fn builder_overrides_preserved() {
        let config = ArenaConfig::new()
            .with_header_overhead(4)
            .with_default_align(1);
        assert_eq!(config.header_overhead, 4);
        assert_eq!(config.default_align, 1);
    }

    #[test]
    fn non_power_of_two_align_rejected() {
        let err = ArenaConfig::new()
            .with_default_align(12)
            .validate()
            .unwrap_err();
        assert_eq!(err, ArenaError::InvalidAlignment { align: 12 });
    }
}
