//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
///
/// None of these leave the arena in a modified state: a failed call changes
/// neither the byte counts nor any region cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// `allocate` was called before the first `reset`.
    Uninitialized,
    /// No usable region has enough aligned remaining capacity.
    ///
    /// Covers both "every region is already full" and "the request is
    /// larger than any region could ever hold".
    Exhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Alignment requested, in bytes.
        align: usize,
    },
    /// The alignment is zero or not a power of two.
    InvalidAlignment {
        /// The rejected alignment.
        align: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "arena used before reset"),
            Self::Exhausted { requested, align } => {
                write!(
                    f,
                    "arena exhausted: no region can hold {requested} bytes at alignment {align}"
                )
            }
            Self::InvalidAlignment { align } => {
                write!(f, "invalid alignment {align}: must be a non-zero power of two")
            }
        }
    }
}

impl Error for ArenaError {}
