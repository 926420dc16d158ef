//! Runtime errors. Everything else is rejected at build time.

use thiserror::Error;

/// A bounds violation reported by the checked accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum IndexError {
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

impl IndexError {
    /// The offending raw position.
    #[must_use]
    pub const fn index(&self) -> usize {
        match *self {
            IndexError::OutOfBounds { index, .. } => index,
        }
    }

    /// The container length at the time of the access.
    #[must_use]
    pub const fn container_len(&self) -> usize {
        match *self {
            IndexError::OutOfBounds { len, .. } => len,
        }
    }
}

pub type Result<T, E = IndexError> = core::result::Result<T, E>;
