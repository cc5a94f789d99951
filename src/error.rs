//! Error taxonomy shared by every container in this crate.

use thiserror::Error;

/// Errors returned by the ordered containers' fallible operations.
///
/// Mutators with a natural boolean outcome (`insert`, `erase`, `remove`)
/// continue to return `bool` rather than a `Result`; this enum is
/// reserved for operations with no sensible boolean reading, and for the
/// internal-invariant check that backs [`MapError::Corruption`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MapError {
    /// Insertion targeted a key that is already present.
    #[error("key already present")]
    DuplicateKey,

    /// Insertion targeted the reserved sentinel key.
    #[error("key is reserved and cannot be inserted")]
    ReservedKey,

    /// A positional anchor (key or index) named by the caller is absent.
    #[error("key not found")]
    NotFound,

    /// An index-based accessor was given an index at or beyond the size.
    #[error("index out of range")]
    OutOfRange,

    /// An internal structural invariant was violated mid-operation.
    ///
    /// This should never happen in correct usage; when it does, the
    /// container's state for the affected subtree is no longer trusted.
    #[error("internal structure corrupted: {0}")]
    Corruption(String),
}
