//! Error types for container and cursor operations.
//!
//! Every fallible operation validates its inputs before touching storage,
//! so an `Err` always leaves the container exactly as it was.

/// Failure of a container or cursor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The container holds no element to remove.
    #[error("container is empty")]
    EmptyContainer,
    /// The position is the end marker where an element was required, was
    /// erased, or lies outside the container's bounds.
    #[error("invalid position")]
    InvalidPosition,
    /// Dereference or navigation left the `[begin, end]` range.
    #[error("position out of range")]
    OutOfRange,
}

/// Result alias for container operations.
pub type Result<T> = core::result::Result<T, Error>;
