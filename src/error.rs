//! Error type for fallible container and cursor operations.

/// Error returned by the checked operations on [`SnugVec`] and its cursors.
///
/// Every failure is immediate and leaves the container untouched; nothing is
/// retried or recovered internally.
///
/// [`SnugVec`]: crate::SnugVec
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Pop was called on a container with no live elements.
    #[error("pop from an empty sequence")]
    Empty,

    /// Indexed access past the last live element.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// An insert/erase offset that does not name a valid position.
    #[error("cursor offset {offset} out of bounds for length {len}")]
    CursorOutOfBounds {
        /// The signed offset from the front of the container.
        offset: isize,
        /// The container length at the time of the call.
        len: usize,
    },

    /// A cursor was dereferenced while sitting at its end boundary.
    #[error("cursor dereferenced at the end of its sequence")]
    CursorAtEnd,
}
