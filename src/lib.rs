#![no_std]

//! SnugVec: a contiguous growable sequence with checked access and snug
//! capacity.
//!
//! `SnugVec<T>` is a dynamic array with three deliberate departures from
//! the usual growable-vector recipe:
//!
//! - **Checked everything**: indexed access, popping, positional
//!   insert/erase, and cursor dereference all return `Result` with a
//!   precise [`Error`] instead of panicking.
//! - **Snug capacity**: every [`pop`](SnugVec::pop) reallocates the buffer
//!   down to exactly the new length. Pops are O(len) and the container
//!   never carries slack. Growth still doubles (`2 * capacity + 1`), so
//!   pushes stay amortized O(1).
//! - **Forward cursors**: traversal and positional mutation go through a
//!   [`Cursor`]/[`CursorMut`] pair that snapshots the end boundary when
//!   issued. Advancing past the boundary silently saturates; only
//!   dereferencing there is an error.
//!
//! # Example
//!
//! ```
//! use snug_vec::{snug_vec, SnugVec};
//!
//! let mut v = snug_vec![1, 2, 3];
//! v.push(4);
//!
//! let at = v.cursor_end() - v.cursor();
//! v.insert(at, 5)?;
//! assert_eq!(v.to_string(), "[1, 2, 3, 4, 5]");
//!
//! assert_eq!(v.pop(), Ok(5));
//! assert_eq!(v.capacity(), v.len());
//! # Ok::<(), snug_vec::Error>(())
//! ```
//!
//! # Cursors and reallocation
//!
//! A cursor is a weak view into the container's current buffer. Any
//! operation that can move the storage (`push`, `insert`, `pop`,
//! `shrink_to_fit`, assignment) invalidates every cursor issued before
//! it. Here that contract is enforced by the borrow checker rather than
//! left to the caller: cursors borrow the container, so code that would
//! use a stale cursor does not compile. The flip side is that a cursor
//! cannot be held across a mutation; take its offset (cursor
//! subtraction) first and pass that to [`insert`](SnugVec::insert) /
//! [`erase`](SnugVec::erase).
//!
//! # Gotchas
//!
//! - **Single-threaded by design**: there is no internal synchronization.
//!   `SnugVec` is `Send` when `T` is, but sharing one instance across
//!   threads requires external locking like any `&mut`-based structure.
//! - **Pop is not cheap**: the eager shrink trades pop performance for
//!   memory tightness. Use [`clear`](SnugVec::clear) (which keeps
//!   capacity) when draining for reuse.

extern crate alloc;

mod cursor;
mod error;
mod vec;

pub use cursor::{Cursor, CursorMut};
pub use error::Error;
pub use vec::SnugVec;

/// Constructs a [`SnugVec`] from a list of elements, like `vec!`.
///
/// Length and capacity both equal the number of elements given. The
/// `[value; n]` form clones `value` `n` times.
///
/// # Example
///
/// ```
/// use snug_vec::snug_vec;
///
/// let v = snug_vec![1, 2, 3];
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = snug_vec![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! snug_vec {
    () => {
        $crate::SnugVec::from([])
    };
    ($value:expr; $n:expr) => {{
        let value = $value;
        let n: usize = $n;
        (0..n)
            .map(|_| ::core::clone::Clone::clone(&value))
            .collect::<$crate::SnugVec<_>>()
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::SnugVec::from([$($value),+])
    };
}
