//! Cursor traits describing sequence positions and their traversal capability.
//!
//! A cursor is a cheap, freely copyable value addressing a position within
//! some sequence. Two cursors over the same sequence compare equal exactly
//! when they address the same position, which makes a cursor usable as an
//! end sentinel for another cursor of the same type.
//!
//! Traversal strength is expressed as a trait hierarchy rather than a
//! runtime property:
//!
//! - [`Cursor`] - forward movement and position equality
//! - [`BidirectionalCursor`] - adds backward movement
//! - [`RandomAccessCursor`] - adds offset arithmetic, signed distance and
//!   relational ordering
//! - [`ReadCursor`] - produces the value addressed by the cursor
//!
//! Generic code states the weakest bound it needs, and a type advertises a
//! capability by implementing the corresponding trait. Adapters that wrap a
//! cursor implement each trait exactly when the wrapped type does, so a
//! wrapper can never advertise strength its underlying cursor lacks: misuse
//! is a missing-impl error at compile time, not a runtime check.

/// A forward-capable position within a sequence.
///
/// Moving past the sequence's end position is a precondition violation;
/// concrete implementations panic.
pub trait Cursor: Clone + PartialEq {
    /// Moves this cursor to its successor position.
    ///
    /// Returns a reference to `self`, already moved, so calls can be
    /// chained.
    fn advance(&mut self) -> &mut Self;

    /// Advances in place and returns a snapshot taken before the move.
    ///
    /// The snapshot still addresses the original position; `self` addresses
    /// the successor.
    fn post_advance(&mut self) -> Self {
        let snapshot = self.clone();
        self.advance();
        snapshot
    }
}

/// A cursor that can also move backward.
///
/// Moving before the sequence's first position is a precondition violation;
/// concrete implementations panic.
pub trait BidirectionalCursor: Cursor {
    /// Moves this cursor to its predecessor position.
    ///
    /// Returns a reference to `self`, already moved.
    fn retreat(&mut self) -> &mut Self;

    /// Retreats in place and returns a snapshot taken before the move.
    fn post_retreat(&mut self) -> Self {
        let snapshot = self.clone();
        self.retreat();
        snapshot
    }
}

/// A cursor supporting constant-time jumps and position ordering.
///
/// The `PartialOrd` supertrait supplies relational comparison between two
/// cursors; implementations order by position and leave cursors over
/// unrelated sequences unordered.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves this cursor by `offset` positions, forward for positive values
    /// and backward for negative ones.
    ///
    /// Landing outside the sequence (before the first position or past the
    /// end position) is a precondition violation.
    fn advance_by(&mut self, offset: isize) -> &mut Self;

    /// Returns the signed number of positions from `self` to `other`:
    /// positive when `other` lies ahead of `self`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// A cursor that yields the value at its current position.
///
/// `read` takes `&mut self` so that reading may carry side effects (a
/// transforming adapter invokes its stored callable here). Reading at the
/// end position is a precondition violation.
pub trait ReadCursor: Cursor {
    /// The value produced per read.
    type Item;

    /// Produces the value addressed by the cursor.
    fn read(&mut self) -> Self::Item;
}
