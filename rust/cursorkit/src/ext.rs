//! Extension trait for fluent adapter construction.

use crate::clamp::{BidirectionalOnly, ForwardOnly};
use crate::cursor::{BidirectionalCursor, Cursor, ReadCursor};
use crate::iter::CursorIter;
use crate::transform::TransformCursor;

/// Adapter constructors available on every cursor.
pub trait CursorExt: Cursor {
    /// Wraps this cursor in a [`TransformCursor`] that applies `transform`
    /// on every read.
    fn transformed<F, R>(self, transform: F) -> TransformCursor<Self, F>
    where
        F: FnMut(&mut Self) -> R,
    {
        TransformCursor::new(self, transform)
    }

    /// Bridges the range from this cursor up to `end` into an iterator.
    ///
    /// `end` may be this cursor's own type or any sentinel type it compares
    /// equal against.
    fn iter_to<S>(self, end: S) -> CursorIter<Self, S>
    where
        Self: ReadCursor + PartialEq<S>,
    {
        CursorIter::new(self, end)
    }

    /// Clamps this cursor to forward traversal.
    fn forward_only(self) -> ForwardOnly<Self> {
        ForwardOnly::new(self)
    }

    /// Clamps this cursor to bidirectional traversal.
    fn bidirectional_only(self) -> BidirectionalOnly<Self>
    where
        Self: BidirectionalCursor,
    {
        BidirectionalOnly::new(self)
    }
}

impl<C: Cursor> CursorExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::SliceCursor;

    #[test]
    fn test_fluent_construction() {
        let values = [1, 2, 3];
        let collected: Vec<i32> = SliceCursor::begin(&values)
            .transformed(|c: &mut SliceCursor<'_, i32>| *c.read() * 10)
            .iter_to(SliceCursor::end(&values))
            .collect();
        assert_eq!(collected, vec![10, 20, 30]);
    }

    #[test]
    fn test_clamp_shorthands() {
        let values = [1, 2, 3];
        let mut forward = SliceCursor::begin(&values).forward_only();
        assert_eq!(*forward.read(), 1);
        let mut bidirectional = SliceCursor::end(&values).bidirectional_only();
        bidirectional.retreat();
        assert_eq!(*bidirectional.read(), 3);
    }
}
