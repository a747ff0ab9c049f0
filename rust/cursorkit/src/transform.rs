//! The transforming cursor adapter.
//!
//! [`TransformCursor`] pairs an underlying cursor with a stored callable.
//! Reading the adapter invokes the callable with the *cursor* (not the
//! element it addresses) and returns whatever the callable produces, while
//! movement and comparison delegate to the wrapped cursor. Handing the
//! callable the cursor itself is what sets this apart from an element-wise
//! map: the callable can peek at neighbors, consult the position, or mutate
//! the addressed element and return the result.
//!
//! Reads are never cached. Every read re-invokes the callable, so a
//! side-effecting callable fires once per read, not once per position.
//!
//! The adapter propagates the traversal capability of the wrapped cursor
//! exactly: it is a [`Cursor`], [`BidirectionalCursor`] or
//! [`RandomAccessCursor`] precisely when the wrapped type is.

use std::fmt;

use crate::clamp::{BidirectionalOnly, ForwardOnly};
use crate::cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, ReadCursor};
use crate::slice::SliceCursor;

/// A transformation applied to a cursor on every read.
///
/// Implemented for every `FnMut(&mut P) -> R` closure or function, which is
/// the common way to supply one. Implementing the trait by hand suits
/// transforms that carry their own state or need a nameable type.
///
/// The transform receives the cursor by mutable reference and may carry
/// side effects; neither purity nor idempotence is assumed. For a given
/// position it must keep producing values of the same `Output` type, which
/// the signature already enforces.
pub trait Transform<P> {
    /// The value produced per application.
    type Output;

    /// Applies the transformation to the cursor at its current position.
    fn apply(&mut self, position: &mut P) -> Self::Output;
}

impl<P, F, R> Transform<P> for F
where
    F: FnMut(&mut P) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&mut self, position: &mut P) -> R {
        self(position)
    }
}

/// A cursor adapter that applies a stored transform on every read.
///
/// The adapter owns both the wrapped cursor and the transform by value and
/// has plain value semantics: cloning one clones both parts, and no state is
/// shared between clones.
///
/// Comparison is by wrapped position only. Two adapters compare equal
/// exactly when their wrapped cursors do, even when their transforms differ,
/// and an adapter also compares directly against a bare cursor of the
/// wrapped type (in both argument orders, for the cursor types shipped by
/// this crate). This lets an adapter range end at a raw end sentinel.
///
/// Reading at the sequence's end position is a precondition violation,
/// inherited from whatever the transform does with the cursor there.
pub struct TransformCursor<P, F> {
    /// The wrapped underlying cursor.
    position: P,
    /// The stored transform, invoked with `&mut position` on every read.
    transform: F,
}

impl<P, F> TransformCursor<P, F> {
    /// Wraps `position`, applying `transform` on every read.
    ///
    /// Accepts any position value and any transform; nothing is validated
    /// or invoked here.
    pub fn new(position: P, transform: F) -> Self {
        TransformCursor {
            position,
            transform,
        }
    }

    /// Returns the wrapped cursor.
    #[inline]
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Converts the adapter back into the wrapped cursor, discarding the
    /// transform.
    ///
    /// This is the explicit escape hatch for code that expects the raw
    /// cursor type.
    pub fn into_position(self) -> P {
        self.position
    }

    /// Splits the adapter into the wrapped cursor and the transform.
    pub fn into_parts(self) -> (P, F) {
        (self.position, self.transform)
    }

    /// Applies the transform to the current position and returns its
    /// result.
    ///
    /// The result is exactly what the transform returns - a value or a
    /// reference, with no copy forced by the adapter. Each call re-invokes
    /// the transform.
    #[inline]
    pub fn get(&mut self) -> F::Output
    where
        F: Transform<P>,
    {
        self.transform.apply(&mut self.position)
    }
}

impl<P: Clone, F: Clone> Clone for TransformCursor<P, F> {
    fn clone(&self) -> Self {
        TransformCursor {
            position: self.position.clone(),
            transform: self.transform.clone(),
        }
    }
}

/// Shows the wrapped position and omits the transform, which is rarely
/// printable.
impl<P: fmt::Debug, F> fmt::Debug for TransformCursor<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformCursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Position-only equality, independent of either side's transform type.
impl<P, Q, F, G> PartialEq<TransformCursor<Q, G>> for TransformCursor<P, F>
where
    P: PartialEq<Q>,
{
    fn eq(&self, other: &TransformCursor<Q, G>) -> bool {
        self.position == other.position
    }
}

/// Position-only ordering, independent of either side's transform type.
impl<P, Q, F, G> PartialOrd<TransformCursor<Q, G>> for TransformCursor<P, F>
where
    P: PartialOrd<Q>,
{
    fn partial_cmp(&self, other: &TransformCursor<Q, G>) -> Option<std::cmp::Ordering> {
        self.position.partial_cmp(&other.position)
    }
}

impl<P: Cursor, F: Clone> Cursor for TransformCursor<P, F> {
    fn advance(&mut self) -> &mut Self {
        self.position.advance();
        self
    }
}

impl<P: BidirectionalCursor, F: Clone> BidirectionalCursor for TransformCursor<P, F> {
    fn retreat(&mut self) -> &mut Self {
        self.position.retreat();
        self
    }
}

impl<P: RandomAccessCursor, F: Clone> RandomAccessCursor for TransformCursor<P, F> {
    fn advance_by(&mut self, offset: isize) -> &mut Self {
        self.position.advance_by(offset);
        self
    }

    fn distance_to(&self, other: &Self) -> isize {
        self.position.distance_to(&other.position)
    }
}

impl<P: Cursor, F: Clone + Transform<P>> ReadCursor for TransformCursor<P, F> {
    type Item = F::Output;

    fn read(&mut self) -> F::Output {
        self.get()
    }
}

// Comparisons against a bare cursor used as a raw sentinel. Coherence rules
// do not admit one blanket pair (the reverse direction would have a bare
// type parameter as its self type, and the forward direction would overlap
// the adapter-vs-adapter impl for nested adapters), so the pair is written
// out per cursor type shipped by this crate.

impl<'a, T, F> PartialEq<SliceCursor<'a, T>> for TransformCursor<SliceCursor<'a, T>, F> {
    fn eq(&self, other: &SliceCursor<'a, T>) -> bool {
        self.position == *other
    }
}

impl<'a, T, F> PartialEq<TransformCursor<SliceCursor<'a, T>, F>> for SliceCursor<'a, T> {
    fn eq(&self, other: &TransformCursor<SliceCursor<'a, T>, F>) -> bool {
        *self == other.position
    }
}

impl<C: PartialEq, F> PartialEq<ForwardOnly<C>> for TransformCursor<ForwardOnly<C>, F> {
    fn eq(&self, other: &ForwardOnly<C>) -> bool {
        self.position == *other
    }
}

impl<C: PartialEq, F> PartialEq<TransformCursor<ForwardOnly<C>, F>> for ForwardOnly<C> {
    fn eq(&self, other: &TransformCursor<ForwardOnly<C>, F>) -> bool {
        *self == other.position
    }
}

impl<C: PartialEq, F> PartialEq<BidirectionalOnly<C>> for TransformCursor<BidirectionalOnly<C>, F> {
    fn eq(&self, other: &BidirectionalOnly<C>) -> bool {
        self.position == *other
    }
}

impl<C: PartialEq, F> PartialEq<TransformCursor<BidirectionalOnly<C>, F>> for BidirectionalOnly<C> {
    fn eq(&self, other: &TransformCursor<BidirectionalOnly<C>, F>) -> bool {
        *self == other.position
    }
}
