//! Cursor abstractions and transforming adapters for in-memory sequences.
//!
//! This crate models sequence traversal as explicit cursor values: cheap,
//! copyable positions that compare by location and move step by step. On
//! top of that substrate it provides a transforming adapter that applies a
//! stored callable to the *cursor* on every read, so a transform can peek
//! at neighbors or mutate the addressed element rather than merely map its
//! value. It offers:
//!
//! - **Capability traits**: forward, bidirectional and random-access
//!   traversal as a compile-time trait hierarchy
//! - **Transforming adapter**: [`TransformCursor`] invokes its callable
//!   with the wrapped cursor on every read and compares by position, even
//!   against raw cursors used as end sentinels
//! - **Iterator bridge**: [`CursorIter`] walks a half-open cursor range as
//!   a standard iterator
//! - **Capability clamps**: wrappers that deliberately advertise weaker
//!   traversal than the cursor they wrap
//!
//! # Key Types
//!
//! - [`Cursor`], [`BidirectionalCursor`], [`RandomAccessCursor`] - the
//!   capability ladder
//! - [`TransformCursor`] - the transforming cursor adapter
//! - [`SliceCursor`] - a random-access cursor over a borrowed slice
//! - [`CursorExt`] - fluent adapter construction on any cursor

pub mod clamp;
pub mod cursor;
pub mod ext;
pub mod iter;
pub mod slice;
pub mod transform;


pub use clamp::{BidirectionalOnly, ForwardOnly};
pub use cursor::{BidirectionalCursor, Cursor, RandomAccessCursor, ReadCursor};
pub use ext::CursorExt;
pub use iter::CursorIter;
pub use slice::SliceCursor;
pub use transform::{Transform, TransformCursor};
