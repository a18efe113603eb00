//! This crate provides a doubly-linked list bounded by two permanent sentinel
//! nodes, with a built-in traversal cursor, a one-deep bookmark and an
//! occurrence index over the values it holds, plus a triangular grid of rows
//! built from the same kind of linked nodes.
//!
//! The [`List`] inserts and removes at either end, or through a node handle,
//! in constant time. Accessing an element by index takes *O*(*n*) time, but
//! the walk always starts from the closer sentinel.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::{Kind, List, Value};
//!
//! let mut list = List::new();
//! for v in [Value::from(1), Value::from("a"), Value::from(2), Value::from("b")] {
//!     list.append(v).unwrap();
//! }
//!
//! // O(1) membership through the occurrence index
//! assert!(list.approx_contains(&Value::from("a")));
//!
//! // Pull every integer out in one pass
//! assert_eq!(list.extract_by_type(Kind::Int), vec![Value::Int(1), Value::Int(2)]);
//! assert_eq!(list.to_string(), "List with 2 items:\n[ a ] [ b ] \n");
//! ```
//!
//! # Memory Layout
//!
//! Nodes live in an arena and refer to each other by slot number. The head
//! sentinel always sits in slot 0 and the tail sentinel in slot 1:
//! ```text
//!   slot 0 (head)       slot 3              slot 2              slot 1 (tail)
//!   ┌───────────┐       ┌───────────┐       ┌───────────┐       ┌───────────┐
//!   │ next: 3   │ ────→ │ next: 2   │ ────→ │ next: 1   │ ────→ │ next: -   │
//!   ├───────────┤       ├───────────┤       ├───────────┤       ├───────────┤
//!   │ prev: -   │ ←──── │ prev: 0   │ ←──── │ prev: 3   │ ←──── │ prev: 2   │
//!   ├───────────┤       ├───────────┤       ├───────────┤       ├───────────┤
//!   ┊No payload ┊       │ payload T │       │ payload T │       ┊No payload ┊
//!   └╌╌╌╌╌╌╌╌╌╌╌┘       └───────────┘       └───────────┘       └╌╌╌╌╌╌╌╌╌╌╌┘
//! ```
//!
//! Removing a node puts its slot on a free list and bumps the slot's
//! generation. A [`NodeId`] remembers the generation it was issued with, so
//! a handle to a removed node is reported as [`ListError::Detached`] rather
//! than aliasing whatever reuses the slot. Handles are also tied to the list
//! that issued them, and every other list treats them as detached.
//!
//! In a list with length *n* the real nodes are indexed by 0, 1, ..., *n* - 1.
//! The head sentinel counts as index 0 and the tail sentinel as index *n*.
//!
//! # Cursor and Bookmark
//!
//! Every list owns one cursor. [`rewind`] and [`unwind`] save the cursor into
//! the bookmark before jumping to the first or last node; [`restore`] pops it
//! back. There is only one bookmark: saving twice loses the first position.
//! Removing the node under the cursor or the bookmark moves it to the
//! successor, else the predecessor, else the head sentinel.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//! list.rewind();
//! list.advance();
//! assert_eq!(list.current(), Some(&2));
//!
//! let mut cursor = list.cursor_mut();
//! assert_eq!(cursor.remove(), Some(2)); // becomes [1, 3, 4], points to 3
//! assert_eq!(cursor.current(), Some(&3));
//! cursor.insert(5).unwrap(); // becomes [1, 5, 3, 4], still points to 3
//! assert_eq!(cursor.index(), 2);
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 5, 3, 4]);
//! ```
//!
//! # Triangular Grid
//!
//! [`TriangularGrid`] stacks rows whose *r*-th row holds *r* + 1 cells.
//! Cells are addressed by row and 1-based column; negative coordinates count
//! from the end.
//!
//! ```
//! use cursor_list::TriangularGrid;
//!
//! let mut grid = TriangularGrid::new();
//! grid.append_row([1]);
//! grid.append_row([1, 1]);
//! grid.append_row([1, 2, 1]);
//! assert_eq!(grid.get(2, 2), Some(&2));
//! assert_eq!(grid.to_string(), "Triangle with 3 rows:\n[ 1 ] \n[ 1 ] [ 1 ] \n[ 1 ] [ 2 ] [ 1 ] \n");
//! ```
//!
//! # Features
//!
//! - `rand` (default): random integer fills through [`List::fill`].
//!
//! [`rewind`]: List::rewind
//! [`unwind`]: List::unwind
//! [`restore`]: List::restore

#[doc(inline)]
pub use arena::NodeId;
#[doc(inline)]
pub use error::ListError;
#[doc(inline)]
pub use grid::{Slot, TriangularGrid};
#[doc(inline)]
pub use list::cursor::CursorMut;
#[doc(inline)]
pub use list::database::IdentityKey;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{compare_ignore_case, value_equality, Drain, DrainFilter, List};
#[doc(inline)]
pub use value::{Element, FromValue, Kind, Value};

#[cfg(feature = "rand")]
pub use fill::RANDOM_FILL_RANGE;

pub mod error;
pub mod grid;
pub mod list;
pub mod value;

mod arena;
mod fill;
mod node;
