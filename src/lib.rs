//! This crate provides two interchangeable sequence containers behind one
//! abstract list contract.
//!
//! - [`ArrayList`] keeps its elements in a single contiguous buffer:
//!   *O*(1) random access and amortized appends, *O*(*n*) positional
//!   insertion and removal.
//! - [`LinkedList`] keeps its elements in doubly-linked owned nodes:
//!   *O*(1) operations at either end, *O*(*n*) positional access.
//!
//! Both implement the [`List`] trait, so code written against the
//! contract runs unchanged on either container, and two containers
//! holding the same logical sequence are observably equivalent: they
//! even compare equal across storage strategies.
//!
//! ```
//! use seq_list::{ArrayList, LinkedList, List};
//!
//! let mut countries = ArrayList::new();
//! countries.push("Ecuador");
//! countries.push("Ghana");
//! countries.insert(1, "Finland").unwrap();
//! assert_eq!(countries.to_vec(), ["Ecuador", "Finland", "Ghana"]);
//!
//! let linked: LinkedList<_> = countries.iter().cloned().collect();
//! assert!(countries == linked);
//! ```
//!
//! # Errors instead of panics
//!
//! Every operation taking an index validates it first and reports
//! [`Error::OutOfBounds`] instead of panicking, leaving the container
//! untouched on failure:
//!
//! ```
//! use seq_list::{Error, LinkedList, List};
//!
//! let mut list = LinkedList::from_iter([1, 2, 3]);
//! assert_eq!(list.get(5), Err(Error::OutOfBounds { index: 5, len: 3 }));
//! assert_eq!(list.insert(9, 0), Err(Error::OutOfBounds { index: 9, len: 3 }));
//! assert_eq!(list.to_vec(), [1, 2, 3]);
//! ```
//!
//! # Traversal
//!
//! Each container hands out two kinds of traversal objects:
//!
//! - a forward-only cursor (an ordinary [`Iterator`]) from
//!   [`List::iter`] / [`List::iter_from`], restartable only by asking the
//!   list again;
//! - a bidirectional read-only [`Cursor`] from [`List::cursor`] /
//!   [`List::cursor_at`], which can move back and forth but never mutates
//!   the list.
//!
//! ```
//! use seq_list::{Cursor, LinkedList, List};
//!
//! let list = LinkedList::from_iter([1, 2, 3]);
//!
//! let forward: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(forward, [1, 2, 3]);
//!
//! let mut cursor = list.cursor_at(list.len()).unwrap();
//! let mut backward = Vec::new();
//! while cursor.has_previous() {
//!     backward.push(*cursor.previous().unwrap());
//! }
//! assert_eq!(backward, [3, 2, 1]);
//! ```
//!
//! Because a cursor borrows its list, structural mutation while a cursor
//! is live is rejected at compile time:
//!
//! ```compile_fail
//! use seq_list::{LinkedList, List};
//!
//! let mut list = LinkedList::from_iter([1, 2, 3]);
//! let cursor = list.cursor();
//! list.push_back(4); // cursor still alive: rejected
//! drop(cursor);
//! ```

#[doc(inline)]
pub use array_list::ArrayList;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use linked_list::LinkedList;
#[doc(inline)]
pub use list::{Cursor, List};

pub mod array_list;
pub mod linked_list;
pub mod list;

mod error;
mod experiments;
