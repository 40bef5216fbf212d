//! This crate provides a self-organizing doubly-linked list: a [`List`]
//! whose elements migrate toward the front as they are looked up.
//!
//! Every element carries an access counter. A successful [`search`] bumps
//! the counter of the found element and relinks it immediately before the
//! first element whose counter it now reaches, so frequently queried
//! elements accumulate at the front and later searches find them sooner.
//! Insertion never reorders; only searching does.
//!
//! Here is a quick example showing how the reordering works.
//!
//! ```
//! use self_organizing_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter(['a', 'b', 'c']);
//!
//! // 'c' is found once and overtakes the untouched elements.
//! list.search(&'c');
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec!['c', 'a', 'b']);
//!
//! // 'b' is found twice and moves all the way to the front.
//! list.search(&'b');
//! list.search(&'b');
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec!['b', 'c', 'a']);
//!
//! // A miss changes nothing and returns the end cursor.
//! assert!(list.search(&'z').is_end());
//! assert_eq!(Vec::from_iter(list.iter().copied()), vec!['b', 'c', 'a']);
//! ```
//!
//! # Memory Layout
//!
//! The list stores its nodes in an arena: a `Vec` of slots addressed by
//! stable indices instead of heap pointers.
//! ```text
//!        index 0          index 1          index 2, 3, ...
//!    ╔═══════════╗    ╔═══════════╗    ╔═══════════╗
//!    ║   next    ║    ║   next    ║    ║   next    ║
//!    ╟───────────╢    ╟───────────╢    ╟───────────╢
//!    ║   prev    ║    ║   prev    ║    ║   prev    ║
//!    ╟───────────╢    ╟───────────╢    ╟───────────╢
//!    ║  hits: 0  ║    ║  hits: 0  ║    ║   hits    ║
//!    ╟───────────╢    ╟───────────╢    ╟───────────╢
//!    ║   None    ║    ║   None    ║    ║  Some(T)  ║
//!    ╚═══════════╝    ╚═══════════╝    ╚═══════════╝
//!    head sentinel    tail sentinel      data slots
//! ```
//!
//! The two sentinel slots occupy the reserved indices 0 and 1, live for the
//! whole lifetime of the list and never hold a value. The data slots form a
//! doubly-linked chain between them: `head.next` is the first element and
//! `tail.prev` is the last. Erased slots are handed to a free list and
//! recycled by later insertions, and relinking an element during promotion
//! is plain index reassignment.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended, exact-size and fused, and visit the elements in list
//! order, which reflects past promotions. [`IterMut`] provides mutability of
//! the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use self_organizing_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list. They can move forward and backward,
//! read the access counter of the current element via [`access_count`],
//! and (for [`CursorMut`]) remove elements. Moving past either sentinel
//! clamps instead of failing, and dereferencing a sentinel yields `None`.
//!
//! ## Examples
//!
//! ```
//! use self_organizing_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_mut(2);
//! assert_eq!(cursor.remove(), Some(3)); // becomes [1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 4]);
//! ```
//!
//! # Value Semantics
//!
//! [`Clone`] deep-copies the values *and* the access counters, so the copy
//! continues to self-organize from the same state. Moving a list is a plain
//! Rust move; to transfer the content out of a place while leaving a fresh
//! empty list behind, use [`std::mem::take`]:
//!
//! ```
//! use self_organizing_list::List;
//! use std::iter::FromIterator;
//!
//! let mut source = List::from_iter([1, 2, 3]);
//! source.search(&2);
//!
//! let target = std::mem::take(&mut source);
//! assert!(source.is_empty());
//! assert_eq!(Vec::from_iter(target.iter().copied()), vec![2, 1, 3]);
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`search`]: crate::List::search
//! [`access_count`]: crate::list::cursor::Cursor::access_count

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Drain, List};

pub mod list;
