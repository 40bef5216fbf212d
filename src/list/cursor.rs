use crate::list::{List, HEAD, TAIL};
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth.
///
/// In a list with length *n*, there are *n* + 2 valid locations for the
/// cursor: the *n* data slots, the head sentinel (reached by retreating from
/// the first element) and the tail sentinel (the one-past-the-last position).
/// Neither sentinel is dereferenceable; at a sentinel, [`current`] and
/// [`access_count`] return `None`.
///
/// # Examples
///
/// ```
/// use self_organizing_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Retreating from the first element lands on the head sentinel,
/// // which is a valid but non-dereferenceable position.
/// cursor.move_prev();
/// cursor.move_prev();
/// assert_eq!(cursor.current(), None);
///
/// // Advancing from there returns to the first element.
/// cursor.move_next();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
///
/// [`current`]: Cursor::current
/// [`access_count`]: Cursor::access_count
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    pub(crate) at: usize,
    pub(crate) list: &'a List<T>,
}

/// Compare cursors by their position.
///
/// Slot indices are per-list, so two cursors are equal only when they
/// belong to the same list *and* reference the same slot. Cursors of
/// different lists are never equal, even at the same index.
///
/// # Examples
/// ```
/// use self_organizing_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // A different list, even though the index coincides.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.at == other.at
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. This is
/// because the lifetime of its yielded references is tied to its own
/// lifetime, instead of just the underlying list. This means cursors cannot
/// yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily
/// borrow the list and returns an immutable reference whose lifetime is
/// shorter than the cursor.
///
/// # Examples
///
/// ```compile_fail
/// use self_organizing_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) at: usize,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_sentinel(&self) -> bool {
                self.at == HEAD || self.at == TAIL
            }
            pub(crate) fn next_node(&self) -> usize {
                self.list.slots[self.at].next
            }
            pub(crate) fn prev_node(&self) -> usize {
                self.list.slots[self.at].prev
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the cursor is at the tail sentinel, the
            /// one-past-the-last position. A [`search`] miss leaves the
            /// returned cursor here.
            ///
            /// [`search`]: List::search
            pub fn is_end(&self) -> bool {
                self.at == TAIL
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position. At the tail sentinel
            /// the cursor stays put; advancing past the end is a defined
            /// no-op, not an error.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use self_organizing_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor(2);
            ///
            /// assert_eq!(cursor.current(), Some(&3));
            /// cursor.move_next();
            /// assert_eq!(cursor.current(), None);
            ///
            /// // Already at the tail sentinel: stays put.
            /// cursor.move_next();
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_next(&mut self) {
                if self.at != TAIL {
                    self.at = self.next_node();
                }
            }

            /// Move the cursor to the previous position. At the head
            /// sentinel the cursor stays put; retreating past the front is
            /// a defined no-op, not an error.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use self_organizing_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Retreating from the first element lands on the head
            /// // sentinel; retreating again stays there.
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), None);
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), None);
            ///
            /// cursor.move_next();
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) {
                if self.at != HEAD {
                    self.at = self.prev_node();
                }
            }

            /// Set the cursor to the start of the list (i.e. the first
            /// element, or the tail sentinel if the list is empty).
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.at = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the tail
            /// sentinel).
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                self.at = TAIL;
            }

            /// Return the access counter of the current element, or `None`
            /// if the cursor is at a sentinel.
            ///
            /// # Examples
            ///
            /// ```
            /// use self_organizing_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let mut list = List::from_iter([1, 2, 3]);
            /// list.search(&2);
            ///
            /// assert_eq!(list.cursor(0).access_count(), Some(1));
            /// assert_eq!(list.cursor(1).access_count(), Some(0));
            /// assert_eq!(list.cursor(3).access_count(), None);
            /// ```
            pub fn access_count(&self) -> Option<u64> {
                if self.is_sentinel() {
                    return None;
                }
                Some(self.list.slots[self.at].hits)
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.list.slots[self.at].value)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, at: usize) -> Self {
        Self { at, list }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference to the current element, or `None`
    /// if the cursor is at a sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).current(), Some(&1));
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(2).current(), Some(&3));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        self.list.slots[self.at].value.as_ref()
    }

    /// Return an immutable reference to the element before the cursor, or
    /// `None` if the cursor is at the first element or the head sentinel.
    ///
    /// This is useful where using the cursor as a reversed cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(0).previous(), None);
    /// assert_eq!(list.cursor(1).previous(), Some(&1));
    /// assert_eq!(list.cursor(3).previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        // The head sentinel's `prev` points at itself, so this is `None`
        // both at and immediately after the head sentinel.
        self.list.slots[self.prev_node()].value.as_ref()
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, at: usize) -> Self {
        Self { at, list }
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference to the current element, or `None` if
    /// the cursor is at a sentinel.
    pub fn current(&self) -> Option<&T> {
        self.list.slots[self.at].value.as_ref()
    }

    /// Return a mutable reference to the current element, or `None` if
    /// the cursor is at a sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate through a sentinel.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.list.slots[self.at].value.as_mut()
    }

    /// Return an immutable reference to the element before the cursor, or
    /// `None` if the cursor is at the first element or the head sentinel.
    pub fn previous(&self) -> Option<&T> {
        let prev = self.prev_node();
        self.list.slots[prev].value.as_ref()
    }

    /// Return a mutable reference to the element before the cursor, or
    /// `None` if the cursor is at the first element or the head sentinel.
    pub fn previous_mut(&mut self) -> Option<&mut T> {
        let prev = self.prev_node();
        self.list.slots[prev].value.as_mut()
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.at)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.at)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to be read while a
    /// mutable cursor is created and being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let cursor = list.search(&2);
    ///
    /// assert_eq!(cursor.view().len(), 3);
    /// assert_eq!(cursor.view().back(), Some(&3));
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Remove the element at the cursor and return it, or return `None` if
    /// the cursor is at a sentinel, in which case nothing is removed.
    /// After removal, the cursor is moved to the node that followed.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.remove(), Some(0)); // becomes [1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// // Removing at the tail sentinel is a guarded no-op.
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_sentinel() {
            return None;
        }
        let next = self.next_node();
        let item = self.list.detach_node(self.at);
        self.at = next;
        Some(item)
    }

    /// Remove the element before the cursor and return it, or return
    /// `None` if there is no element before the cursor. After removal,
    /// the cursor stays at the same element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.backspace(), Some(4)); // becomes [0, 1, 2, 3, 5, 6, 7, 8, 9]
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    /// assert_eq!(cursor.current(), Some(&0));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.backspace(), Some(9)); // becomes [0, 1, 2, 3, 5, 6, 7, 8]
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        if self.prev_node() == HEAD {
            return None;
        }
        self.move_prev();
        self.remove()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}
