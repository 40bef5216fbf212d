use std::fmt::{Debug, Formatter};
use std::ops::Range;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use self::algorithms::drain::Drain;

/// Arena index of the head sentinel. Permanently allocated, never holds data.
pub(crate) const HEAD: usize = 0;
/// Arena index of the tail sentinel. Permanently allocated, never holds data.
pub(crate) const TAIL: usize = 1;

/// The `List` is a doubly-linked list that reorders itself by access
/// frequency: every successful [`search`] bumps the access counter of the
/// found element and moves it towards the front, so that the data slots are
/// kept in non-increasing counter order.
///
/// Nodes live in an arena (`Vec` of slots) and are addressed by stable
/// indices rather than pointers. The two sentinel positions occupy the
/// reserved indices [`HEAD`] and [`TAIL`]; relinking an element is plain
/// index reassignment and erased slots are recycled through a free list.
///
/// # Naming Conventions
///
/// - `node`: the arena index of a linked slot (possibly a sentinel);
/// - `at`: a position in the sequence, `0..=len`, where `len` addresses
///   the tail sentinel.
///
/// [`search`]: List::search
pub struct List<T> {
    pub(crate) slots: Vec<Slot<T>>,
    free: Vec<usize>,
    pub(crate) len: usize,
}

/// One arena slot. Sentinels and recycled slots carry `value: None`;
/// every linked data slot carries `value: Some`.
#[derive(Clone, Debug)]
pub(crate) struct Slot<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) hits: u64,
    pub(crate) value: Option<T>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> usize {
        self.slots[HEAD].next
    }
    pub(crate) fn back_node(&self) -> usize {
        self.slots[TAIL].prev
    }

    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    /// Take a slot for `value` from the free list, or grow the arena by one.
    /// The slot's links are garbage until [`attach_node`] overwrites them.
    ///
    /// [`attach_node`]: List::attach_node
    fn alloc_slot(&mut self, value: T) -> usize {
        let slot = Slot {
            next: TAIL,
            prev: HEAD,
            hits: 0,
            value: Some(value),
        };
        match self.free.pop() {
            Some(node) => {
                self.slots[node] = slot;
                node
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    /// Link the slot `node` between `prev` and `next`, which must be adjacent.
    fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        debug_assert_eq!(self.slots[prev].next, next);
        debug_assert_eq!(self.slots[next].prev, prev);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
    }

    /// Unlink the data slot `node`, hand its index to the free list and
    /// return the stored value. `node` must not be a sentinel.
    pub(crate) fn detach_node(&mut self, node: usize) -> T {
        debug_assert!(node != HEAD && node != TAIL);
        let (prev, next) = (self.slots[node].prev, self.slots[node].next);
        self.connect(prev, next);
        self.free.push(node);
        self.len -= 1;
        self.slots[node].value.take().expect("data slot holds a value")
    }

    /// Arena index of the node at position `at`, walking from the closer
    /// end. `at == len` addresses the tail sentinel.
    pub(crate) fn node_at(&self, at: usize) -> usize {
        debug_assert!(at <= self.len);
        if at <= self.len / 2 {
            let mut node = self.front_node();
            for _ in 0..at {
                node = self.slots[node].next;
            }
            node
        } else {
            let mut node = TAIL;
            for _ in at..self.len {
                node = self.slots[node].prev;
            }
            node
        }
    }

    /// First node (in current order) whose counter does not exceed the
    /// already-bumped counter of `found`. Always terminates at `found`
    /// itself at the latest, since `found` satisfies the comparison
    /// against its own counter.
    fn promotion_slot(&self, found: usize) -> usize {
        let hits = self.slots[found].hits;
        let mut node = self.front_node();
        while self.slots[node].hits > hits {
            node = self.slots[node].next;
        }
        node
    }

    /// Unlink `node` and relink it immediately before `next`, preserving
    /// the relative order of all other nodes.
    fn relink_before(&mut self, node: usize, next: usize) {
        debug_assert!(node != next);
        let (old_prev, old_next) = (self.slots[node].prev, self.slots[node].next);
        self.connect(old_prev, old_next);
        let prev = self.slots[next].prev;
        self.connect(prev, node);
        self.connect(node, next);
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use self_organizing_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty `List` whose arena can hold `capacity` elements
    /// before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 2);
        // The two sentinels are linked to each other and stay alive for
        // the whole lifetime of the list.
        slots.push(Slot {
            next: TAIL,
            prev: HEAD,
            hits: 0,
            value: None,
        });
        slots.push(Slot {
            next: TAIL,
            prev: HEAD,
            hits: 0,
            value: None,
        });
        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty, i.e. the head sentinel is
    /// linked directly to the tail sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == TAIL
    }

    /// Returns the number of elements in the `List`.
    ///
    /// The count is maintained by every mutating operation and is never
    /// recomputed by traversal.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(2);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List` and resets the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        // Drops every data slot at once; only the sentinels survive.
        self.slots.truncate(2);
        self.free.clear();
        self.len = 0;
        self.connect(HEAD, TAIL);
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let front = self.front_node();
        self.slots[front].value.as_mut()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let back = self.back_node();
        self.slots[back].value.as_mut()
    }

    /// Appends an element to the back of the list, immediately before the
    /// tail sentinel. The new element's access counter starts at 0, and no
    /// reordering occurs: only [`search`] promotes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    ///
    /// [`search`]: List::search
    pub fn push_back(&mut self, item: T) {
        let node = self.alloc_slot(item);
        let prev = self.slots[TAIL].prev;
        self.attach_node(prev, TAIL, node);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Locate the first element equal to `value`, bump its access counter
    /// and promote it, returning a cursor at its (possibly new) position.
    /// If no element matches, the end cursor is returned and no counter
    /// changes.
    ///
    /// The promoted element is relinked immediately before the first node
    /// (in current order) whose counter does not exceed its own, so the
    /// data slots stay in non-increasing counter order. Ties break towards
    /// the front: a just-promoted element is placed ahead of every element
    /// with a lower-or-equal counter, and behind every element with a
    /// strictly higher one. Elements it does not pass keep their relative
    /// order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: two forward scans
    /// and an *O*(1) relink.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c']);
    ///
    /// // 'c' is found, its counter becomes 1, and it overtakes both
    /// // zero-counter elements in front of it.
    /// let cursor = list.search(&'c');
    /// assert_eq!(cursor.current(), Some(&'c'));
    /// assert_eq!(cursor.access_count(), Some(1));
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec!['c', 'a', 'b']);
    ///
    /// // A miss returns the end cursor and changes nothing.
    /// assert!(list.search(&'z').is_end());
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec!['c', 'a', 'b']);
    /// ```
    pub fn search(&mut self, value: &T) -> CursorMut<'_, T>
    where
        T: PartialEq,
    {
        let mut node = self.front_node();
        while node != TAIL {
            if self.slots[node].value.as_ref() == Some(value) {
                self.slots[node].hits += 1;
                let target = self.promotion_slot(node);
                if target != node {
                    self.relink_before(node, target);
                }
                return CursorMut::new(self, node);
            }
            node = self.slots[node].next;
        }
        self.cursor_end_mut()
    }

    /// Removes the element at the given position and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.remove(0), 1);
    /// assert_eq!(list.remove(0), 3);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len,
            "Cannot remove at an index outside of the list bounds"
        );
        let node = self.node_at(at);
        self.detach_node(node)
    }

    /// Removes the positions `range.start..range.end` from the list and
    /// returns a draining iterator over the removed elements, in order.
    /// The element at `range.end` (if any) is retained; an empty range is
    /// a no-op. Dropping the `Drain` removes any elements not yet yielded.
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or if its end is past `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([10, 20, 30, 40]);
    ///
    /// let removed: Vec<_> = list.drain(1..3).collect();
    /// assert_eq!(removed, vec![20, 30]);
    /// assert_eq!(Vec::from_iter(list.iter().copied()), vec![10, 40]);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn drain(&mut self, range: Range<usize>) -> Drain<'_, T> {
        assert!(
            range.start <= range.end && range.end <= self.len,
            "Cannot drain a range outside of the list bounds"
        );
        let node = self.node_at(range.start);
        Drain::new(self, node, range.end - range.start)
    }

    /// Provides a read-only cursor at the node with given position.
    ///
    /// By convention, the cursor is at the tail sentinel if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        Cursor::new(self, self.node_at(at))
    }

    /// Provides a read-only cursor at the first data node, or at the tail
    /// sentinel if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a read-only cursor at the tail sentinel, the
    /// non-dereferenceable one-past-the-last position.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, TAIL)
    }

    /// Provides a cursor with editing operations at the node with given
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let node = self.node_at(at);
        CursorMut::new(self, node)
    }

    /// Provides a cursor with editing operations at the first data node,
    /// or at the tail sentinel if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with editing operations at the tail sentinel.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, TAIL)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use self_organizing_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone owns its own arena with the same sequence of
/// values *and the same access counters*, in the same order, sharing
/// nothing with the source.
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
/// let copy = list.clone();
/// let (mut a, mut b) = (list.cursor_start(), copy.cursor_start());
/// while !a.is_end() {
///     assert_eq!(a.current(), b.current());
///     assert_eq!(a.access_count(), b.access_count());
///     a.move_next();
///     b.move_next();
/// }
/// ```
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free: self.free.clone(),
            len: self.len,
        }
    }

    /// Clears the destination and copies the source content into its
    /// existing allocations, counters included.
    fn clone_from(&mut self, other: &Self) {
        self.slots.clone_from(&other.slots);
        self.free.clone_from(&other.free);
        self.len = other.len;
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
