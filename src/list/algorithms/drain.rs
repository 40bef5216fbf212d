use crate::List;
use std::fmt;
use std::iter::FusedIterator;

/// A draining iterator over a position range of a `List`.
///
/// This `struct` is created by the [`drain`] method on [`List`]. See its
/// documentation for more.
///
/// Dropping the `Drain` removes any elements of the range that have not
/// been yielded yet.
///
/// [`drain`]: List::drain
pub struct Drain<'a, T: 'a> {
    list: &'a mut List<T>,
    next: usize,
    remaining: usize,
}

impl<'a, T: 'a> Drain<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, next: usize, remaining: usize) -> Self {
        Self {
            list,
            next,
            remaining,
        }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.next;
        self.next = self.list.slots[node].next;
        self.remaining -= 1;
        Some(self.list.detach_node(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        // Remove the rest of the range that was never yielded.
        while self.next().is_some() {}
    }
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Drain");
        let (mut node, mut remaining) = (self.next, self.remaining);
        while remaining > 0 {
            let slot = &self.list.slots[node];
            f.field(&slot.value);
            node = slot.next;
            remaining -= 1;
        }
        f.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn drain_middle_range() {
        let mut list = List::from_iter([10, 20, 30, 40]);

        let removed = Vec::from_iter(list.drain(1..3));
        assert_eq!(removed, vec![20, 30]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![10, 40]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn drain_whole_list() {
        let mut list = List::from_iter(0..5);
        assert_eq!(Vec::from_iter(list.drain(0..5)), Vec::from_iter(0..5));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn drain_empty_range_is_noop() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.drain(1..1).next(), None);
        assert_eq!(list.drain(3..3).next(), None);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn drain_drop_removes_the_remainder() {
        let mut list = List::from_iter(0..6);
        {
            let mut drain = list.drain(1..5);
            assert_eq!(drain.len(), 4);
            assert_eq!(drain.next(), Some(1));
            assert_eq!(drain.next(), Some(2));
            // 3 and 4 are still in the range when the drain is dropped.
        }
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![0, 5]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn drain_keeps_counters_of_retained_elements() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        list.search(&4);
        list.search(&4);
        // Order is now [4, 1, 2, 3] with counters [2, 0, 0, 0].
        list.drain(1..3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![4, 3]);
        assert_eq!(list.cursor(0).access_count(), Some(2));
        assert_eq!(list.cursor(1).access_count(), Some(0));
    }

    #[test]
    #[should_panic(expected = "outside of the list bounds")]
    fn drain_out_of_bounds() {
        let mut list = List::from_iter([1, 2]);
        list.drain(1..3);
    }
}
