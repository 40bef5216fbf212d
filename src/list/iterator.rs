use crate::list::{List, Slot};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

/// An iterator over the elements of a `List`.
///
/// It uses a pair of slot indices `front..=back` together with a remaining
/// count to represent a subrange of the list; the count alone decides
/// exhaustion, so the indices never have to step onto a sentinel.
///
/// # Examples
///
/// ```compile_fail
/// use self_organizing_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    front: usize,
    back: usize,
    len: usize,
    list: &'a List<T>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            front: list.front_node(),
            back: list.back_node(),
            len: list.len(),
            list,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let (mut node, mut len) = (self.front, self.len);
        while len > 0 {
            let slot = &self.list.slots[node];
            f.field(&slot.value);
            node = slot.next;
            len -= 1;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let slot = &self.list.slots[self.front];
        self.front = slot.next;
        self.len -= 1;
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let slot = &self.list.slots[self.back];
        self.back = slot.prev;
        self.len -= 1;
        slot.value.as_ref()
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Though the `IterMut` holds a raw pointer to the arena instead of a
/// reference to the list, it actually *borrows* (mutably) from the list,
/// so a phantom marker of `&'a mut List<T>` is added to protect the list
/// from being read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use self_organizing_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    front: usize,
    back: usize,
    len: usize,
    slots: *mut Slot<T>,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            front: list.front_node(),
            back: list.back_node(),
            len: list.len(),
            slots: list.slots.as_mut_ptr(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let (mut node, mut len) = (self.front, self.len);
        while len > 0 {
            // SAFETY: only the not-yet-yielded slots are visited, so no
            // aliasing with references handed out by `next`/`next_back`.
            let slot = unsafe { &*self.slots.add(node) };
            f.field(&slot.value);
            node = slot.next;
            len -= 1;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: each slot index is yielded at most once, and the arena
        // cannot grow or shrink while the list is exclusively borrowed, so
        // the returned reference never aliases another yielded one.
        let slot = unsafe { &mut *self.slots.add(self.front) };
        self.front = slot.next;
        self.len -= 1;
        slot.value.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: same argument as in `next`, walking from the back.
        let slot = unsafe { &mut *self.slots.add(self.back) };
        self.back = slot.prev;
        self.len -= 1;
        slot.value.as_mut()
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

// SAFETY: `IterMut` is an exclusive borrow of the list behind a raw
// pointer, so it inherits the threading capabilities of `&mut List<T>`.
unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn iter_forward_and_backward() {
        let vec = Vec::from_iter(0..10);
        let list = List::from_iter(vec.iter().copied());

        assert!(list.iter().eq(vec.iter()));
        assert!(list.iter().rev().eq(vec.iter().rev()));

        let mut iter = list.iter();
        for i in 0..10 {
            assert_eq!(iter.len(), 10 - i);
            assert_eq!(iter.next(), Some(&i));
        }
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let list = List::from_iter(0..4);
        let mut iter = list.iter();

        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_last_is_the_back() {
        let list = List::from_iter(0..4);
        assert_eq!(list.iter().last(), Some(&3));
        assert_eq!(List::<i32>::new().iter().last(), None);
    }

    #[test]
    fn iter_mut_mutates_every_element() {
        let mut list = List::from_iter(0..5);
        for element in list.iter_mut() {
            *element *= 10;
        }
        assert_eq!(
            Vec::from_iter(list.iter().copied()),
            vec![0, 10, 20, 30, 40]
        );

        let mut iter = list.iter_mut();
        assert_eq!(iter.next_back(), Some(&mut 40));
        assert_eq!(iter.next(), Some(&mut 0));
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn iter_mut_references_outlive_the_iterator() {
        let mut list = List::from_iter([1, 2, 3]);
        let refs = Vec::from_iter(list.iter_mut());
        for element in refs {
            *element += 10;
        }
        assert_eq!(Vec::from_iter(list), vec![11, 12, 13]);
    }

    #[test]
    fn into_iter_consumes_in_order() {
        let list = List::from_iter(0..5);
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..5));

        let list = List::from_iter(0..5);
        assert_eq!(
            Vec::from_iter(list.into_iter().rev()),
            Vec::from_iter((0..5).rev())
        );
    }

    #[test]
    fn extend_appends_at_the_back() {
        let mut list = List::from_iter(0..3);
        list.extend(3..5);
        list.extend([&5, &6]);
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..7));
    }

    #[test]
    fn iter_respects_promoted_order() {
        let mut list = List::from_iter(['a', 'b', 'c']);
        list.search(&'c');
        assert_eq!(Vec::from_iter(list.iter().copied()), vec!['c', 'a', 'b']);
        assert_eq!(
            Vec::from_iter(list.iter().rev().copied()),
            vec!['b', 'a', 'c']
        );
    }
}
