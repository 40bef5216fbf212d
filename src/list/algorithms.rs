use crate::list::List;
use std::hash::{Hash, Hasher};

pub(crate) mod drain;

/// Compare lists by their element sequences.
///
/// Access counters are invisible to equality: two lists with the same
/// values in the same order are equal even if their search histories
/// differ.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// Unlike [`search`], this is a read-only membership test: no counter
    /// is bumped and no element is promoted.
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
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    ///
    /// [`search`]: List::search
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    #[test]
    fn list_equality_ignores_counters() {
        let mut list = List::from_iter([1, 2, 3]);
        let other = List::from_iter([1, 2, 3]);
        assert_eq!(list, other);

        // Bumping a counter without moving anything keeps them equal.
        list.search(&1);
        assert_eq!(list, other);

        // Promotion reorders the values, so they differ now.
        list.search(&3);
        assert_ne!(list, other);
        assert_ne!(list, List::from_iter([1, 2]));
    }

    #[test]
    fn list_hash_agrees_with_equality() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let list = List::from_iter([1, 2, 3]);
        let mut other = List::from_iter([1, 2, 3]);
        other.search(&2);
        other.search(&1);
        other.search(&1);
        // Same value order (1 stays in front), so equal and same hash.
        assert_eq!(list, other);
        assert_eq!(hash_of(&list), hash_of(&other));
    }

    #[test]
    fn list_contains_never_promotes() {
        let mut list = List::from_iter([1, 2, 3]);
        assert!(list.contains(&3));
        assert!(!list.contains(&10));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(list.cursor(2).access_count(), Some(0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8),
        Search(u8),
        Remove(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..8).prop_map(Op::Insert),
            (0u8..8).prop_map(Op::Search),
            any::<usize>().prop_map(Op::Remove),
        ]
    }

    /// Reference model: values and counters in list order.
    fn apply_to_model(model: &mut Vec<(u8, u64)>, op: &Op) {
        match *op {
            Op::Insert(value) => model.push((value, 0)),
            Op::Search(value) => {
                if let Some(pos) = model.iter().position(|&(v, _)| v == value) {
                    model[pos].1 += 1;
                    let hits = model[pos].1;
                    // First position whose counter the bumped one reaches;
                    // the found element itself qualifies, so the scan never
                    // looks past it.
                    let target = model[..pos]
                        .iter()
                        .position(|&(_, h)| hits >= h)
                        .unwrap_or(pos);
                    if target != pos {
                        let entry = model.remove(pos);
                        model.insert(target, entry);
                    }
                }
            }
            Op::Remove(at) => {
                if !model.is_empty() {
                    let at = at % model.len();
                    model.remove(at);
                }
            }
        }
    }

    fn apply_to_list(list: &mut List<u8>, op: &Op) {
        match *op {
            Op::Insert(value) => list.push_back(value),
            Op::Search(value) => {
                list.search(&value);
            }
            Op::Remove(at) => {
                if !list.is_empty() {
                    let at = at % list.len();
                    list.remove(at);
                }
            }
        }
    }

    fn snapshot(list: &List<u8>) -> Vec<(u8, u64)> {
        let mut out = Vec::new();
        let mut cursor = list.cursor_start();
        while let (Some(&value), Some(hits)) = (cursor.current(), cursor.access_count()) {
            out.push((value, hits));
            cursor.move_next();
        }
        out
    }

    proptest! {
        #[test]
        fn list_matches_reference_model(ops in proptest::collection::vec(op_strategy(), 0..64)) {
            let mut model = Vec::new();
            let mut list = List::new();
            for op in &ops {
                apply_to_model(&mut model, op);
                apply_to_list(&mut list, op);
                prop_assert_eq!(snapshot(&list), model.clone());
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.is_empty(), model.is_empty());
            }
        }

        #[test]
        fn list_counters_stay_sorted_after_searches(
            values in proptest::collection::vec(0u8..8, 1..32),
            queries in proptest::collection::vec(0u8..8, 1..64),
        ) {
            let mut list = List::from_iter(values);
            for query in &queries {
                list.search(query);
                let counters: Vec<_> = {
                    let mut out = Vec::new();
                    let mut cursor = list.cursor_start();
                    while let Some(hits) = cursor.access_count() {
                        out.push(hits);
                        cursor.move_next();
                    }
                    out
                };
                prop_assert!(counters.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }
}
