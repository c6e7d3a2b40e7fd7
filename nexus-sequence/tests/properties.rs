use nexus_sequence::LinkedList;
use proptest::prelude::*;

fn forward_and_backward(list: &LinkedList<i32>) -> (Vec<i32>, Vec<i32>) {
    let forward: Vec<i32> = list.iter().copied().collect();

    let mut backward = Vec::new();
    let mut cursor = list.back();
    while let Some(c) = cursor {
        backward.push(*c.value());
        cursor = c.prev();
    }
    backward.reverse();

    (forward, backward)
}

proptest! {
    #[test]
    fn append_monotonicity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list: LinkedList<i32> = LinkedList::new();
        for &v in &values {
            list.append(v);
        }
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.to_sequence(), values);
    }

    #[test]
    fn size_and_emptiness_coupled(
        values in prop::collection::vec(0..8i32, 0..16),
        removals in prop::collection::vec(0..8i32, 0..16),
    ) {
        let mut list: LinkedList<i32> = values.into_iter().collect();
        for r in removals {
            list.remove(&r);
            prop_assert_eq!(list.is_empty(), list.front().is_none());
            prop_assert_eq!(list.is_empty(), list.back().is_none());
        }
    }

    #[test]
    fn remove_then_absent(values in prop::collection::vec(0..10i32, 0..32), target in 0..10i32) {
        let mut list: LinkedList<i32> = values.iter().copied().collect();
        let occurrences = values.iter().filter(|&&v| v == target).count();

        let first = list.remove(&target);
        prop_assert_eq!(first.is_some(), occurrences > 0);

        let before = list.len();
        let second = list.remove(&target);
        prop_assert_eq!(second.is_some(), occurrences > 1);
        if second.is_none() {
            prop_assert_eq!(list.len(), before);
        }
    }

    #[test]
    fn remove_at_out_of_range_is_noop(values in prop::collection::vec(any::<i32>(), 0..32), extra in 0..100usize) {
        let mut list: LinkedList<i32> = values.iter().copied().collect();
        let index = list.len() + extra;
        prop_assert_eq!(list.remove_at(index), None);
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.to_sequence(), values);
    }

    #[test]
    fn sequence_round_trip(values in prop::collection::vec(any::<i32>(), 0..64), drop_at in any::<prop::sample::Index>()) {
        let mut list: LinkedList<i32> = values.iter().copied().collect();
        if !values.is_empty() {
            list.remove_at(drop_at.index(values.len()));
        }

        let mut copy: LinkedList<i32> = LinkedList::new();
        for v in list.to_sequence() {
            copy.append(v);
        }
        prop_assert_eq!(copy.to_sequence(), list.to_sequence());
    }

    #[test]
    fn swap_involution(len in 2..32usize, a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let values: Vec<i32> = (0..len as i32).collect();
        let mut list: LinkedList<i32> = values.iter().copied().collect();
        let x = values[a.index(len)];
        let y = values[b.index(len)];

        let changed = list.swap(&x, &y);
        prop_assert_eq!(changed, x != y);
        list.swap(&x, &y);

        prop_assert_eq!(list.to_sequence(), values);
    }

    #[test]
    fn swap_matches_vec_swap(len in 2..32usize, a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let mut expected: Vec<i32> = (0..len as i32).collect();
        let mut list: LinkedList<i32> = expected.iter().copied().collect();
        let (i, j) = (a.index(len), b.index(len));

        let (x, y) = (expected[i], expected[j]);
        list.swap(&x, &y);
        expected.swap(i, j);

        let (forward, backward) = forward_and_backward(&list);
        prop_assert_eq!(&forward, &expected);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn insert_at_matches_vec_insert(values in prop::collection::vec(any::<i32>(), 0..32), pos in any::<prop::sample::Index>(), v in any::<i32>()) {
        let mut expected = values.clone();
        let mut list: LinkedList<i32> = values.into_iter().collect();
        let index = pos.index(expected.len() + 1);

        list.insert_at(v, index);
        expected.insert(index, v);

        let (forward, backward) = forward_and_backward(&list);
        prop_assert_eq!(&forward, &expected);
        prop_assert_eq!(forward, backward);
    }
}
