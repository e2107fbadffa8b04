use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use avl_ost::avl_tree_map;
use avl_ost::{AvlTreeMap, FnComparator, Rank, Reverse};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Keys drawn from a range narrower than `TEST_SIZE` so inserts and removes collide.
fn key_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Upper bound on the height of an AVL tree with `len` nodes.
fn avl_height_bound(len: usize) -> usize {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bound = (1.4405 * ((len + 2) as f64).log2()).floor() as usize;
    bound
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    RemoveEntry(i64),
    Get(i64),
    ContainsKey(i64),
    GetKeyValue(i64),
    Rank(i64),
    Select(usize),
    FirstKeyValue,
    LastKeyValue,
    PopFirst,
    PopLast,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        1 => key_strategy().prop_map(MapOp::RemoveEntry),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::GetKeyValue),
        1 => key_strategy().prop_map(MapOp::Rank),
        1 => (0usize..2_500).prop_map(MapOp::Select),
        1 => Just(MapOp::FirstKeyValue),
        1 => Just(MapOp::LastKeyValue),
        1 => Just(MapOp::PopFirst),
        1 => Just(MapOp::PopLast),
    ]
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both AvlTreeMap and BTreeMap
    /// and asserts identical results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = AvlTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(avl_map.insert(*k, *v), bt_map.insert(*k, *v), "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(avl_map.remove(k), bt_map.remove(k), "remove({})", k);
                }
                MapOp::RemoveEntry(k) => {
                    prop_assert_eq!(avl_map.remove_entry(k), bt_map.remove_entry(k), "remove_entry({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(avl_map.get(k), bt_map.get(k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(avl_map.contains_key(k), bt_map.contains_key(k), "contains_key({})", k);
                }
                MapOp::GetKeyValue(k) => {
                    prop_assert_eq!(avl_map.get_key_value(k), bt_map.get_key_value(k), "get_key_value({})", k);
                }
                MapOp::Rank(k) => {
                    prop_assert_eq!(avl_map.rank(k), bt_map.range(..*k).count(), "rank({})", k);
                }
                MapOp::Select(i) => {
                    prop_assert_eq!(avl_map.select(*i), bt_map.keys().nth(*i), "select({})", i);
                }
                MapOp::FirstKeyValue => {
                    prop_assert_eq!(avl_map.first_key_value(), bt_map.first_key_value(), "first_key_value");
                }
                MapOp::LastKeyValue => {
                    prop_assert_eq!(avl_map.last_key_value(), bt_map.last_key_value(), "last_key_value");
                }
                MapOp::PopFirst => {
                    prop_assert_eq!(avl_map.pop_first(), bt_map.pop_first(), "pop_first");
                }
                MapOp::PopLast => {
                    prop_assert_eq!(avl_map.pop_last(), bt_map.pop_last(), "pop_last");
                }
            }
            prop_assert_eq!(avl_map.len(), bt_map.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(avl_map.is_empty(), bt_map.is_empty(), "is_empty mismatch after {:?}", op);
            prop_assert!(avl_map.height() <= avl_height_bound(avl_map.len()), "height {} too large for {} entries", avl_map.height(), avl_map.len());
        }

        let avl_items: Vec<_> = avl_map.into_iter().collect();
        let bt_items: Vec<_> = bt_map.into_iter().collect();
        prop_assert_eq!(avl_items, bt_items);
    }

    /// Tests that iteration order matches BTreeMap after random insertions.
    #[test]
    fn iter_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = AvlTreeMap::new();
        let mut bt_map: BTreeMap<i64, i64> = BTreeMap::new();

        for (k, v) in &entries {
            avl_map.insert(*k, *v);
            bt_map.insert(*k, *v);
        }

        prop_assert!(avl_map.iter().eq(bt_map.iter()), "iter() mismatch");
        prop_assert!(avl_map.iter().rev().eq(bt_map.iter().rev()), "iter().rev() mismatch");
        prop_assert!(avl_map.keys().eq(bt_map.keys()), "keys() mismatch");
        prop_assert!(avl_map.values().eq(bt_map.values()), "values() mismatch");
        prop_assert!(avl_map.values().rev().eq(bt_map.values().rev()), "values().rev() mismatch");
        prop_assert!(avl_map.clone().into_keys().eq(bt_map.clone().into_keys()), "into_keys() mismatch");
        prop_assert!(avl_map.clone().into_values().rev().eq(bt_map.clone().into_values().rev()), "into_values() mismatch");
        prop_assert!((&avl_map).into_iter().eq(&bt_map), "&map into_iter mismatch");
    }

    /// Alternates between the two ends of every iterator and checks the exact
    /// size hint as it goes.
    #[test]
    fn iter_size_and_double_ended(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE),
        from_back in proptest::collection::vec(any::<bool>(), 64),
    ) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        let mut avl_iter = avl_map.iter();
        let mut bt_iter = bt_map.iter();
        let mut avl_owned = avl_map.clone().into_iter();
        let mut bt_owned = bt_map.clone().into_iter();
        for back in from_back.iter().cycle().take(bt_map.len() + 2) {
            prop_assert_eq!(avl_iter.len(), bt_iter.len());
            prop_assert_eq!(avl_owned.len(), bt_owned.len());
            if *back {
                prop_assert_eq!(avl_iter.next_back(), bt_iter.next_back());
                prop_assert_eq!(avl_owned.next_back(), bt_owned.next_back());
            } else {
                prop_assert_eq!(avl_iter.next(), bt_iter.next());
                prop_assert_eq!(avl_owned.next(), bt_owned.next());
            }
        }
        prop_assert_eq!(avl_iter.next(), None);
        prop_assert_eq!(avl_iter.next_back(), None);
    }

    #[test]
    fn get_mut_matches_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        probes in proptest::collection::vec(key_strategy(), 200),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for k in &probes {
            if let Some(v) = avl_map.get_mut(k) {
                *v = v.wrapping_add(1);
            }
            if let Some(v) = bt_map.get_mut(k) {
                *v = v.wrapping_add(1);
            }
        }
        prop_assert!(avl_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn retain_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        avl_map.retain(|k, v| {
            *v = v.wrapping_mul(3);
            k % 3 != 0
        });
        bt_map.retain(|k, v| {
            *v = v.wrapping_mul(3);
            k % 3 != 0
        });
        prop_assert!(avl_map.iter().eq(bt_map.iter()));
        prop_assert!(avl_map.height() <= avl_height_bound(avl_map.len()));

        // The rebuilt tree keeps working.
        avl_map.insert(0, 0);
        bt_map.insert(0, 0);
        prop_assert!(avl_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn clear_empties_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        avl_map.clear();
        prop_assert!(avl_map.is_empty());
        prop_assert_eq!(avl_map.height(), 0);
        prop_assert_eq!(avl_map.iter().next(), None);
        prop_assert_eq!(avl_map.first_key_value(), None);
    }

    #[test]
    fn clone_produces_equal_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut cloned = avl_map.clone();
        prop_assert_eq!(&avl_map, &cloned);
        prop_assert_eq!(avl_map.height(), cloned.height());

        // The clone is independent of the original.
        cloned.insert(i64::MAX, 0);
        prop_assert_ne!(&avl_map, &cloned);
    }

    #[test]
    fn ord_matches_btreemap(
        a in proptest::collection::vec((key_strategy(), value_strategy()), 0..200),
        b in proptest::collection::vec((key_strategy(), value_strategy()), 0..200),
    ) {
        let avl_a: AvlTreeMap<i64, i64> = a.iter().copied().collect();
        let avl_b: AvlTreeMap<i64, i64> = b.iter().copied().collect();
        let bt_a: BTreeMap<i64, i64> = a.iter().copied().collect();
        let bt_b: BTreeMap<i64, i64> = b.iter().copied().collect();
        prop_assert_eq!(avl_a == avl_b, bt_a == bt_b);
        prop_assert_eq!(avl_a.cmp(&avl_b), bt_a.cmp(&bt_b));
        prop_assert_eq!(avl_a.partial_cmp(&avl_b), bt_a.partial_cmp(&bt_b));
    }

    #[test]
    fn index_by_key_matches_btreemap(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();
        for k in bt_map.keys() {
            prop_assert_eq!(avl_map[k], bt_map[k]);
        }
    }

    #[test]
    fn hash_consistent_for_equal_maps(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let forward: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut backward = AvlTreeMap::new();
        for (k, v) in bt_latest(&entries) {
            backward.insert(k, v);
        }
        prop_assert_eq!(&forward, &backward);

        let mut hasher_a = DefaultHasher::new();
        let mut hasher_b = DefaultHasher::new();
        forward.hash(&mut hasher_a);
        backward.hash(&mut hasher_b);
        prop_assert_eq!(hasher_a.finish(), hasher_b.finish());
    }
}

/// The final value of every key in `entries`, in descending key order.
fn bt_latest(entries: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let model: BTreeMap<i64, i64> = entries.iter().copied().collect();
    model.into_iter().rev().collect()
}

// ─── Order-statistic operations (compared against Vec) ───────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn get_by_rank_matches_vec(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let sorted: Vec<(i64, i64)> = entries.iter().copied().collect::<BTreeMap<_, _>>().into_iter().collect();

        for (i, (k, v)) in sorted.iter().enumerate() {
            prop_assert_eq!(avl_map.get_by_rank(i), Some((k, v)));
            prop_assert_eq!(avl_map.select(i), Some(k));
            prop_assert_eq!(avl_map[Rank(i)], *v);
        }
        prop_assert_eq!(avl_map.get_by_rank(sorted.len()), None);
        prop_assert_eq!(avl_map.select(usize::MAX), None);
    }

    #[test]
    fn get_by_rank_mut_matches_vec(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let len = avl_map.len();

        for i in (0..len).step_by(7) {
            if let Some((_, v)) = avl_map.get_by_rank_mut(i) {
                *v = -1;
            }
        }
        avl_map[Rank(len - 1)] = -2;

        for (i, (_, v)) in avl_map.iter().enumerate() {
            let expected = if i == len - 1 {
                -2
            } else if i % 7 == 0 {
                -1
            } else {
                *v
            };
            prop_assert_eq!(*v, expected);
        }
    }

    #[test]
    fn rank_matches_vec(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE),
        probes in proptest::collection::vec(key_strategy(), 200),
    ) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let keys: Vec<i64> = avl_map.keys().copied().collect();

        for probe in &probes {
            let expected = keys.partition_point(|k| k < probe);
            prop_assert_eq!(avl_map.rank(probe), expected, "rank({})", probe);
            let present = keys.binary_search(probe).ok();
            prop_assert_eq!(avl_map.rank_of(probe), present, "rank_of({})", probe);
        }
    }

    #[test]
    fn rank_of_get_by_rank_roundtrip(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        for (k, _) in &avl_map {
            let rank = avl_map.rank_of(k).unwrap();
            prop_assert_eq!(avl_map.select(rank), Some(k));
        }
    }
}

// ─── Extend and iter_mut ─────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn extend_matches_btreemap(
        initial in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE),
        extra in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = initial.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = initial.iter().copied().collect();
        avl_map.extend(extra.iter().map(|(k, v)| (k, v)));
        bt_map.extend(extra.iter().map(|(k, v)| (k, v)));
        prop_assert!(avl_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn iter_mut_matches(entries in proptest::collection::vec((key_strategy(), value_strategy()), TEST_SIZE)) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for (k, v) in &mut avl_map {
            *v = v.wrapping_add(*k);
        }
        for (k, v) in &mut bt_map {
            *v = v.wrapping_add(*k);
        }
        prop_assert!(avl_map.iter().eq(bt_map.iter()));

        for v in avl_map.values_mut().rev() {
            *v = v.wrapping_neg();
        }
        for v in bt_map.values_mut().rev() {
            *v = v.wrapping_neg();
        }
        prop_assert!(avl_map.iter().eq(bt_map.iter()));
    }

    #[test]
    fn iter_mut_double_ended_traversal(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE),
        from_back in proptest::collection::vec(any::<bool>(), 64),
    ) {
        let mut avl_map: AvlTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut bt_map: BTreeMap<i64, i64> = entries.iter().copied().collect();

        let mut avl_iter = avl_map.iter_mut();
        let mut bt_iter = bt_map.iter_mut();
        for back in from_back.iter().cycle().take(entries.len() + 1) {
            prop_assert_eq!(avl_iter.len(), bt_iter.len());
            let (avl_next, bt_next) = if *back {
                (avl_iter.next_back(), bt_iter.next_back())
            } else {
                (avl_iter.next(), bt_iter.next())
            };
            match (avl_next, bt_next) {
                (Some((ak, av)), Some((bk, bv))) => {
                    prop_assert_eq!(ak, bk);
                    *av = 0;
                    *bv = 0;
                }
                (None, None) => {}
                (a, b) => prop_assert!(false, "iter_mut mismatch: {:?} vs {:?}", a, b),
            }
        }
        drop(avl_iter);
        prop_assert!(avl_map.iter().eq(bt_map.iter()));
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn iteration_visits_keys_in_ascending_order() {
    let mut map = AvlTreeMap::new();
    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.insert(key, ());
    }
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    // A second traversal starts over from the minimum.
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
}

#[test]
fn ascending_inserts_rotate_into_a_balanced_tree() {
    let mut map = AvlTreeMap::new();
    for key in [10, 20, 30] {
        map.insert(key, ());
    }
    assert!(map.height() <= 2);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [10, 20, 30]);
    assert_eq!(map.select(1), Some(&20));
}

#[test]
fn duplicate_insert_updates_value() {
    let mut map = AvlTreeMap::new();
    assert_eq!(map.insert(5, "a"), None);
    assert_eq!(map.insert(5, "b"), Some("a"));
    assert_eq!(map.get(&5), Some(&"b"));
    assert_eq!(map.len(), 1);
}

#[test]
fn removing_a_node_with_two_children() {
    let mut map: AvlTreeMap<i32, i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().map(|k| (k, k * 100)).collect();
    assert_eq!(map.len(), 7);
    assert_eq!(map.height(), 3);

    // The root of a perfect 7-node tree has two children.
    assert_eq!(map.remove(&4), Some(400));
    assert_eq!(map.len(), 6);
    assert_eq!(map.get(&4), None);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
    assert!(map.height() <= 3);
    for (rank, key) in [1, 2, 3, 5, 6, 7].iter().enumerate() {
        assert_eq!(map.rank_of(key), Some(rank));
    }
}

#[test]
fn lookups_on_an_empty_map() {
    let mut map: AvlTreeMap<i32, i32> = AvlTreeMap::new();
    assert_eq!(map.get(&1), None);
    assert_eq!(map.remove(&1), None);
    assert_eq!(map.rank(&1), 0);
    assert_eq!(map.rank_of(&1), None);
    assert_eq!(map.select(0), None);
    assert_eq!(map.pop_first(), None);
    assert_eq!(map.iter().next(), None);
    assert_eq!(map.height(), 0);
}

#[test]
fn removing_the_only_entry_leaves_an_empty_map() {
    let mut map = AvlTreeMap::from([(1, 'a')]);
    assert_eq!(map.remove(&1), Some('a'));
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
    assert_eq!(map.remove(&1), None);
}

#[test]
fn custom_comparators_define_the_order() {
    let mut map = AvlTreeMap::with_comparator(Reverse);
    map.extend((0..10).map(|k| (k, k)));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), (0..10).rev().collect::<Vec<_>>());
    assert_eq!(map.rank(&7), 2);
    assert_eq!(map[Rank(0)], 9);

    let by_len = FnComparator(|a: &&str, b: &&str| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    let mut words: AvlTreeMap<&str, usize, _> = AvlTreeMap::with_comparator(by_len);
    for word in ["pear", "fig", "banana", "kiwi"] {
        words.insert(word, word.len());
    }
    assert_eq!(words.keys().copied().collect::<Vec<_>>(), ["fig", "kiwi", "pear", "banana"]);
}

#[test]
fn string_keys_are_looked_up_by_str() {
    let mut map: AvlTreeMap<String, i32> = AvlTreeMap::new();
    map.insert("beta".to_owned(), 2);
    map.insert("alpha".to_owned(), 1);
    assert_eq!(map.get("alpha"), Some(&1));
    assert_eq!(map["beta"], 2);
    assert_eq!(map.rank("b"), 1);
    assert_eq!(map.remove("alpha"), Some(1));
}

#[test]
fn default_iterators_are_empty() {
    let iter: avl_tree_map::IntoIter<i32, i32> = Default::default();
    assert_eq!(iter.len(), 0);
    let keys: avl_tree_map::IntoKeys<i32, i32> = Default::default();
    assert_eq!(keys.count(), 0);
}

#[test]
fn with_capacity_reserves_room() {
    let mut map: AvlTreeMap<u32, u32> = AvlTreeMap::with_capacity(100);
    let capacity = map.capacity();
    assert!(capacity >= 100);
    for key in 0..100 {
        map.insert(key, key);
    }
    assert_eq!(map.capacity(), capacity);
}

#[test]
fn from_array_uses_natural_order() {
    let map = AvlTreeMap::from([(3, "c"), (1, "a"), (2, "b")]);
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn retain_keeps_entries_when_predicate_panics() {
    let mut map: AvlTreeMap<i32, i32> = (0..10).map(|k| (k, k * k)).collect();
    let model: BTreeMap<i32, i32> = (0..10).map(|k| (k, k * k)).collect();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        map.retain(|&k, _| if k == 5 { panic!("boom") } else { k % 2 == 0 });
    }));

    assert!(result.is_err());
    assert_eq!(map.len(), 10);
    assert!(map.iter().eq(model.iter()));
    assert_eq!(map.select(5), Some(&5));
}

// ─── Panics ──────────────────────────────────────────────────────────────────

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_rank_out_of_bounds_panics() {
    let map = AvlTreeMap::from([(1, 1), (2, 2)]);
    let _ = map[Rank(2)];
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_mut_rank_empty_map_panics() {
    let mut map: AvlTreeMap<i32, i32> = AvlTreeMap::new();
    map[Rank(0)] = 1;
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let map = AvlTreeMap::from([(1, 1)]);
    let _ = map[&2];
}
