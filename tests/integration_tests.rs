use fastmaps::prelude::*;

// Universal invariants, checked against every container: uniqueness,
// ascending order, count, and reachability from both ends.

fn assert_ascending<I: Iterator<Item = i32>>(keys: I) {
    let keys: Vec<i32> = keys.collect();
    for w in keys.windows(2) {
        assert!(w[0] < w[1], "keys not strictly ascending: {keys:?}");
    }
}

#[test]
fn avl_universal_invariants() {
    let mut t: AvlTree<i32, i32> = AvlTree::new();
    for k in [7, 2, 9, 1, 5, 3, 8, 4, 6, 0] {
        t.insert(k, k * 10);
    }
    assert_eq!(t.len(), 10);
    assert_ascending(t.iter().map(|(k, _)| k));
    let forward: Vec<i32> = t.iter().map(|(k, _)| k).collect();
    let mut backward: Vec<i32> = t.iter().rev().map(|(k, _)| k).collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert!(!t.insert(7, 999));
}

#[test]
fn treap_universal_invariants() {
    let mut t: Treap<i32, i32> = Treap::new();
    for k in [7, 2, 9, 1, 5, 3, 8, 4, 6, 0] {
        t.insert(k, k * 10);
    }
    assert_eq!(t.len(), 10);
    assert_ascending(t.iter().map(|(k, _)| k));
}

#[test]
fn flat_map_universal_invariants() {
    let mut m: FlatMap<i32, i32> = FlatMap::new();
    for k in [7, 2, 9, 1, 5] {
        m.insert(k, k * 10);
    }
    assert_eq!(m.len(), 5);
    assert_ascending(m.iter().map(|(k, _)| k));
}

#[test]
fn linked_hash_map_universal_invariants() {
    let mut m: LinkedHashMap<i32, i32> = LinkedHashMap::new();
    for k in [3, 1, 2] {
        m.add_tail(k, k * 10).unwrap();
    }
    assert_eq!(m.len(), 3);
    // Link order, not key order, for a plain LinkedHashMap; sortedness
    // only holds once entries are spliced in order (exercised below).
    let mut m2: LinkedHashMap<i32, i32> = LinkedHashMap::new();
    m2.add_head(2, 'b' as i32).unwrap();
    m2.add_tail(5, 'e' as i32).unwrap();
    m2.insert_before(3, 'c' as i32, 5).unwrap();
    assert_ascending(m2.iter().map(|(k, _)| k));
}

#[test]
fn xfast_trie_universal_invariants() {
    let mut t: XFastTrie<u32, i32> = XFastTrie::new();
    for k in [7u32, 2, 9, 1, 5] {
        t.insert(k, k as i32 * 10).unwrap();
    }
    assert_eq!(t.len(), 5);
    assert_ascending(t.iter().map(|(k, _)| k as i32));
}

// Named end-to-end scenarios.

#[test]
fn scenario_trie_insertion_order() {
    let mut t: XFastTrie<u32, i32> = XFastTrie::new();
    t.insert(1, 1).unwrap();
    t.insert(3, 3).unwrap();
    t.insert(2, 2).unwrap();
    let entries: Vec<(u32, i32)> = t.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(entries, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn scenario_trie_neighbor_queries() {
    let mut t: XFastTrie<u32, i32> = XFastTrie::new();
    t.insert(10, 1).unwrap();
    t.insert(20, 2).unwrap();
    t.insert(30, 3).unwrap();
    assert_eq!(t.predecessor(30).map(|(k, v)| (k, *v)), Some((20, 2)));
    assert_eq!(t.predecessor(10), None);
    assert_eq!(t.successor(10).map(|(k, v)| (k, *v)), Some((20, 2)));
    assert_eq!(t.successor(30), None);
}

#[test]
fn scenario_avl_deletion_rebalance() {
    let mut t: AvlTree<i32, i32> = AvlTree::new();
    for k in [10, 20, 30, 40, 50] {
        t.insert(k, k);
    }
    assert!(t.height() <= 2);
    assert!(t.erase(10));
    let keys: Vec<i32> = t.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![20, 30, 40, 50]);
    assert!(t.height() <= 2);
}

#[test]
fn scenario_flat_map_batch_dedup_keeps_first() {
    let mut m: FlatMap<i32, char> = FlatMap::new();
    m.insert_batch(vec![(1, 'a'), (2, 'b'), (1, 'z'), (3, 'c'), (2, 'y')]);
    assert_eq!(m.find(1), Some(&'a'));
    assert_eq!(m.find(2), Some(&'b'));
    assert_eq!(m.find(3), Some(&'c'));
}

#[test]
fn scenario_radix_sort_signedness() {
    let mut keys = vec![-3i32, 5, 0, -1, 2];
    fastmaps::radix_sort_keys(&mut keys);
    assert_eq!(keys, vec![-3, -1, 0, 2, 5]);
}

#[test]
fn scenario_linked_hash_map_splice() {
    let mut m: LinkedHashMap<i32, char> = LinkedHashMap::new();
    m.add_head(2, 'b').unwrap();
    m.add_tail(5, 'e').unwrap();
    m.insert_before(3, 'c', 5).unwrap();
    m.insert_after(4, 'd', 3).unwrap();
    m.insert_before(1, 'a', 2).unwrap();

    let keys: Vec<i32> = m.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![1, 2, 3, 4, 5]);

    assert_eq!(m.remove(3), Some('c'));
    let keys: Vec<i32> = m.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec![1, 2, 4, 5]);
}

// Round-trip / idempotence: erasing every inserted key empties the
// container, and batch operations are idempotent when repeated.

#[test]
fn erase_every_key_empties_every_container() {
    let keys: Vec<i32> = (0..200).map(|i| i * 7 % 997).collect();

    let mut avl: AvlTree<i32, i32> = AvlTree::new();
    let mut treap: Treap<i32, i32> = Treap::new();
    let mut trie: XFastTrie<i32, i32> = XFastTrie::new();
    for &k in &keys {
        avl.insert(k, k);
        treap.insert(k, k);
        let _ = trie.insert(k, k);
    }
    for &k in &keys {
        avl.erase(k);
        treap.erase(k);
        let _ = trie.erase(k);
    }
    assert!(avl.is_empty());
    assert!(treap.is_empty());
    assert!(trie.is_empty());
}

#[test]
fn batch_insert_is_idempotent() {
    let mut m: FlatMap<i32, i32> = FlatMap::new();
    let entries: Vec<(i32, i32)> = (0..50).map(|k| (k, k)).collect();
    m.insert_batch(entries.clone());
    let once: Vec<(i32, i32)> = m.iter().map(|(k, v)| (k, *v)).collect();
    m.insert_batch(entries);
    let twice: Vec<(i32, i32)> = m.iter().map(|(k, v)| (k, *v)).collect();
    assert_eq!(once, twice);
}
