//! Sorted linked-hash-map variant of [`crate::batch_list::BatchList`].
//!
//! Backed by a [`LinkedHashMap`] instead of a plain list, so point
//! lookups by key are `O(1)` via the hash index between re-sorts, at
//! the cost of a full rebuild (rather than an in-place bucket
//! redistribution) whenever a re-sort is required.

use crate::key::IntegerKey;
use crate::linked_hash_map::LinkedHashMap;
use crate::radix::radix_sort_by_key;

/// A `LinkedHashMap` kept in ascending key order by explicit re-sort.
#[derive(Default)]
pub struct BatchHashList<K, V> {
    map: LinkedHashMap<K, V>,
}

impl<K: IntegerKey, V> BatchHashList<K, V> {
    pub fn new() -> Self {
        Self {
            map: LinkedHashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rebuilds link order to match ascending key order, without
    /// touching the hash index's key-to-value associations.
    fn sort_keys(&mut self) {
        let keys: Vec<K> = self.map.iter().map(|(k, _)| k).collect();
        let mut entries: Vec<(K, V)> = keys
            .into_iter()
            .filter_map(|k| self.map.remove(k).map(|v| (k, v)))
            .collect();
        radix_sort_by_key(&mut entries, |(k, _)| *k);
        self.map.clear();
        for (k, v) in entries {
            self.map.add_tail(k, v).expect("keys were already unique");
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.map.contains_key(key) {
            return false;
        }
        self.map.add_tail(key, value).expect("checked above");
        self.sort_keys();
        true
    }

    pub fn batch_insert(&mut self, entries: Vec<(K, V)>) {
        for (k, v) in entries {
            let _ = self.map.remove(k);
            self.map.add_tail(k, v).expect("key just removed if present");
        }
        self.sort_keys();
    }

    pub fn find(&mut self, key: K) -> Option<&V> {
        self.sort_keys();
        self.map.get(key)
    }

    pub fn contains_key(&mut self, key: K) -> bool {
        self.find(key).is_some()
    }

    pub fn predecessor(&mut self, key: K) -> Option<(K, &V)> {
        self.sort_keys();
        let mut candidate = None;
        for (k, v) in self.map.iter() {
            if k < key {
                candidate = Some((k, v));
            } else {
                break;
            }
        }
        candidate
    }

    pub fn successor(&mut self, key: K) -> Option<(K, &V)> {
        self.sort_keys();
        for (k, v) in self.map.iter() {
            if k > key {
                return Some((k, v));
            }
        }
        None
    }

    pub fn erase_key(&mut self, key: K) -> bool {
        self.map.remove(key).is_some()
    }

    pub fn batch_erase(&mut self, keys: &[K]) {
        for &key in keys {
            self.map.remove(key);
        }
    }

    pub fn batch_find(&mut self, keys: &[K]) -> Vec<Option<&V>> {
        self.sort_keys();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);
        sorted_keys.into_iter().map(|k| self.map.get(k)).collect()
    }

    pub fn batch_predecessors(&mut self, keys: &[K]) -> Vec<Option<(K, &V)>> {
        self.sort_keys();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);

        let mut results = Vec::with_capacity(sorted_keys.len());
        let mut iter = self.map.iter().peekable();
        let mut pred = None;
        for &key in &sorted_keys {
            while let Some(&(k, _)) = iter.peek() {
                if k < key {
                    pred = iter.next();
                } else {
                    break;
                }
            }
            results.push(pred);
        }
        results
    }

    pub fn batch_successors(&mut self, keys: &[K]) -> Vec<Option<(K, &V)>> {
        self.sort_keys();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);

        let mut results = Vec::with_capacity(sorted_keys.len());
        let mut iter = self.map.iter().peekable();
        for &key in &sorted_keys {
            while let Some(&(k, _)) = iter.peek() {
                if k <= key {
                    iter.next();
                } else {
                    break;
                }
            }
            results.push(iter.peek().copied());
        }
        results
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (K, &V)> {
        self.map.iter()
    }
}
