//! Sorted doubly-linked list with batch insert/query/erase operations.
//!
//! Every mutating operation keeps the list in ascending key order by
//! re-sorting it wholesale via the shared radix sort rather than
//! maintaining order incrementally; this amortizes well when entries
//! arrive in batches, which is the workload this container targets.

use crate::dlist::DList;
use crate::key::IntegerKey;
use crate::radix::radix_sort_by_key;

/// A doubly-linked list of `(K, V)` pairs kept in ascending key order by
/// explicit re-sort after each mutation.
#[derive(Default)]
pub struct BatchList<K, V> {
    list: DList<(K, V)>,
}

impl<K: IntegerKey, V> BatchList<K, V> {
    pub fn new() -> Self {
        Self { list: DList::new() }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn resort(&mut self) {
        let mut entries: Vec<(K, V)> = Vec::with_capacity(self.list.len());
        while !self.list.is_empty() {
            let head = self.list.head().unwrap();
            entries.push(self.list.remove(head).0);
        }
        radix_sort_by_key(&mut entries, |(k, _)| *k);
        for entry in entries {
            self.list.push_back(entry);
        }
    }

    /// Prepends `(key, value)` and re-sorts the whole list.
    pub fn insert(&mut self, key: K, value: V) {
        self.list.push_front((key, value));
        self.resort();
    }

    /// Prepends every pair in `entries` and re-sorts once.
    pub fn batch_insert(&mut self, entries: Vec<(K, V)>) {
        for entry in entries {
            self.list.push_front(entry);
        }
        self.resort();
    }

    fn find_handle(&self, key: K) -> Option<usize> {
        for (h, entry) in self.list.iter() {
            if entry.0 == key {
                return Some(h);
            }
        }
        None
    }

    pub fn find(&mut self, key: K) -> Option<&V> {
        self.resort();
        self.find_handle(key).map(|h| &self.list.get(h).1)
    }

    pub fn contains_key(&mut self, key: K) -> bool {
        self.find(key).is_some()
    }

    pub fn predecessor(&mut self, key: K) -> Option<(K, &V)> {
        self.resort();
        let mut candidate = None;
        for (_, (k, v)) in self.list.iter() {
            if *k < key {
                candidate = Some((*k, v));
            } else {
                break;
            }
        }
        candidate
    }

    pub fn successor(&mut self, key: K) -> Option<(K, &V)> {
        self.resort();
        for (_, (k, v)) in self.list.iter() {
            if *k > key {
                return Some((*k, v));
            }
        }
        None
    }

    /// Removes the single entry with the given key, if present. Unlike
    /// an implementation that walks and erases inside the same loop
    /// (relying on the iterator `erase` returns to keep advancing), this
    /// locates the one matching handle and removes it directly, so
    /// there is no stale handle for the caller to trip over afterward.
    pub fn erase_key(&mut self, key: K) -> bool {
        match self.find_handle(key) {
            Some(h) => {
                self.list.remove(h);
                true
            }
            None => false,
        }
    }

    /// Radix-sorts `keys`, then removes every matching entry in one
    /// linear merge pass over the (re-sorted) list.
    pub fn batch_erase(&mut self, keys: &[K]) {
        if keys.is_empty() {
            return;
        }
        self.resort();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);
        sorted_keys.dedup();

        let mut ki = 0;
        let mut cur = self.list.head();
        while let Some(h) = cur {
            let entry_key = self.list.get(h).0;
            while ki < sorted_keys.len() && sorted_keys[ki] < entry_key {
                ki += 1;
            }
            let next = self.list.next(h);
            if ki < sorted_keys.len() && sorted_keys[ki] == entry_key {
                self.list.remove(h);
            }
            cur = next;
        }
    }

    /// Radix-sorts `keys` and returns, for each (in sorted order), the
    /// value if present.
    pub fn batch_find(&mut self, keys: &[K]) -> Vec<Option<&V>> {
        self.resort();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);

        let mut results = Vec::with_capacity(sorted_keys.len());
        let mut cur = self.list.head();
        for &key in &sorted_keys {
            while let Some(h) = cur {
                if self.list.get(h).0 < key {
                    cur = self.list.next(h);
                } else {
                    break;
                }
            }
            match cur {
                Some(h) if self.list.get(h).0 == key => results.push(Some(&self.list.get(h).1)),
                _ => results.push(None),
            }
        }
        results
    }

    /// Radix-sorts `keys` and returns, for each (in sorted order), the
    /// predecessor entry if any.
    pub fn batch_predecessors(&mut self, keys: &[K]) -> Vec<Option<(K, &V)>> {
        self.resort();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);

        let mut results = Vec::with_capacity(sorted_keys.len());
        let mut cur = self.list.head();
        let mut pred: Option<usize> = None;
        for &key in &sorted_keys {
            while let Some(h) = cur {
                if self.list.get(h).0 < key {
                    pred = Some(h);
                    cur = self.list.next(h);
                } else {
                    break;
                }
            }
            results.push(pred.map(|h| {
                let (k, v) = self.list.get(h);
                (*k, v)
            }));
        }
        results
    }

    /// Radix-sorts `keys` and returns, for each (in sorted order), the
    /// successor entry if any.
    pub fn batch_successors(&mut self, keys: &[K]) -> Vec<Option<(K, &V)>> {
        self.resort();
        let mut sorted_keys = keys.to_vec();
        radix_sort_by_key(&mut sorted_keys, |k| *k);

        let mut results = Vec::with_capacity(sorted_keys.len());
        let mut cur = self.list.head();
        for &key in &sorted_keys {
            while let Some(h) = cur {
                if self.list.get(h).0 <= key {
                    cur = self.list.next(h);
                } else {
                    break;
                }
            }
            results.push(cur.map(|h| {
                let (k, v) = self.list.get(h);
                (*k, v)
            }));
        }
        results
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns entries in their current link order. Call a mutator
    /// first (or [`BatchList::resort`] indirectly via any query) to
    /// guarantee ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (K, &V)> {
        self.list.iter().map(|(_, (k, v))| (*k, v))
    }
}
