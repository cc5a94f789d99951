//! # Fastmaps
//!
//! `fastmaps` is a collection of ordered associative containers keyed by
//! fixed-width integers, built to compare the performance trade-offs of
//! fundamentally different index structures under one uniform contract:
//! lookup, ordered predecessor/successor, range iteration, insertion and
//! deletion, with keys always reachable in ascending order.
//!
//! ## Containers
//!
//! - [`XFastTrie`]: a bit-trie of hash tables giving `O(log w)`
//!   predecessor/successor queries, where `w` is the key's bit width.
//! - [`AvlTree`]: a strictly height-balanced binary search tree.
//! - [`Treap`]: a binary search tree balanced by randomized heap priority.
//! - [`FlatMap`]: a sorted `Vec` with binary-search point queries and a
//!   radix-sort-backed batch insert/erase path.
//! - [`LinkedHashMap`]: a sorted doubly-linked list with a hash index,
//!   giving `O(1)` positional splicing.
//! - [`BatchList`] / [`BatchHashList`]: sorted lists (plain and
//!   hash-indexed) built around bulk radix-sort-then-scan operations.
//!
//! Every container shares the same key abstraction ([`IntegerKey`]) and
//! the same stable LSD radix sort ([`radix_sort_by_key`]) for its batch
//! paths.
//!
//! ## Usage
//!
//! ```rust
//! use fastmaps::AvlTree;
//!
//! let mut tree: AvlTree<i32, &str> = AvlTree::new();
//! tree.insert(5, "five");
//! tree.insert(2, "two");
//! tree.insert(8, "eight");
//!
//! assert_eq!(tree.predecessor(5).map(|(k, v)| (k, *v)), Some((2, "two")));
//! let keys: Vec<i32> = tree.iter().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec![2, 5, 8]);
//! ```

pub mod arena;
pub mod avl;
pub mod batch_hash_list;
pub mod batch_list;
pub mod dlist;
pub mod error;
pub mod flat_map;
pub mod key;
pub mod linked_hash_map;
pub mod radix;
pub mod treap;
pub mod xfast_trie;

pub use avl::AvlTree;
pub use batch_hash_list::BatchHashList;
pub use batch_list::BatchList;
pub use error::MapError;
pub use flat_map::FlatMap;
pub use key::IntegerKey;
pub use linked_hash_map::LinkedHashMap;
pub use radix::{radix_sort_by_key, radix_sort_keys};
pub use treap::Treap;
pub use xfast_trie::XFastTrie;

pub mod prelude {
    pub use crate::avl::AvlTree;
    pub use crate::batch_hash_list::BatchHashList;
    pub use crate::batch_list::BatchList;
    pub use crate::error::MapError;
    pub use crate::flat_map::FlatMap;
    pub use crate::key::IntegerKey;
    pub use crate::linked_hash_map::LinkedHashMap;
    pub use crate::radix::{radix_sort_by_key, radix_sort_keys};
    pub use crate::treap::Treap;
    pub use crate::xfast_trie::XFastTrie;
}
