//! Stable least-significant-digit byte radix sort over integer keys.
//!
//! Every batch path in this crate (flat map bulk insert/erase, batch-list
//! re-sort, batch query merges) funnels through [`radix_sort_by_key`].
//! Negative keys are handled transparently: [`IntegerKey::to_radix_bits`]
//! maps `K` to an unsigned, order-preserving `u64` before any byte pass
//! runs, so the sign bit never needs special-casing here.

use crate::key::IntegerKey;
use cuneiform::cuneiform;

const RADIX_BUCKETS: usize = 256;

#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts `items` ascending by the key `key_fn` extracts from each element.
///
/// Stable: elements with equal keys retain their relative input order.
/// Runs one counting pass per byte of `K` (`K::BYTES` passes total).
///
/// # Examples
///
/// ```
/// use fastmaps::radix::radix_sort_by_key;
///
/// let mut values = vec![(5i32, 'a'), (1, 'b'), (3, 'c'), (1, 'd')];
/// radix_sort_by_key(&mut values, |&(k, _)| k);
/// assert_eq!(values, vec![(1, 'b'), (1, 'd'), (3, 'c'), (5, 'a')]);
/// ```
pub fn radix_sort_by_key<T, K, F>(items: &mut [T], key_fn: F)
where
    T: Clone,
    K: IntegerKey,
    F: Fn(&T) -> K,
{
    let len = items.len();
    if len <= 1 {
        return;
    }
    log::debug!("radix_sort_by_key: {len} items, {} passes", K::BYTES);

    let mut bits: Vec<u64> = items.iter().map(|it| key_fn(it).to_radix_bits()).collect();
    let mut dst_bits = vec![0u64; len];
    let mut src = items.to_vec();
    let mut dst = items.to_vec();

    for pass in 0..K::BYTES {
        let shift = 8 * pass;
        let mut counts = RadixCounts {
            data: [0; RADIX_BUCKETS],
        };
        for &b in &bits {
            let byte = ((b >> shift) & 0xFF) as usize;
            counts.data[byte] += 1;
        }

        let mut offsets = [0usize; RADIX_BUCKETS];
        let mut sum = 0;
        for bucket in 0..RADIX_BUCKETS {
            offsets[bucket] = sum;
            sum += counts.data[bucket];
        }

        for i in 0..len {
            let byte = ((bits[i] >> shift) & 0xFF) as usize;
            let pos = offsets[byte];
            dst[pos] = src[i].clone();
            dst_bits[pos] = bits[i];
            offsets[byte] += 1;
        }

        std::mem::swap(&mut src, &mut dst);
        std::mem::swap(&mut bits, &mut dst_bits);
    }

    items.clone_from_slice(&src);
}

/// Sorts a flat slice of keys ascending, in place.
///
/// Convenience wrapper over [`radix_sort_by_key`] with the identity
/// projection, used by the batch containers to pre-sort query keys.
pub fn radix_sort_keys<K: IntegerKey>(keys: &mut [K]) {
    radix_sort_by_key(keys, |k| *k);
}
