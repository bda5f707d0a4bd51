//! Bucket partitioning for the outer dispatch.
//!
//! Entries are spread over a power-of-two number of buckets by masking the
//! type-name hash:
//!
//! ```text
//! bucket_count = next_pow2(ceil(n / max_per_bucket))   (n > 0)
//! mask         = bucket_count - 1                      (n > 0)
//!              = -1                                    (n = 0, never matches a bucket)
//! bucket(e)    = type_name_hash(e.type_name) & mask
//! ```
//!
//! `max_per_bucket` bounds the average, not every bucket: a hash collision can
//! put more entries in one bucket and leave another empty.

use factory_registry::type_name_hash;

use crate::def::Entry;

/// Mask used when there are no entries.
pub const EMPTY_MASK: i32 = -1;

/// Number of buckets for `entry_count` entries.
///
/// Zero for zero entries; otherwise the smallest power of two that is at
/// least `ceil(entry_count / max_per_bucket)`.
pub fn bucket_count(entry_count: usize, max_per_bucket: usize) -> usize {
    if entry_count == 0 {
        return 0;
    }
    entry_count.div_ceil(max_per_bucket.max(1)).next_power_of_two()
}

/// Hash mask for a bucket count.
///
/// Hashes are `i32`, so at most 2^31 buckets are addressable. Larger counts
/// saturate to `i32::MAX`; the buckets above it can never be selected.
pub fn mask_for(bucket_count: usize) -> i32 {
    if bucket_count == 0 {
        EMPTY_MASK
    } else {
        i32::try_from(bucket_count - 1).unwrap_or(i32::MAX)
    }
}

/// Entries grouped by bucket index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    mask: i32,
    buckets: Vec<Vec<&'a Entry>>,
}

impl<'a> Partition<'a> {
    /// Partition `entries`, keeping discovery order inside each bucket.
    pub fn new(entries: &'a [Entry], max_per_bucket: usize) -> Self {
        let count = bucket_count(entries.len(), max_per_bucket);
        let mask = mask_for(count);

        let mut buckets: Vec<Vec<&'a Entry>> = vec![Vec::new(); count];
        for entry in entries {
            let index = (type_name_hash(&entry.type_name) & mask) as usize;
            buckets[index].push(entry);
        }

        tracing::trace!(
            entries = entries.len(),
            buckets = count,
            mask,
            empty = buckets.iter().filter(|b| b.is_empty()).count(),
            "partitioned registry entries"
        );

        Self { mask, buckets }
    }

    pub fn mask(&self) -> i32 {
        self.mask
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries in bucket `index`, empty when out of range.
    pub fn bucket(&self, index: usize) -> &[&'a Entry] {
        self.buckets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every bucket index with its entries, in index order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &[&'a Entry])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, entries)| (index, entries.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
