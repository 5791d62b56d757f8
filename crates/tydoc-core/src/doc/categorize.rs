//! Category partitioning for ordered documentation entries

use crate::doc::types::{Category, DocEntry, Documentation};
use std::collections::HashMap;

/// Partition an ordered entry sequence into the default `exports` list and
/// named category buckets.
///
/// An entry carrying a `category` tag lands in the bucket named by the tag's
/// text (and only there); an entry without one lands in `exports`. Buckets
/// are created in first-seen order and never reordered; within a bucket,
/// entries keep the position ordering established upstream.
#[must_use]
pub fn categorize(entries: Vec<DocEntry>) -> Documentation {
    let mut exports = Vec::new();
    let mut bucket_order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<DocEntry>> = HashMap::new();

    for entry in entries {
        match entry.symbol().category().map(ToString::to_string) {
            None => exports.push(entry),
            Some(name) => {
                if !buckets.contains_key(&name) {
                    bucket_order.push(name.clone());
                }
                buckets.entry(name).or_default().push(entry);
            }
        }
    }

    let categories = bucket_order
        .into_iter()
        .filter_map(|name| {
            buckets
                .remove(&name)
                .map(|entries| Category { name, entries })
        })
        .collect();

    Documentation {
        exports,
        categories,
    }
}
