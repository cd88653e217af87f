// File: crates/plot-core/src/group.rs
// Summary: First-seen-order grouping of records by categorical keys.

use indexmap::IndexMap;

/// Partition `records` by a key function, preserving the first-seen order
/// of keys. That order governs the left-to-right category order on the
/// rendered axis, so it is never sorted.
pub fn group_by_key<'a, T, K>(records: &'a [T], key: K) -> IndexMap<String, Vec<&'a T>>
where
    K: Fn(&T) -> &str,
{
    let mut groups: IndexMap<String, Vec<&T>> = IndexMap::new();
    for r in records {
        groups.entry(key(r).to_string()).or_default().push(r);
    }
    groups
}

/// Partition `records` by a key function and extract one numeric value per
/// record, preserving first-seen key order. Feeds the quantile summarizer.
pub fn group_values<T, K, V>(records: &[T], key: K, value: V) -> IndexMap<String, Vec<f64>>
where
    K: Fn(&T) -> &str,
    V: Fn(&T) -> f64,
{
    let mut groups: IndexMap<String, Vec<f64>> = IndexMap::new();
    for r in records {
        groups.entry(key(r).to_string()).or_default().push(value(r));
    }
    groups
}

/// Distinct keys in first-seen order; used to build scale domains.
pub fn distinct<T, K>(records: &[T], key: K) -> Vec<String>
where
    K: Fn(&T) -> &str,
{
    let mut out: Vec<String> = Vec::new();
    for r in records {
        let k = key(r);
        if !out.iter().any(|d| d == k) {
            out.push(k.to_string());
        }
    }
    out
}
