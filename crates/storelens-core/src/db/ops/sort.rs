/// Stable descending sort by key; ties keep their original relative
/// order, which makes downstream `top_n` output deterministic.
#[must_use]
pub fn sort_desc<T, K, F>(mut rows: Vec<T>, mut key: F) -> Vec<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

/// First `n` rows of an already-ordered sequence; fewer rows than `n` is
/// under-fill, not an error.
#[must_use]
pub fn top_n<T>(mut rows: Vec<T>, n: usize) -> Vec<T> {
    rows.truncate(n);
    rows
}

///
/// TESTS
///
