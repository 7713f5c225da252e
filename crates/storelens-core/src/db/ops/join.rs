use std::collections::BTreeMap;

/// Inner equi-join.
///
/// Rows without a key match on either side are dropped, mirroring
/// inner-join semantics throughout the engine. Output follows left input
/// order; per-key right matches keep right input order, so a chain of
/// joins yields one deterministic row order.
#[must_use]
pub fn join<L, R, K, LK, RK>(
    left: impl IntoIterator<Item = L>,
    right: impl IntoIterator<Item = R>,
    mut left_key: LK,
    mut right_key: RK,
) -> Vec<(L, R)>
where
    L: Clone,
    R: Clone,
    K: Ord,
    LK: FnMut(&L) -> K,
    RK: FnMut(&R) -> K,
{
    let mut by_key: BTreeMap<K, Vec<R>> = BTreeMap::new();
    for row in right {
        by_key.entry(right_key(&row)).or_default().push(row);
    }

    let mut out = Vec::new();
    for row in left {
        if let Some(matches) = by_key.get(&left_key(&row)) {
            for matched in matches {
                out.push((row.clone(), matched.clone()));
            }
        }
    }

    out
}

///
/// TESTS
///
