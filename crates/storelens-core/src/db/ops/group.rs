use derive_more::{Deref, IntoIterator};
use std::collections::{BTreeMap, btree_map::Entry};

///
/// Group
///
/// One key and its member rows. Members are never empty: a group only
/// exists because at least one row produced its key.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Group<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

///
/// Grouped
///
/// Result of [`group_by`]: groups in first-seen key order, members in
/// input order. Group order is an implementation detail unless followed
/// by an explicit sort.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Grouped<K, T> {
    groups: Vec<Group<K, T>>,
}

impl<K, T> Grouped<K, T> {
    pub fn iter(&self) -> std::slice::Iter<'_, Group<K, T>> {
        self.groups.iter()
    }
}

/// Group rows by a key selector.
///
/// Key equality is value equality of the selector output; grouping "by
/// entity" therefore passes the entity's typed id, never the entity
/// itself.
#[must_use]
pub fn group_by<T, K, F>(rows: impl IntoIterator<Item = T>, mut key: F) -> Grouped<K, T>
where
    K: Clone + Ord,
    F: FnMut(&T) -> K,
{
    let mut slots: BTreeMap<K, usize> = BTreeMap::new();
    let mut groups: Vec<Group<K, T>> = Vec::new();

    for row in rows {
        let k = key(&row);
        match slots.entry(k.clone()) {
            Entry::Occupied(slot) => groups[*slot.get()].members.push(row),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push(Group {
                    key: k,
                    members: vec![row],
                });
            }
        }
    }

    Grouped { groups }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_appear_in_first_seen_key_order() {
        let grouped = group_by([("b", 1), ("a", 2), ("b", 3), ("c", 4)], |row| row.0);

        let keys: Vec<&str> = grouped.iter().map(|g| g.key).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn members_keep_input_order_and_are_never_empty() {
        let grouped = group_by([("b", 1), ("a", 2), ("b", 3)], |row| row.0);

        for group in &grouped {
            assert!(!group.members.is_empty(), "groups must be non-empty");
        }
        assert_eq!(grouped[0].members, [("b", 1), ("b", 3)]);
        assert_eq!(grouped[1].members, [("a", 2)]);
    }

    #[test]
    fn every_input_row_lands_in_exactly_one_group() {
        let rows = [1_u32, 2, 3, 4, 5, 6];
        let grouped = group_by(rows, |n| n % 3);

        let total: usize = grouped.iter().map(|g| g.members.len()).sum();
        assert_eq!(total, rows.len());
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let grouped = group_by(Vec::<u32>::new(), |n| *n);
        assert!(grouped.is_empty());
    }
}
