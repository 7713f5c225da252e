//! Relational operator primitives: filter, inner equi-join, group-by,
//! the aggregate family, stable descending sort, and top-N.
//!
//! All operators are pure functions over finite input. `filter` and the
//! streaming aggregates consume lazily; `join`, `group_by`, and
//! `sort_desc` materialize. None of them touch the entity store
//! directly; reports wire stores and operators together.

mod aggregate;
mod group;
mod join;
mod sort;

pub use aggregate::{count, max, sum};
pub use group::{Group, Grouped, group_by};
pub use join::join;
pub use sort::{sort_desc, top_n};

/// Lazy, restartable filter: re-evaluates the predicate per element and
/// caches nothing.
pub fn filter<T, P>(rows: impl IntoIterator<Item = T>, predicate: P) -> impl Iterator<Item = T>
where
    P: FnMut(&T) -> bool,
{
    rows.into_iter().filter(predicate)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_matching_rows_in_order() {
        let kept: Vec<u32> = filter([1_u32, 2, 3, 4, 5], |n| n % 2 == 1).collect();
        assert_eq!(kept, [1, 3, 5]);
    }

    #[test]
    fn filter_over_empty_input_is_empty() {
        let kept: Vec<u32> = filter(Vec::new(), |_: &u32| true).collect();
        assert!(kept.is_empty());
    }
}
