use crate::error::AggregateError;
use std::iter::Sum;

/// Sum a measure over rows; an empty input yields the additive identity.
#[must_use]
pub fn sum<T, M, F>(rows: impl IntoIterator<Item = T>, selector: F) -> M
where
    M: Sum<M>,
    F: FnMut(T) -> M,
{
    rows.into_iter().map(selector).sum()
}

/// Count rows, saturating at the counter domain.
#[must_use]
pub fn count<T>(rows: impl IntoIterator<Item = T>) -> u64 {
    u64::try_from(rows.into_iter().count()).unwrap_or(u64::MAX)
}

/// Maximum of a measure over rows.
///
/// An empty window is an error: callers must guarantee non-empty input,
/// which holds for groups derived from `group_by`.
pub fn max<T, M, F>(rows: impl IntoIterator<Item = T>, selector: F) -> Result<M, AggregateError>
where
    M: Ord,
    F: FnMut(T) -> M,
{
    rows.into_iter()
        .map(selector)
        .max()
        .ok_or(AggregateError::EmptyAggregation)
}

///
/// TESTS
///
