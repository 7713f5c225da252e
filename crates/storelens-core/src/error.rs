use std::fmt;
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Dataset integrity failures raised by the entity store: at load time
/// (duplicate keys, whole-dataset validation) and during report
/// evaluation when a foreign key navigates to a missing row.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("duplicate {entity} key: {key}")]
    DuplicateKey { entity: &'static str, key: u64 },

    #[error("reference to missing {target}: {key}")]
    MissingReference { target: &'static str, key: u64 },
}

///
/// AggregateError
///
/// Extrema over an empty window. Groups produced by `group_by` are never
/// empty, so this surfacing indicates an upstream invariant violation.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AggregateError {
    #[error("max aggregation over an empty window")]
    EmptyAggregation,
}

///
/// ReportError
///
/// Per-report failure type. Reports never catch or retry; the first
/// violation fails the whole report and no partial rows are emitted.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReportError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReportError {
    /// Stable classification for callers that dispatch on class rather
    /// than variant.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Aggregate(AggregateError::EmptyAggregation) => ErrorClass::InvariantViolation,
            Self::Store(StoreError::DuplicateKey { .. }) => ErrorClass::Conflict,
            Self::Store(StoreError::MissingReference { .. }) => ErrorClass::NotFound,
        }
    }
}

///
/// ErrorClass
/// Stable classification taxonomy exposed alongside the concrete variants.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Conflict,
    InvariantViolation,
    NotFound,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Conflict => "conflict",
            Self::InvariantViolation => "invariant_violation",
            Self::NotFound => "not_found",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_classifies_each_failure_mode() {
        let missing = ReportError::from(StoreError::MissingReference {
            target: "customer",
            key: 9,
        });
        assert_eq!(missing.class(), ErrorClass::NotFound);

        let duplicate = ReportError::from(StoreError::DuplicateKey {
            entity: "order",
            key: 1,
        });
        assert_eq!(duplicate.class(), ErrorClass::Conflict);

        let empty = ReportError::from(AggregateError::EmptyAggregation);
        assert_eq!(empty.class(), ErrorClass::InvariantViolation);
    }

    #[test]
    fn messages_name_the_entity_and_key() {
        let err = StoreError::MissingReference {
            target: "product",
            key: 41,
        };
        assert_eq!(err.to_string(), "reference to missing product: 41");

        let err = StoreError::DuplicateKey {
            entity: "customer",
            key: 2,
        };
        assert_eq!(err.to_string(), "duplicate customer key: 2");
    }

    #[test]
    fn class_labels_are_stable() {
        assert_eq!(ErrorClass::Conflict.to_string(), "conflict");
        assert_eq!(
            ErrorClass::InvariantViolation.to_string(),
            "invariant_violation"
        );
        assert_eq!(ErrorClass::NotFound.to_string(), "not_found");
    }
}
