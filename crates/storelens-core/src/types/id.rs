use crate::traits::EntityKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// Id
///
/// Typed primary-key wrapper for entity identities.
/// Carries entity context without changing the underlying key type.
/// Serializes identically to the raw key.
///

#[repr(transparent)]
pub struct Id<E: EntityKind> {
    key: u64,
    _marker: PhantomData<fn() -> E>,
}

impl<E: EntityKind> Id<E> {
    /// Construct a typed identity from the raw key value.
    #[must_use]
    pub const fn new(key: u64) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    /// Returns the underlying key.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.key
    }
}

// Manual impls: deriving would place unnecessary bounds on E.

impl<E: EntityKind> Clone for Id<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: EntityKind> Copy for Id<E> {}

impl<E: EntityKind> fmt::Debug for Id<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", E::NAME, self.key)
    }
}

impl<E: EntityKind> fmt::Display for Id<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl<E: EntityKind> PartialEq for Id<E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<E: EntityKind> Eq for Id<E> {}

impl<E: EntityKind> PartialOrd for Id<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: EntityKind> Ord for Id<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<E: EntityKind> Hash for Id<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<E: EntityKind> Serialize for Id<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.key.serialize(serializer)
    }
}

impl<'de, E: EntityKind> Deserialize<'de> for Id<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::new)
    }
}

///
/// TESTS
///
