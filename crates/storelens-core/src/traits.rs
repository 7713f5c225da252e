//! Entity vocabulary traits shared by the model, the store, and the
//! report definitions.

use crate::types::Id;

///
/// EntityKind
///
/// Names a keyed entity type. The name is stable and used in diagnostics
/// and error messages, never in arithmetic or grouping.
///

pub trait EntityKind: 'static {
    /// Stable lowercase entity name.
    const NAME: &'static str;
}

///
/// EntityIdentity
///
/// A keyed entity that can report its own primary key. Association rows
/// (product/category links, stock lines) carry foreign keys only and do
/// not implement this.
///

pub trait EntityIdentity: EntityKind + Sized {
    /// Primary key of this row.
    fn id(&self) -> Id<Self>;
}
