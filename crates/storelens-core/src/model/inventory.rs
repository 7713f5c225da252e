use crate::{
    model::Product,
    traits::{EntityIdentity, EntityKind},
    types::Id,
};
use serde::{Deserialize, Serialize};

///
/// Store
///
/// A physical outlet holding stock.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Store {
    pub id: Id<Store>,
    pub name: String,
}

impl EntityKind for Store {
    const NAME: &'static str = "store";
}

impl EntityIdentity for Store {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

///
/// Stock
///
/// Association row: quantity of one product held at one store. Carries
/// foreign keys only.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Stock {
    pub product: Id<Product>,
    pub store: Id<Store>,
    pub quantity: u32,
}
