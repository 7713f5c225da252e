use crate::{
    traits::{EntityIdentity, EntityKind},
    types::{Id, Money},
};
use serde::{Deserialize, Serialize};

///
/// Product
///
/// `price` is the current catalog price; order lines carry their own
/// unit-price snapshot.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Product {
    pub id: Id<Product>,
    pub name: String,
    pub price: Money,
}

impl EntityKind for Product {
    const NAME: &'static str = "product";
}

impl EntityIdentity for Product {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

///
/// Category
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Category {
    pub id: Id<Category>,
    pub name: String,
}

impl EntityKind for Category {
    const NAME: &'static str = "category";
}

impl EntityIdentity for Category {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

///
/// ProductCategory
///
/// Association row realizing the many-to-many product/category
/// relationship. Carries foreign keys only; it has no identity of its
/// own.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProductCategory {
    pub product: Id<Product>,
    pub category: Id<Category>,
}
