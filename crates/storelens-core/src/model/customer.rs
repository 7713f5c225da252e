use crate::{
    traits::{EntityIdentity, EntityKind},
    types::Id,
};
use serde::{Deserialize, Serialize};

///
/// Customer
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Customer {
    pub id: Id<Customer>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    /// Display name, first then last.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl EntityKind for Customer {
    const NAME: &'static str = "customer";
}

impl EntityIdentity for Customer {
    fn id(&self) -> Id<Self> {
        self.id
    }
}
