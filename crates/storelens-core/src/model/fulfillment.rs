use crate::{
    traits::{EntityIdentity, EntityKind},
    types::{Id, Money, Timestamp},
};
use serde::{Deserialize, Serialize};

// Carrier and DiscountCode are referenced by orders but not exercised by
// any aggregation; they exist for schema completeness.

///
/// Carrier
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Carrier {
    pub id: Id<Carrier>,
    pub name: String,
    pub contact_url: Option<String>,
    pub contact_phone: Option<String>,
}

impl EntityKind for Carrier {
    const NAME: &'static str = "carrier";
}

impl EntityIdentity for Carrier {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

///
/// DiscountCode
///
/// `amount` is a percentage when `is_percentage` is set, an absolute
/// amount otherwise.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DiscountCode {
    pub id: Id<DiscountCode>,
    pub code: String,
    pub description: Option<String>,
    pub amount: Money,
    pub is_percentage: bool,
    pub expires_at: Option<Timestamp>,
    pub max_usage: Option<u32>,
    pub times_used: u32,
}

impl EntityKind for DiscountCode {
    const NAME: &'static str = "discount_code";
}

impl EntityIdentity for DiscountCode {
    fn id(&self) -> Id<Self> {
        self.id
    }
}
