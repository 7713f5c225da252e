use crate::{
    model::{Carrier, Customer, DiscountCode, Product},
    traits::{EntityIdentity, EntityKind},
    types::{Id, Money, Timestamp},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Order
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Order {
    pub id: Id<Order>,
    pub customer: Id<Customer>,
    pub status: OrderStatus,
    pub placed_at: Timestamp,
    pub discount_code: Option<Id<DiscountCode>>,
    pub carrier: Option<Id<Carrier>>,
}

impl EntityKind for Order {
    const NAME: &'static str = "order";
}

impl EntityIdentity for Order {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

///
/// OrderItem
///
/// One line of an order. `unit_price` is a snapshot taken at order time
/// and is independent of the product's current catalog price;
/// `discount` is an absolute amount subtracted from the line.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: Id<OrderItem>,
    pub order: Id<Order>,
    pub product: Id<Product>,
    pub quantity: u32,
    pub unit_price: Money,
    pub discount: Money,
}

impl OrderItem {
    /// Line total: `unit_price × quantity − discount`. Negative when the
    /// discount exceeds the line subtotal; that is valid input, not an
    /// error.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity) - self.discount
    }

    /// Returns true when this line carries a discount.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount.is_positive()
    }
}

impl EntityKind for OrderItem {
    const NAME: &'static str = "order_item";
}

impl EntityIdentity for OrderItem {
    fn id(&self) -> Id<Self> {
        self.id
    }
}

///
/// OrderStatus
///
/// Open tag set with well-known values. Comparison is case-sensitive on
/// the raw tag; unknown tags are carried through untouched.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[repr(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    // ---- Well-known tags ----

    #[must_use]
    pub fn pending() -> Self {
        Self::new("Pending")
    }

    #[must_use]
    pub fn shipped() -> Self {
        Self::new("Shipped")
    }

    #[must_use]
    pub fn cancelled() -> Self {
        Self::new("Cancelled")
    }

    #[must_use]
    pub fn completed() -> Self {
        Self::new("Completed")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for OrderStatus {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OrderStatus {
    fn eq(&self, other: &&str) -> bool {
        self.0 == **other
    }
}

///
/// TESTS
///
