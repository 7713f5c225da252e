//! The entity model: one read-only snapshot row type per table of the
//! web-store schema. Relationships are explicit foreign-key fields
//! (`Id<T>`), resolved through the entity store, never embedded
//! references.

mod customer;
mod fulfillment;
mod inventory;
mod order;
mod product;

pub use customer::Customer;
pub use fulfillment::{Carrier, DiscountCode};
pub use inventory::{Stock, Store};
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{Category, Product, ProductCategory};
