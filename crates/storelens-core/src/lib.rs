//! Core runtime for StoreLens: typed identities, monetary and time scalars,
//! the entity model, the entity store snapshot, relational operator
//! primitives, and the fixed report definitions.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod report;
pub mod traits;
pub mod types;

///
/// CONSTANTS
///

/// Number of decimal places carried by currency amounts.
///
/// All monetary arithmetic is exact to this precision; the renderer pads
/// to it when formatting.
pub const CURRENCY_SCALE: u32 = 2;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, operators, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::EntityStore,
        model::{
            Carrier, Category, Customer, DiscountCode, Order, OrderItem, OrderStatus, Product,
            ProductCategory, Stock, Store,
        },
        traits::{EntityIdentity, EntityKind},
        types::{Duration, Id, Money, Timestamp},
    };
}
