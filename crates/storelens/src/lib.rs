//! ## Crate layout
//! - `core`: runtime data model, entity store, relational operators, and
//!   the fixed report definitions.
//! - `render`: thin text renderer mapping typed result rows to lines.
//!
//! The `prelude` module mirrors the runtime surface used by presentation
//! and loading collaborators.

pub use storelens_core as core;

pub mod render;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::{error::ReportError, report};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        db::EntityStore,
        error::{ErrorClass, ReportError},
        model::{
            Carrier, Category, Customer, DiscountCode, Order, OrderItem, OrderStatus, Product,
            ProductCategory, Stock, Store,
        },
        report,
        report::rows::{
            CategoryStockRow, CustomerOrderCountRow, CustomerRow, CustomerValueRow,
            DiscountedOrderRow, OrderItemCountRow, PendingOrderRow, ProductPriceRow,
            ProductSalesRow, RecentOrderRow,
        },
        traits::{EntityIdentity as _, EntityKind as _},
        types::{Duration, Id, Money, Timestamp},
    };
    pub use crate::render::RenderRow as _;
}
