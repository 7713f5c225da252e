//! The fixed report definitions: ten read-only compositions of the
//! relational operators, each producing one ordered sequence of typed
//! result rows.
//!
//! Reports are independent and pure; they share nothing but the entity
//! store snapshot and may run in parallel.

mod def;
pub mod rows;

pub use def::{
    RECENT_ORDER_WINDOW, TOP_CUSTOMER_COUNT, all_customers, category_stock_ranking,
    discounted_orders, order_count_per_customer, orders_with_item_count, pending_orders,
    products_by_price, recent_orders, top_customers_by_value, total_sold_per_product,
};
