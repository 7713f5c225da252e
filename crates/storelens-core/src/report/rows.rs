//! Result row records, one fixed shape per report. Field order is the
//! rendering order expected by the presentation collaborator.

use crate::{
    model::{Order, OrderStatus},
    types::{Id, Money, Timestamp},
};
use serde::{Deserialize, Serialize};

///
/// CustomerRow
/// Row of `all_customers`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CustomerRow {
    pub full_name: String,
    pub email: String,
}

///
/// OrderItemCountRow
/// Row of `orders_with_item_count`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrderItemCountRow {
    pub customer_name: String,
    pub order: Id<Order>,
    pub status: OrderStatus,
    pub item_count: u64,
}

///
/// ProductPriceRow
/// Row of `products_by_price`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProductPriceRow {
    pub name: String,
    pub price: Money,
}

///
/// PendingOrderRow
/// Row of `pending_orders`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PendingOrderRow {
    pub customer_name: String,
    pub order: Id<Order>,
    pub placed_at: Timestamp,
    pub total: Money,
}

///
/// CustomerOrderCountRow
/// Row of `order_count_per_customer`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CustomerOrderCountRow {
    pub full_name: String,
    pub order_count: u64,
}

///
/// CustomerValueRow
/// Row of `top_customers_by_value`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CustomerValueRow {
    pub full_name: String,
    pub total_value: Money,
}

///
/// RecentOrderRow
/// Row of `recent_orders`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RecentOrderRow {
    pub order: Id<Order>,
    pub placed_at: Timestamp,
    pub customer_name: String,
}

///
/// ProductSalesRow
/// Row of `total_sold_per_product`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProductSalesRow {
    pub name: String,
    pub total_sold: u64,
}

///
/// DiscountedOrderRow
/// Row of `discounted_orders`. `discounted_products` lists only the
/// discounted lines of the order, in line order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DiscountedOrderRow {
    pub order: Id<Order>,
    pub customer_name: String,
    pub discounted_products: Vec<String>,
}

///
/// CategoryStockRow
/// Row of `category_stock_ranking`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CategoryStockRow {
    pub product_name: String,
    pub store_name: String,
    pub max_in_stock: u32,
}
