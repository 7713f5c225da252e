//! Text rendering for report rows.
//!
//! The renderer only formats: every field was computed by a report
//! definition before it arrives here. Field order within a line is the
//! row's declared field order.

use crate::core::report::rows::{
    CategoryStockRow, CustomerOrderCountRow, CustomerRow, CustomerValueRow, DiscountedOrderRow,
    OrderItemCountRow, PendingOrderRow, ProductPriceRow, ProductSalesRow, RecentOrderRow,
};

///
/// RenderRow
///
/// Maps one typed result row to one line of text (a block for rows that
/// carry a nested list).
///

pub trait RenderRow {
    fn render(&self) -> String;
}

/// Render a whole result sequence, one row per line.
#[must_use]
pub fn render_rows<R: RenderRow>(rows: &[R]) -> String {
    rows.iter()
        .map(RenderRow::render)
        .collect::<Vec<_>>()
        .join("\n")
}

impl RenderRow for CustomerRow {
    fn render(&self) -> String {
        format!("{} - {}", self.full_name, self.email)
    }
}

impl RenderRow for OrderItemCountRow {
    fn render(&self) -> String {
        format!(
            "Customer: {}, Order ID: {}, Status: {}, Item Count: {}",
            self.customer_name, self.order, self.status, self.item_count
        )
    }
}

impl RenderRow for ProductPriceRow {
    fn render(&self) -> String {
        format!("{} - {}", self.name, self.price.currency_string())
    }
}

impl RenderRow for PendingOrderRow {
    fn render(&self) -> String {
        format!(
            "Customer: {}, Order ID: {}, Order Date: {}, Total Price: {}",
            self.customer_name,
            self.order,
            self.placed_at.to_rfc3339(),
            self.total.currency_string()
        )
    }
}

impl RenderRow for CustomerOrderCountRow {
    fn render(&self) -> String {
        format!("Customer: {}, Orders: {}", self.full_name, self.order_count)
    }
}

impl RenderRow for CustomerValueRow {
    fn render(&self) -> String {
        format!(
            "Customer: {}, Total Order Value: {}",
            self.full_name,
            self.total_value.currency_string()
        )
    }
}

impl RenderRow for RecentOrderRow {
    fn render(&self) -> String {
        format!(
            "Order ID: {}, Date: {}, Customer: {}",
            self.order,
            self.placed_at.to_rfc3339(),
            self.customer_name
        )
    }
}

impl RenderRow for ProductSalesRow {
    fn render(&self) -> String {
        format!("Product: {}, Total Sold: {}", self.name, self.total_sold)
    }
}

impl RenderRow for DiscountedOrderRow {
    fn render(&self) -> String {
        let mut out = format!("Order ID: {}, Customer: {}", self.order, self.customer_name);
        for product in &self.discounted_products {
            out.push_str(&format!("\n  Discounted Product: {product}"));
        }

        out
    }
}

impl RenderRow for CategoryStockRow {
    fn render(&self) -> String {
        format!(
            "Product: {}, Store: {}, Max Stock: {}",
            self.product_name, self.store_name, self.max_in_stock
        )
    }
}

///
/// TESTS
///
