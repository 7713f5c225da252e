use crate::{
    db::{
        EntityStore,
        ops::{count, filter, group_by, join, max, sort_desc, sum, top_n},
    },
    error::ReportError,
    model::{Order, OrderItem},
    obs::sink::Span,
    report::rows::{
        CategoryStockRow, CustomerOrderCountRow, CustomerRow, CustomerValueRow,
        DiscountedOrderRow, OrderItemCountRow, PendingOrderRow, ProductPriceRow, ProductSalesRow,
        RecentOrderRow,
    },
    types::{Duration, Id, Money, Timestamp},
};
use std::collections::BTreeMap;

/// Number of ranked customers returned by [`top_customers_by_value`].
pub const TOP_CUSTOMER_COUNT: usize = 3;

/// Inclusive recency window applied by [`recent_orders`].
pub const RECENT_ORDER_WINDOW: Duration = Duration::from_days(30);

/// Per-order totals: Σ line totals over each order's items. Orders with
/// no items are absent; callers default to zero.
fn order_totals(store: &EntityStore) -> BTreeMap<Id<Order>, Money> {
    let mut totals = BTreeMap::new();
    for group in group_by(store.order_items().iter(), |item| item.order).iter() {
        let total = sum(group.members.iter().copied(), OrderItem::line_total);
        totals.insert(group.key, total);
    }

    totals
}

/// Every customer as (full name, email).
///
/// Rows follow store iteration order, which is unspecified.
pub fn all_customers(store: &EntityStore) -> Result<Vec<CustomerRow>, ReportError> {
    let mut span = Span::new("all_customers");

    let rows: Vec<CustomerRow> = store
        .customers()
        .iter()
        .map(|customer| CustomerRow {
            full_name: customer.full_name(),
            email: customer.email.clone(),
        })
        .collect();

    span.set_rows(rows.len());
    Ok(rows)
}

/// Every order as (customer name, order id, status, item count).
///
/// The item count is the sum of line quantities, zero for an order with
/// no items.
pub fn orders_with_item_count(store: &EntityStore) -> Result<Vec<OrderItemCountRow>, ReportError> {
    let mut span = Span::new("orders_with_item_count");

    let mut counts: BTreeMap<Id<Order>, u64> = BTreeMap::new();
    for group in group_by(store.order_items().iter(), |item| item.order).iter() {
        let quantity_total = sum(group.members.iter().copied(), |item| {
            u64::from(item.quantity)
        });
        counts.insert(group.key, quantity_total);
    }

    let mut rows = Vec::with_capacity(store.orders().len());
    for order in store.orders() {
        let customer = store.customers().expect(order.customer)?;
        rows.push(OrderItemCountRow {
            customer_name: customer.full_name(),
            order: order.id,
            status: order.status.clone(),
            item_count: counts.get(&order.id).copied().unwrap_or(0),
        });
    }

    span.set_rows(rows.len());
    Ok(rows)
}

/// Every product as (name, price), stable-sorted descending by price.
pub fn products_by_price(store: &EntityStore) -> Result<Vec<ProductPriceRow>, ReportError> {
    let mut span = Span::new("products_by_price");

    let rows: Vec<ProductPriceRow> = store
        .products()
        .iter()
        .map(|product| ProductPriceRow {
            name: product.name.clone(),
            price: product.price,
        })
        .collect();
    let rows = sort_desc(rows, |row| row.price);

    span.set_rows(rows.len());
    Ok(rows)
}

/// Orders with status "Pending" as (customer name, order id, placed-at,
/// total), where total is Σ line totals.
pub fn pending_orders(store: &EntityStore) -> Result<Vec<PendingOrderRow>, ReportError> {
    let mut span = Span::new("pending_orders");

    let totals = order_totals(store);

    let mut rows = Vec::new();
    for order in filter(store.orders().iter(), |order| order.status == "Pending") {
        let customer = store.customers().expect(order.customer)?;
        rows.push(PendingOrderRow {
            customer_name: customer.full_name(),
            order: order.id,
            placed_at: order.placed_at,
            total: totals.get(&order.id).copied().unwrap_or(Money::ZERO),
        });
    }

    span.set_rows(rows.len());
    Ok(rows)
}

/// Every customer as (full name, order count).
///
/// Left-counting: customers with zero orders appear with count 0, unlike
/// [`top_customers_by_value`].
pub fn order_count_per_customer(
    store: &EntityStore,
) -> Result<Vec<CustomerOrderCountRow>, ReportError> {
    let mut span = Span::new("order_count_per_customer");

    let mut counts = BTreeMap::new();
    for group in group_by(store.orders().iter(), |order| order.customer).iter() {
        counts.insert(group.key, count(group.members.iter()));
    }

    let mut rows = Vec::with_capacity(store.customers().len());
    for customer in store.customers() {
        rows.push(CustomerOrderCountRow {
            full_name: customer.full_name(),
            order_count: counts.get(&customer.id).copied().unwrap_or(0),
        });
    }

    span.set_rows(rows.len());
    Ok(rows)
}

/// The top three customers by total order value.
///
/// Groups orders by customer, totals each group, sorts descending, takes
/// the first [`TOP_CUSTOMER_COUNT`]. Customers with no orders produce no
/// group and therefore never rank, even below a zero total; this
/// asymmetry with [`order_count_per_customer`] is intentional.
pub fn top_customers_by_value(store: &EntityStore) -> Result<Vec<CustomerValueRow>, ReportError> {
    let mut span = Span::new("top_customers_by_value");

    let totals = order_totals(store);

    let mut rows = Vec::new();
    for group in group_by(store.orders().iter(), |order| order.customer).iter() {
        let customer = store.customers().expect(group.key)?;
        let total_value = sum(group.members.iter().copied(), |order| {
            totals.get(&order.id).copied().unwrap_or(Money::ZERO)
        });
        rows.push(CustomerValueRow {
            full_name: customer.full_name(),
            total_value,
        });
    }

    let rows = top_n(sort_desc(rows, |row| row.total_value), TOP_CUSTOMER_COUNT);

    span.set_rows(rows.len());
    Ok(rows)
}

/// Orders placed within the last [`RECENT_ORDER_WINDOW`] of `now`
/// (inclusive lower bound) as (order id, placed-at, customer name).
///
/// `now` is an externally supplied reference instant, never an implicit
/// clock.
pub fn recent_orders(
    store: &EntityStore,
    now: Timestamp,
) -> Result<Vec<RecentOrderRow>, ReportError> {
    let mut span = Span::new("recent_orders");

    let cutoff = now.saturating_sub(RECENT_ORDER_WINDOW);

    let mut rows = Vec::new();
    for order in filter(store.orders().iter(), |order| order.placed_at >= cutoff) {
        let customer = store.customers().expect(order.customer)?;
        rows.push(RecentOrderRow {
            order: order.id,
            placed_at: order.placed_at,
            customer_name: customer.full_name(),
        });
    }

    span.set_rows(rows.len());
    Ok(rows)
}

/// Total quantity sold per product, sorted descending by quantity.
pub fn total_sold_per_product(store: &EntityStore) -> Result<Vec<ProductSalesRow>, ReportError> {
    let mut span = Span::new("total_sold_per_product");

    let mut rows = Vec::new();
    for group in group_by(store.order_items().iter(), |item| item.product).iter() {
        let product = store.products().expect(group.key)?;
        let total_sold = sum(group.members.iter().copied(), |item| {
            u64::from(item.quantity)
        });
        rows.push(ProductSalesRow {
            name: product.name.clone(),
            total_sold,
        });
    }

    let rows = sort_desc(rows, |row| row.total_sold);

    span.set_rows(rows.len());
    Ok(rows)
}

/// Orders carrying at least one discounted line as (order id, customer
/// name, discounted product names).
///
/// Only the discounted lines are listed, in line order; undiscounted
/// lines of the same order do not appear.
pub fn discounted_orders(store: &EntityStore) -> Result<Vec<DiscountedOrderRow>, ReportError> {
    let mut span = Span::new("discounted_orders");

    let mut discounted: BTreeMap<Id<Order>, Vec<String>> = BTreeMap::new();
    for item in filter(store.order_items().iter(), |item| item.is_discounted()) {
        let product = store.products().expect(item.product)?;
        discounted
            .entry(item.order)
            .or_default()
            .push(product.name.clone());
    }

    let mut rows = Vec::new();
    for order in store.orders() {
        if let Some(products) = discounted.remove(&order.id) {
            let customer = store.customers().expect(order.customer)?;
            rows.push(DiscountedOrderRow {
                order: order.id,
                customer_name: customer.full_name(),
                discounted_products: products,
            });
        }
    }

    span.set_rows(rows.len());
    Ok(rows)
}

/// Maximum stock per (product, store) pair for ordered products of one
/// category, sorted descending by that maximum. The canonical invocation
/// passes "Electronics".
///
/// The join chain runs in fixed order — product, category link,
/// category, order item, order, stock, store — and each inner join drops
/// non-matches, so products outside the category, never ordered, or
/// never stocked do not appear. Grouping and aggregation happen only
/// after every join is applied.
pub fn category_stock_ranking(
    store: &EntityStore,
    category_name: &str,
) -> Result<Vec<CategoryStockRow>, ReportError> {
    let mut span = Span::new("category_stock_ranking");

    let linked = join(
        store.products().iter(),
        store.product_categories().iter(),
        |product| product.id,
        |link| link.product,
    );
    let categorized: Vec<_> = join(
        linked,
        store.categories().iter(),
        |(_, link)| link.category,
        |category| category.id,
    )
    .into_iter()
    .map(|((product, _), category)| (product, category))
    .collect();
    let in_category: Vec<_> = filter(categorized, |(_, category)| category.name == category_name)
        .map(|(product, _)| product)
        .collect();

    let ordered = join(
        in_category,
        store.order_items().iter(),
        |product| product.id,
        |item| item.product,
    );
    let with_orders: Vec<_> = join(
        ordered,
        store.orders().iter(),
        |(_, item)| item.order,
        |order| order.id,
    )
    .into_iter()
    .map(|((product, _), order)| (product, order))
    .collect();
    let stocked = join(
        with_orders,
        store.stocks().iter(),
        |(product, _)| product.id,
        |stock| stock.product,
    );

    let mut keyed = Vec::with_capacity(stocked.len());
    for ((product, _), stock) in stocked {
        let outlet = store.stores().expect(stock.store)?;
        keyed.push(((product.name.clone(), outlet.name.clone()), stock.quantity));
    }

    let mut rows = Vec::new();
    for group in group_by(keyed, |(key, _)| key.clone()).iter() {
        let max_in_stock = max(group.members.iter(), |(_, quantity)| *quantity)?;
        let (product_name, store_name) = group.key.clone();
        rows.push(CategoryStockRow {
            product_name,
            store_name,
            max_in_stock,
        });
    }

    let rows = sort_desc(rows, |row| row.max_in_stock);

    span.set_rows(rows.len());
    Ok(rows)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, OrderStatus};

    fn seed_customer(store: &mut EntityStore, id: u64, first: &str) {
        store
            .insert_customer(Customer {
                id: Id::new(id),
                first_name: first.to_string(),
                last_name: "Tester".to_string(),
                email: format!("{}@example.test", first.to_lowercase()),
            })
            .expect("insert customer");
    }

    fn seed_order(store: &mut EntityStore, id: u64, customer: u64) {
        store
            .insert_order(Order {
                id: Id::new(id),
                customer: Id::new(customer),
                status: OrderStatus::completed(),
                placed_at: Timestamp::EPOCH,
                discount_code: None,
                carrier: None,
            })
            .expect("insert order");
    }

    fn seed_item(store: &mut EntityStore, id: u64, order: u64, cents: i64) {
        store
            .insert_order_item(OrderItem {
                id: Id::new(id),
                order: Id::new(order),
                product: Id::new(1),
                quantity: 1,
                unit_price: Money::from_cents(cents),
                discount: Money::ZERO,
            })
            .expect("insert item");
    }

    #[test]
    fn zero_order_customers_count_but_never_rank() {
        let mut store = EntityStore::new();
        seed_customer(&mut store, 1, "Alice");
        seed_customer(&mut store, 2, "Bob");
        seed_order(&mut store, 1, 1);
        seed_item(&mut store, 1, 1, 1000);

        let counts = order_count_per_customer(&store).expect("report 5");
        assert_eq!(counts.len(), 2, "left-counting keeps zero-order customers");
        assert_eq!(counts[1].full_name, "Bob Tester");
        assert_eq!(counts[1].order_count, 0);

        let ranked = top_customers_by_value(&store).expect("report 6");
        assert_eq!(
            ranked.len(),
            1,
            "ranking groups orders, so zero-order customers are absent",
        );
        assert_eq!(ranked[0].full_name, "Alice Tester");
    }

    #[test]
    fn ranking_under_fills_below_the_top_count() {
        let mut store = EntityStore::new();
        seed_customer(&mut store, 1, "Alice");
        seed_customer(&mut store, 2, "Bob");
        seed_order(&mut store, 1, 1);
        seed_order(&mut store, 2, 2);
        seed_item(&mut store, 1, 1, 5000);
        seed_item(&mut store, 2, 2, 20000);

        let ranked = top_customers_by_value(&store).expect("report 6");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].full_name, "Bob Tester");
        assert_eq!(ranked[0].total_value, Money::from_cents(20000));
        assert_eq!(ranked[1].full_name, "Alice Tester");
    }

    #[test]
    fn dangling_customer_reference_fails_the_whole_report() {
        let mut store = EntityStore::new();
        seed_customer(&mut store, 1, "Alice");
        seed_order(&mut store, 1, 1);
        seed_order(&mut store, 2, 9);

        let err = orders_with_item_count(&store).expect_err("dangling key must fail");
        assert_eq!(
            err,
            ReportError::Store(crate::error::StoreError::MissingReference {
                target: "customer",
                key: 9,
            })
        );
    }

    #[test]
    fn itemless_orders_report_a_zero_count_and_total() {
        let mut store = EntityStore::new();
        seed_customer(&mut store, 1, "Alice");
        seed_order(&mut store, 1, 1);

        let rows = orders_with_item_count(&store).expect("report 2");
        assert_eq!(rows[0].item_count, 0);
    }
}
