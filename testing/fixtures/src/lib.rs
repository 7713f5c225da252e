//! Shared seed dataset for StoreLens testing surfaces.
//!
//! One small web-store snapshot exercising every report edge: a customer
//! with no orders, a pending order with a known total, an order dated
//! exactly on the 30-day recency boundary, an Electronics product
//! stocked in two stores, a product outside Electronics, and orders with
//! mixed discounted and undiscounted lines.

use storelens_core::{
    db::EntityStore,
    model::{
        Carrier, Category, Customer, DiscountCode, Order, OrderItem, OrderStatus, Product,
        ProductCategory, Stock, Store,
    },
    types::{Duration, Id, Money, Timestamp},
};

/// Reference instant for time-windowed reports: 2025-06-01T12:00:00Z.
#[must_use]
pub const fn reference_now() -> Timestamp {
    Timestamp::from_seconds(1_748_779_200)
}

/// Seed the sample snapshot. The dataset is valid by construction;
/// `validate()` is run before returning.
#[must_use]
pub fn sample_store() -> EntityStore {
    let now = reference_now();
    let mut store = EntityStore::new();

    seed_customers(&mut store);
    seed_catalog(&mut store);
    seed_inventory(&mut store);
    seed_fulfillment(&mut store);
    seed_orders(&mut store, now);

    store.validate().expect("fixture dataset is well-formed");
    store
}

fn seed_customers(store: &mut EntityStore) {
    let customers = [
        (1, "Alice", "Johnson", "alice.johnson@example.test"),
        (2, "Bob", "Smith", "bob.smith@example.test"),
        // Carol places no orders: report 5 counts her at zero, report 6
        // never ranks her.
        (3, "Carol", "Davis", "carol.davis@example.test"),
        (4, "Dan", "Brown", "dan.brown@example.test"),
    ];

    for (id, first, last, email) in customers {
        store
            .insert_customer(Customer {
                id: Id::new(id),
                first_name: first.to_string(),
                last_name: last.to_string(),
                email: email.to_string(),
            })
            .expect("seed customer");
    }
}

fn seed_catalog(store: &mut EntityStore) {
    let products = [
        (1, "Noise-Cancelling Headphones", 12000),
        (2, "Mechanical Keyboard", 8000),
        (3, "Espresso Beans", 1000),
        // Desk Lamp has no category row and no stock: report 10's inner
        // joins drop it even when ordered.
        (4, "Desk Lamp", 3500),
    ];

    for (id, name, cents) in products {
        store
            .insert_product(Product {
                id: Id::new(id),
                name: name.to_string(),
                price: Money::from_cents(cents),
            })
            .expect("seed product");
    }

    for (id, name) in [(1, "Electronics"), (2, "Groceries")] {
        store
            .insert_category(Category {
                id: Id::new(id),
                name: name.to_string(),
            })
            .expect("seed category");
    }

    for (product, category) in [(1, 1), (2, 1), (3, 2)] {
        store.insert_product_category(ProductCategory {
            product: Id::new(product),
            category: Id::new(category),
        });
    }
}

fn seed_inventory(store: &mut EntityStore) {
    for (id, name) in [(1, "Harbour Street"), (2, "Airport Mall")] {
        store
            .insert_store(Store {
                id: Id::new(id),
                name: name.to_string(),
            })
            .expect("seed store");
    }

    // Headphones sit in both stores with different quantities so the
    // per-store maximum is observable.
    let stocks = [(1, 1, 5), (1, 2, 12), (2, 1, 7), (3, 1, 40)];
    for (product, outlet, quantity) in stocks {
        store.insert_stock(Stock {
            product: Id::new(product),
            store: Id::new(outlet),
            quantity,
        });
    }
}

fn seed_fulfillment(store: &mut EntityStore) {
    store
        .insert_carrier(Carrier {
            id: Id::new(1),
            name: "Northwind Express".to_string(),
            contact_url: Some("https://northwind.example.test".to_string()),
            contact_phone: Some("+358 40 123 4567".to_string()),
        })
        .expect("seed carrier");

    store
        .insert_discount_code(DiscountCode {
            id: Id::new(1),
            code: "SPRING10".to_string(),
            description: Some("Spring promotion".to_string()),
            amount: Money::from_cents(1000),
            is_percentage: true,
            expires_at: Some(reference_now() + Duration::from_days(90)),
            max_usage: Some(100),
            times_used: 1,
        })
        .expect("seed discount code");
}

fn seed_orders(store: &mut EntityStore, now: Timestamp) {
    let orders = [
        // (id, customer, status, age in days, discount code, carrier)
        (1, 1, OrderStatus::completed(), 40, None, None),
        (2, 1, OrderStatus::shipped(), 10, None, Some(Id::new(1))),
        // Exactly on the 30-day boundary: included by report 7.
        (3, 2, OrderStatus::pending(), 30, None, None),
        // One day past the boundary: excluded by report 7, still pending.
        (4, 4, OrderStatus::pending(), 31, Some(Id::new(1)), None),
        (5, 4, OrderStatus::cancelled(), 1, None, None),
    ];

    for (id, customer, status, age_days, discount_code, carrier) in orders {
        store
            .insert_order(Order {
                id: Id::new(id),
                customer: Id::new(customer),
                status,
                placed_at: now.saturating_sub(Duration::from_days(age_days)),
                discount_code,
                carrier,
            })
            .expect("seed order");
    }

    let items = [
        // (id, order, product, quantity, unit cents, discount cents)
        (1, 1, 1, 1, 12000, 0),
        (2, 1, 3, 2, 1000, 0),
        (3, 2, 2, 1, 8000, 500),
        // Order 3 totals exactly 24.00: (10.00 × 2 − 1.00) + 5.00.
        (4, 3, 3, 2, 1000, 100),
        (5, 3, 4, 1, 500, 0),
        // Order 4 carries three lines with a single discounted one.
        (6, 4, 1, 2, 12000, 2000),
        (7, 4, 3, 1, 1000, 0),
        (8, 4, 2, 1, 8000, 0),
        (9, 5, 2, 3, 8000, 0),
    ];

    for (id, order, product, quantity, unit_cents, discount_cents) in items {
        store
            .insert_order_item(OrderItem {
                id: Id::new(id),
                order: Id::new(order),
                product: Id::new(product),
                quantity,
                unit_price: Money::from_cents(unit_cents),
                discount: Money::from_cents(discount_cents),
            })
            .expect("seed order item");
    }
}
