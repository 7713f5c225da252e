use crate::{
    error::StoreError,
    model::{
        Carrier, Category, Customer, DiscountCode, Order, OrderItem, Product, ProductCategory,
        Stock, Store,
    },
    traits::EntityIdentity,
    types::Id,
};
use std::collections::{BTreeMap, btree_map::Entry};

///
/// Collection
///
/// Insertion-ordered arena of one keyed entity type plus a key index.
/// Iteration follows insertion order; lookups go through the index.
///

pub struct Collection<E: EntityIdentity> {
    rows: Vec<E>,
    index: BTreeMap<Id<E>, usize>,
}

impl<E: EntityIdentity> Collection<E> {
    /// Insert a row, rejecting duplicate keys.
    pub fn insert(&mut self, row: E) -> Result<(), StoreError> {
        let id = row.id();

        match self.index.entry(id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey {
                entity: E::NAME,
                key: id.get(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(self.rows.len());
                self.rows.push(row);
                Ok(())
            }
        }
    }

    /// Look up a row by key.
    #[must_use]
    pub fn get(&self, id: Id<E>) -> Option<&E> {
        self.index.get(&id).map(|&slot| &self.rows[slot])
    }

    /// Navigate a foreign key; a dangling key surfaces as
    /// [`StoreError::MissingReference`] rather than a silent drop.
    pub fn expect(&self, id: Id<E>) -> Result<&E, StoreError> {
        self.get(id).ok_or(StoreError::MissingReference {
            target: E::NAME,
            key: id.get(),
        })
    }

    #[must_use]
    pub fn contains(&self, id: Id<E>) -> bool {
        self.index.contains_key(&id)
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E: EntityIdentity> Default for Collection<E> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<'a, E: EntityIdentity> IntoIterator for &'a Collection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

///
/// EntityStore
///
/// Fully-resolved, read-only dataset snapshot. The loading collaborator
/// populates it and runs [`EntityStore::validate`] before any report
/// executes; reports only read. Owned data with no interior mutability,
/// so one snapshot can be shared across report evaluations on separate
/// threads.
///

#[derive(Default)]
pub struct EntityStore {
    customers: Collection<Customer>,
    orders: Collection<Order>,
    order_items: Collection<OrderItem>,
    products: Collection<Product>,
    categories: Collection<Category>,
    stores: Collection<Store>,
    carriers: Collection<Carrier>,
    discount_codes: Collection<DiscountCode>,
    product_categories: Vec<ProductCategory>,
    stocks: Vec<Stock>,
}

impl EntityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Population (loading collaborator surface)
    // ------------------------------------------------------------------

    pub fn insert_customer(&mut self, row: Customer) -> Result<(), StoreError> {
        self.customers.insert(row)
    }

    pub fn insert_order(&mut self, row: Order) -> Result<(), StoreError> {
        self.orders.insert(row)
    }

    pub fn insert_order_item(&mut self, row: OrderItem) -> Result<(), StoreError> {
        self.order_items.insert(row)
    }

    pub fn insert_product(&mut self, row: Product) -> Result<(), StoreError> {
        self.products.insert(row)
    }

    pub fn insert_category(&mut self, row: Category) -> Result<(), StoreError> {
        self.categories.insert(row)
    }

    pub fn insert_store(&mut self, row: Store) -> Result<(), StoreError> {
        self.stores.insert(row)
    }

    pub fn insert_carrier(&mut self, row: Carrier) -> Result<(), StoreError> {
        self.carriers.insert(row)
    }

    pub fn insert_discount_code(&mut self, row: DiscountCode) -> Result<(), StoreError> {
        self.discount_codes.insert(row)
    }

    /// Association rows carry no key of their own.
    pub fn insert_product_category(&mut self, row: ProductCategory) {
        self.product_categories.push(row);
    }

    pub fn insert_stock(&mut self, row: Stock) {
        self.stocks.push(row);
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn customers(&self) -> &Collection<Customer> {
        &self.customers
    }

    #[must_use]
    pub const fn orders(&self) -> &Collection<Order> {
        &self.orders
    }

    #[must_use]
    pub const fn order_items(&self) -> &Collection<OrderItem> {
        &self.order_items
    }

    #[must_use]
    pub const fn products(&self) -> &Collection<Product> {
        &self.products
    }

    #[must_use]
    pub const fn categories(&self) -> &Collection<Category> {
        &self.categories
    }

    #[must_use]
    pub const fn stores(&self) -> &Collection<Store> {
        &self.stores
    }

    #[must_use]
    pub const fn carriers(&self) -> &Collection<Carrier> {
        &self.carriers
    }

    #[must_use]
    pub const fn discount_codes(&self) -> &Collection<DiscountCode> {
        &self.discount_codes
    }

    #[must_use]
    pub fn product_categories(&self) -> &[ProductCategory] {
        &self.product_categories
    }

    #[must_use]
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    // ------------------------------------------------------------------
    // Integrity
    // ------------------------------------------------------------------

    /// Check every foreign key in the dataset. Run by the loading
    /// collaborator after population; reports still navigate through
    /// [`Collection::expect`] so corruption introduced past validation
    /// surfaces instead of producing wrong rows.
    pub fn validate(&self) -> Result<(), StoreError> {
        for order in &self.orders {
            self.customers.expect(order.customer)?;
            if let Some(code) = order.discount_code {
                self.discount_codes.expect(code)?;
            }
            if let Some(carrier) = order.carrier {
                self.carriers.expect(carrier)?;
            }
        }

        for item in &self.order_items {
            self.orders.expect(item.order)?;
            self.products.expect(item.product)?;
        }

        for link in &self.product_categories {
            self.products.expect(link.product)?;
            self.categories.expect(link.category)?;
        }

        for stock in &self.stocks {
            self.products.expect(stock.product)?;
            self.stores.expect(stock.store)?;
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;

    fn customer(id: u64, first: &str) -> Customer {
        Customer {
            id: Id::new(id),
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.test", first.to_lowercase()),
        }
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut store = EntityStore::new();
        for (id, name) in [(3, "Carol"), (1, "Alice"), (2, "Bob")] {
            store
                .insert_customer(customer(id, name))
                .expect("insert customer");
        }

        let names: Vec<&str> = store
            .customers()
            .iter()
            .map(|c| c.first_name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Carol", "Alice", "Bob"],
            "arena order must be insertion order, not key order",
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut store = EntityStore::new();
        store
            .insert_customer(customer(1, "Alice"))
            .expect("first insert");

        let err = store
            .insert_customer(customer(1, "Alice2"))
            .expect_err("duplicate key must be rejected");
        assert_eq!(
            err,
            StoreError::DuplicateKey {
                entity: "customer",
                key: 1,
            }
        );
    }

    #[test]
    fn expect_surfaces_dangling_keys() {
        let store = EntityStore::new();
        let err = store
            .customers()
            .expect(Id::new(9))
            .expect_err("missing key must surface");
        assert_eq!(
            err,
            StoreError::MissingReference {
                target: "customer",
                key: 9,
            }
        );
    }

    #[test]
    fn validate_catches_a_dangling_order_item_product() {
        let mut store = EntityStore::new();
        store
            .insert_customer(customer(1, "Alice"))
            .expect("insert customer");
        store
            .insert_order(Order {
                id: Id::new(1),
                customer: Id::new(1),
                status: crate::model::OrderStatus::pending(),
                placed_at: crate::types::Timestamp::EPOCH,
                discount_code: None,
                carrier: None,
            })
            .expect("insert order");
        store
            .insert_order_item(OrderItem {
                id: Id::new(1),
                order: Id::new(1),
                product: Id::new(77),
                quantity: 1,
                unit_price: Money::from_cents(100),
                discount: Money::ZERO,
            })
            .expect("insert item");

        let err = store.validate().expect_err("dangling product must fail");
        assert_eq!(
            err,
            StoreError::MissingReference {
                target: "product",
                key: 77,
            }
        );
    }

    #[test]
    fn validate_accepts_a_consistent_dataset() {
        let mut store = EntityStore::new();
        store
            .insert_customer(customer(1, "Alice"))
            .expect("insert customer");
        store
            .insert_order(Order {
                id: Id::new(1),
                customer: Id::new(1),
                status: crate::model::OrderStatus::completed(),
                placed_at: crate::types::Timestamp::EPOCH,
                discount_code: None,
                carrier: None,
            })
            .expect("insert order");

        assert_eq!(store.validate(), Ok(()));
    }
}
