//! CartStore - the shopper's persisted cart
//!
//! One line per product id; adding an existing product bumps its quantity.
//! Every mutation writes the whole cart under [`CART_KEY`]; a failed write
//! leaves the in-memory cart as it was.

use crate::core::{Action, EventBus, Resource};
use crate::storage::{self, CART_KEY, KvStore};
use crate::utils::money;
use shared::AppResult;
use shared::models::{CartItem, Product};
use std::sync::Arc;

pub struct CartStore {
    kv: Arc<dyn KvStore>,
    events: EventBus,
    items: Vec<CartItem>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Restore the cart; absent or malformed data yields an empty cart
    pub fn load(kv: Arc<dyn KvStore>, events: EventBus) -> Self {
        let items: Vec<CartItem> = storage::load_json(kv.as_ref(), CART_KEY).unwrap_or_default();
        // Drop lines that could only come from a hand-edited snapshot
        let items: Vec<CartItem> = items.into_iter().filter(|i| i.quantity >= 1).collect();
        tracing::debug!(lines = items.len(), "Cart loaded");
        Self { kv, events, items }
    }

    /// Write `next`, then swap it in; the cart is unchanged when the write fails
    fn commit(&mut self, next: Vec<CartItem>) -> AppResult<()> {
        storage::save_json(self.kv.as_ref(), CART_KEY, &next)?;
        self.items = next;
        Ok(())
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit; a product already in the cart gets quantity + 1
    pub fn add_to_cart(&mut self, product: &Product) -> AppResult<()> {
        let mut next = self.items.clone();
        match next.iter_mut().find(|i| i.product_id() == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => next.push(CartItem::new(product.clone())),
        }
        self.commit(next)?;

        tracing::debug!(product_id = product.id, "Added to cart");
        self.events
            .publish(Resource::Cart, Action::Updated, Some(product.id.to_string()));
        Ok(())
    }

    /// Remove a line; returns `false` when the product was not in the cart
    pub fn remove_from_cart(&mut self, product_id: i64) -> AppResult<bool> {
        let mut next = self.items.clone();
        next.retain(|i| i.product_id() != product_id);
        if next.len() == self.items.len() {
            return Ok(false);
        }
        self.commit(next)?;

        self.events
            .publish(Resource::Cart, Action::Deleted, Some(product_id.to_string()));
        Ok(true)
    }

    /// Set a line's quantity
    ///
    /// Quantities below 1 are ignored (the line is kept) and reported as
    /// `false`, as is an id not in the cart.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i32) -> AppResult<bool> {
        if quantity < 1 {
            tracing::debug!(product_id, quantity, "Ignoring quantity below 1");
            return Ok(false);
        }
        let Some(pos) = self.items.iter().position(|i| i.product_id() == product_id) else {
            return Ok(false);
        };
        let mut next = self.items.clone();
        next[pos].quantity = quantity;
        self.commit(next)?;

        self.events
            .publish(Resource::Cart, Action::Updated, Some(product_id.to_string()));
        Ok(true)
    }

    pub fn clear_cart(&mut self) -> AppResult<()> {
        self.commit(Vec::new())?;
        self.events.publish(Resource::Cart, Action::Cleared, None);
        Ok(())
    }

    /// Σ price × quantity, rounded to 2 decimal places
    pub fn cart_total(&self) -> f64 {
        money::lines_total(&self.items)
    }

    /// Σ quantity
    pub fn cart_count(&self) -> i64 {
        money::lines_count(&self.items)
    }

    /// Reload from storage (after a factory reset)
    pub(crate) fn reload(&mut self) {
        self.items = storage::load_json(self.kv.as_ref(), CART_KEY).unwrap_or_default();
        self.events.publish(Resource::Cart, Action::Reset, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FailingStore, MemoryStore};

    fn create_test_product(id: i64, price: f64) -> Product {
        Product {
            id,
            title: format!("Produto {}", id),
            price,
            original_price: None,
            image: String::new(),
            category: "Acessórios".to_string(),
            is_new: None,
        }
    }

    fn create_test_cart() -> (CartStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (CartStore::load(kv.clone(), EventBus::new()), kv)
    }

    #[test]
    fn test_add_same_product_increments() {
        let (mut cart, _) = create_test_cart();
        let a = create_test_product(1, 100.0);
        cart.add_to_cart(&a).unwrap();
        cart.add_to_cart(&a).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.cart_count(), 2);
        assert_eq!(cart.cart_total(), 200.0);
    }

    #[test]
    fn test_totals_use_decimal_arithmetic() {
        let (mut cart, _) = create_test_cart();
        cart.add_to_cart(&create_test_product(1, 0.1)).unwrap();
        cart.add_to_cart(&create_test_product(2, 0.2)).unwrap();
        assert_eq!(cart.cart_total(), 0.3);
    }

    #[test]
    fn test_quantity_floor() {
        let (mut cart, _) = create_test_cart();
        cart.add_to_cart(&create_test_product(1, 10.0)).unwrap();

        assert!(!cart.update_quantity(1, 0).unwrap());
        assert!(!cart.update_quantity(1, -1).unwrap());
        assert_eq!(cart.items()[0].quantity, 1);

        assert!(cart.update_quantity(1, 5).unwrap());
        assert_eq!(cart.cart_count(), 5);

        assert!(!cart.update_quantity(99, 3).unwrap());
    }

    #[test]
    fn test_remove_and_clear() {
        let (mut cart, _) = create_test_cart();
        cart.add_to_cart(&create_test_product(1, 10.0)).unwrap();
        cart.add_to_cart(&create_test_product(2, 20.0)).unwrap();

        assert!(cart.remove_from_cart(1).unwrap());
        assert!(!cart.remove_from_cart(1).unwrap());
        assert_eq!(cart.cart_total(), 20.0);

        cart.clear_cart().unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_total(), 0.0);
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_cart_survives_reload() {
        let (mut cart, kv) = create_test_cart();
        cart.add_to_cart(&create_test_product(3, 1899.0)).unwrap();
        cart.update_quantity(3, 2).unwrap();

        let restored = CartStore::load(kv, EventBus::new());
        assert_eq!(restored.items(), cart.items());
    }

    #[test]
    fn test_add_at_max_quantity_saturates() {
        let (mut cart, _) = create_test_cart();
        let a = create_test_product(1, 10.0);
        cart.add_to_cart(&a).unwrap();
        assert!(cart.update_quantity(1, i32::MAX).unwrap());

        cart.add_to_cart(&a).unwrap();
        assert_eq!(cart.items()[0].quantity, i32::MAX);
        assert_eq!(cart.cart_count(), i32::MAX as i64);
    }

    #[test]
    fn test_failed_write_keeps_cart() {
        let kv = Arc::new(FailingStore::default());
        let mut cart = CartStore::load(kv.clone(), EventBus::new());
        cart.add_to_cart(&create_test_product(1, 10.0)).unwrap();

        kv.set_failing(true);
        assert!(cart.add_to_cart(&create_test_product(2, 20.0)).is_err());
        assert!(cart.add_to_cart(&create_test_product(1, 10.0)).is_err());
        assert!(cart.update_quantity(1, 4).is_err());
        assert!(cart.remove_from_cart(1).is_err());
        assert!(cart.clear_cart().is_err());
        assert_eq!(cart.cart_count(), 1);
        assert_eq!(cart.cart_total(), 10.0);

        kv.set_failing(false);
        let restored = CartStore::load(kv, EventBus::new());
        assert_eq!(restored.items(), cart.items());
    }

    #[test]
    fn test_malformed_cart_loads_empty() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(CART_KEY, "[{\"id\":").unwrap();
        let cart = CartStore::load(kv, EventBus::new());
        assert!(cart.is_empty());
    }
}
