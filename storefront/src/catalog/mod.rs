//! CatalogStore - products, categories, sellers, sales and payment settings
//!
//! Single source of truth for the five back-office collections. Every
//! mutation builds the changed collection, writes it whole to the
//! [`KvStore`], swaps it in only once the write succeeded, then broadcasts a
//! [`StoreEvent`](crate::core::StoreEvent).
//!
//! # Load policy
//!
//! | Collection | Missing / malformed | Stored but empty |
//! |------------|---------------------|------------------|
//! | products | defaults | defaults |
//! | categories | defaults | defaults |
//! | sellers | defaults | defaults |
//! | payment settings | defaults | defaults |
//! | sales | empty | kept empty |

pub mod seed;


use crate::core::{Action, EventBus, Resource};
use crate::storage::{
    self, CATEGORIES_KEY, KvStore, PAYMENTS_KEY, PRODUCTS_KEY, SALES_KEY, SELLERS_KEY,
};
use crate::utils::money;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    Category, CategoryCreate, PaymentConfig, Product, ProductCreate, Role, Sale, SaleDraft, User,
};
use shared::util::{now_iso, now_millis};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

/// Next id for an integer-keyed collection: max + 1, or 1 when empty
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

/// Load a collection, falling back to `default` when missing, malformed or empty
fn load_or_seed<T: DeserializeOwned>(
    kv: &dyn KvStore,
    key: &str,
    default: impl FnOnce() -> Vec<T>,
) -> Vec<T> {
    match storage::load_json::<Vec<T>>(kv, key) {
        Some(items) if !items.is_empty() => items,
        _ => {
            tracing::debug!(key = %key, "Seeding collection with defaults");
            default()
        }
    }
}

/// Write `next` under `key`, then swap it into `slot`
///
/// `slot` is left as it was when the write fails.
fn commit<T: Serialize>(
    kv: &dyn KvStore,
    key: &str,
    slot: &mut Vec<T>,
    next: Vec<T>,
) -> AppResult<()> {
    storage::save_json(kv, key, &next)?;
    *slot = next;
    Ok(())
}

fn validate_price(price: f64, original_price: Option<f64>) -> AppResult<()> {
    if !money::is_valid_price(price) {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice).with_detail("price", price));
    }
    if let Some(op) = original_price
        && !money::is_valid_price(op)
    {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice).with_detail("original_price", op));
    }
    Ok(())
}

pub struct CatalogStore {
    kv: Arc<dyn KvStore>,
    events: EventBus,
    products: Vec<Product>,
    categories: Vec<Category>,
    sellers: Vec<User>,
    /// Newest first
    sales: Vec<Sale>,
    payment_settings: Vec<PaymentConfig>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("products", &self.products.len())
            .field("categories", &self.categories.len())
            .field("sellers", &self.sellers.len())
            .field("sales", &self.sales.len())
            .field("payment_settings", &self.payment_settings.len())
            .finish()
    }
}

impl CatalogStore {
    /// Load all five collections, seeding defaults, and write them back
    pub fn load(kv: Arc<dyn KvStore>, events: EventBus) -> AppResult<Self> {
        let mut store = Self {
            kv,
            events,
            products: Vec::new(),
            categories: Vec::new(),
            sellers: Vec::new(),
            sales: Vec::new(),
            payment_settings: Vec::new(),
        };
        store.reload()?;
        tracing::info!(
            products = store.products.len(),
            categories = store.categories.len(),
            sellers = store.sellers.len(),
            sales = store.sales.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    fn reload(&mut self) -> AppResult<()> {
        let kv = self.kv.as_ref();
        let products = load_or_seed(kv, PRODUCTS_KEY, seed::default_products);
        let categories = load_or_seed(kv, CATEGORIES_KEY, seed::default_categories);
        let sellers = load_or_seed(kv, SELLERS_KEY, seed::default_sellers);
        let payment_settings = load_or_seed(kv, PAYMENTS_KEY, seed::default_payment_settings);
        let sales: Vec<Sale> = storage::load_json(kv, SALES_KEY).unwrap_or_default();

        storage::save_json(kv, PRODUCTS_KEY, &products)?;
        storage::save_json(kv, CATEGORIES_KEY, &categories)?;
        storage::save_json(kv, SELLERS_KEY, &sellers)?;
        storage::save_json(kv, PAYMENTS_KEY, &payment_settings)?;
        storage::save_json(kv, SALES_KEY, &sales)?;

        self.products = products;
        self.categories = categories;
        self.sellers = sellers;
        self.payment_settings = payment_settings;
        self.sales = sales;
        Ok(())
    }

    // ========== Read access ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn sellers(&self) -> &[User] {
        &self.sellers
    }

    /// Sales, newest first
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn payment_settings(&self) -> &[PaymentConfig] {
        &self.payment_settings
    }

    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn seller_by_username(&self, username: &str) -> Option<&User> {
        self.sellers.iter().find(|s| s.username == username)
    }

    // ========== Derived views ==========

    /// Products in a category (exact name match); `None` returns everything
    pub fn products_in_category(&self, category: Option<&str>) -> Vec<&Product> {
        match category {
            Some(name) => self.products.iter().filter(|p| p.category == name).collect(),
            None => self.products.iter().collect(),
        }
    }

    /// Case-insensitive substring search on title or category
    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Payment methods offered at checkout / POS, in configured order
    pub fn active_payment_methods(&self) -> Vec<&PaymentConfig> {
        self.payment_settings.iter().filter(|p| p.active).collect()
    }

    pub fn sales_for_seller(&self, seller_id: &str) -> Vec<&Sale> {
        self.sales
            .iter()
            .filter(|s| s.seller_id.as_deref() == Some(seller_id))
            .collect()
    }

    /// Σ sale totals
    pub fn revenue(&self) -> f64 {
        money::to_f64(self.sales.iter().map(|s| money::to_decimal(s.total)).sum())
    }

    // ========== Products ==========

    pub fn add_product(&mut self, data: ProductCreate) -> AppResult<Product> {
        validate_price(data.price, data.original_price)?;
        let id = next_id(self.products.iter().map(|p| p.id));
        let product = data.into_product(id);
        let mut next = self.products.clone();
        next.push(product.clone());
        commit(self.kv.as_ref(), PRODUCTS_KEY, &mut self.products, next)?;

        tracing::info!(id, title = %product.title, "Product created");
        self.events
            .publish(Resource::Product, Action::Created, Some(id.to_string()));
        Ok(product)
    }

    pub fn update_product(&mut self, product: Product) -> AppResult<()> {
        validate_price(product.price, product.original_price)?;
        let id = product.id;
        let pos = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
        let mut next = self.products.clone();
        next[pos] = product;
        commit(self.kv.as_ref(), PRODUCTS_KEY, &mut self.products, next)?;

        tracing::info!(id, "Product updated");
        self.events
            .publish(Resource::Product, Action::Updated, Some(id.to_string()));
        Ok(())
    }

    /// Returns `false` when no product had that id
    pub fn delete_product(&mut self, id: i64) -> AppResult<bool> {
        let mut next = self.products.clone();
        next.retain(|p| p.id != id);
        let removed = next.len() != self.products.len();
        commit(self.kv.as_ref(), PRODUCTS_KEY, &mut self.products, next)?;

        if removed {
            tracing::info!(id, "Product deleted");
            self.events
                .publish(Resource::Product, Action::Deleted, Some(id.to_string()));
        } else {
            tracing::debug!(id, "Delete ignored, product not found");
        }
        Ok(removed)
    }

    // ========== Categories ==========

    pub fn add_category(&mut self, data: CategoryCreate) -> AppResult<Category> {
        let id = next_id(self.categories.iter().map(|c| c.id));
        let category = data.into_category(id);
        let mut next = self.categories.clone();
        next.push(category.clone());
        commit(self.kv.as_ref(), CATEGORIES_KEY, &mut self.categories, next)?;

        tracing::info!(id, name = %category.name, "Category created");
        self.events
            .publish(Resource::Category, Action::Created, Some(id.to_string()));
        Ok(category)
    }

    pub fn update_category(&mut self, category: Category) -> AppResult<()> {
        let id = category.id;
        let pos = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::CategoryNotFound).with_detail("id", id))?;
        let mut next = self.categories.clone();
        next[pos] = category;
        commit(self.kv.as_ref(), CATEGORIES_KEY, &mut self.categories, next)?;

        tracing::info!(id, "Category updated");
        self.events
            .publish(Resource::Category, Action::Updated, Some(id.to_string()));
        Ok(())
    }

    /// Products referencing the category by name keep their (now dangling) name.
    pub fn delete_category(&mut self, id: i64) -> AppResult<bool> {
        let Some(pos) = self.categories.iter().position(|c| c.id == id) else {
            storage::save_json(self.kv.as_ref(), CATEGORIES_KEY, &self.categories)?;
            tracing::debug!(id, "Delete ignored, category not found");
            return Ok(false);
        };
        let mut next = self.categories.clone();
        let category = next.remove(pos);
        commit(self.kv.as_ref(), CATEGORIES_KEY, &mut self.categories, next)?;

        let orphaned = self
            .products
            .iter()
            .filter(|p| p.category == category.name)
            .count();
        if orphaned > 0 {
            tracing::debug!(
                id,
                name = %category.name,
                orphaned,
                "Deleted category is still referenced by products"
            );
        }
        tracing::info!(id, "Category deleted");
        self.events
            .publish(Resource::Category, Action::Deleted, Some(id.to_string()));
        Ok(true)
    }

    // ========== Sellers ==========

    /// Append a caller-built seller (id chosen by the caller)
    pub fn add_seller(&mut self, mut seller: User) -> AppResult<User> {
        seller.role = Role::Seller;
        if self.seller_by_username(&seller.username).is_some() {
            tracing::warn!(username = %seller.username, "Seller username already in use");
        }
        let mut next = self.sellers.clone();
        next.push(seller.clone());
        commit(self.kv.as_ref(), SELLERS_KEY, &mut self.sellers, next)?;

        tracing::info!(id = %seller.id, username = %seller.username, "Seller created");
        self.events
            .publish(Resource::Seller, Action::Created, Some(seller.id.clone()));
        Ok(seller)
    }

    pub fn update_seller(&mut self, seller: User) -> AppResult<()> {
        let id = seller.id.clone();
        let pos = self
            .sellers
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::SellerNotFound).with_detail("id", id.clone()))?;
        let mut next = self.sellers.clone();
        next[pos] = seller;
        commit(self.kv.as_ref(), SELLERS_KEY, &mut self.sellers, next)?;

        tracing::info!(id = %id, "Seller updated");
        self.events.publish(Resource::Seller, Action::Updated, Some(id));
        Ok(())
    }

    pub fn delete_seller(&mut self, id: &str) -> AppResult<bool> {
        let mut next = self.sellers.clone();
        next.retain(|s| s.id != id);
        let removed = next.len() != self.sellers.len();
        commit(self.kv.as_ref(), SELLERS_KEY, &mut self.sellers, next)?;

        if removed {
            tracing::info!(id = %id, "Seller deleted");
            self.events
                .publish(Resource::Seller, Action::Deleted, Some(id.to_string()));
        } else {
            tracing::debug!(id = %id, "Delete ignored, seller not found");
        }
        Ok(removed)
    }

    // ========== Payment settings ==========

    /// Replace the slot with the same provider id; never inserts
    pub fn update_payment_setting(&mut self, config: PaymentConfig) -> AppResult<()> {
        let id = config.id;
        let active = config.active;
        let pos = self
            .payment_settings
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::PaymentMethodNotFound).with_detail("id", id.as_str())
            })?;
        let mut next = self.payment_settings.clone();
        next[pos] = config;
        commit(self.kv.as_ref(), PAYMENTS_KEY, &mut self.payment_settings, next)?;

        tracing::info!(id = id.as_str(), active, "Payment setting updated");
        self.events.publish(
            Resource::PaymentSetting,
            Action::Updated,
            Some(id.as_str().to_string()),
        );
        Ok(())
    }

    // ========== Sales ==========

    /// Stamp id/date, prepend (newest first), persist and return the record
    ///
    /// The id is the creation time in milliseconds, bumped past the newest
    /// existing id so ids stay strictly increasing.
    pub fn record_sale(&mut self, draft: SaleDraft) -> AppResult<Sale> {
        let newest = self.sales.first().map_or(i64::MIN, |s| s.id);
        let id = now_millis().max(newest.saturating_add(1));
        let sale = draft.stamp(id, now_iso());
        let mut next = Vec::with_capacity(self.sales.len() + 1);
        next.push(sale.clone());
        next.extend(self.sales.iter().cloned());
        commit(self.kv.as_ref(), SALES_KEY, &mut self.sales, next)?;

        tracing::info!(
            id,
            total = sale.total,
            payment_method = %sale.payment_method,
            seller = sale.seller_name.as_deref().unwrap_or("-"),
            "Sale recorded"
        );
        self.events
            .publish(Resource::Sale, Action::Created, Some(id.to_string()));
        Ok(sale)
    }

    // ========== Reset ==========

    /// Factory reset: wipe every persisted key and reload from defaults
    pub fn reset_data(&mut self) -> AppResult<()> {
        self.kv.clear()?;
        self.reload()?;
        tracing::warn!("Store data reset to defaults");
        self.events.publish(Resource::All, Action::Reset, None);
        Ok(())
    }
}
