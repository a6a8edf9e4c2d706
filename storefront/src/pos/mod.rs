//! POS - in-store checkout for a logged-in seller
//!
//! A seller-bound cart kept in memory only. The flow is
//! add items → [`open_checkout`](PosSession::open_checkout) →
//! [`finalize`](PosSession::finalize) → print the receipt →
//! [`new_sale`](PosSession::new_sale).
//!
//! The cart is kept after finalizing so the receipt can be reprinted; it is
//! only cleared when the next sale starts.

use crate::auth::SessionStore;
use crate::catalog::CatalogStore;
use crate::printing::receipt;
use crate::utils::money;
use shared::models::{CartItem, PaymentConfig, Product, Role, Sale, SaleDraft, StoreInfo, User};
use shared::{AppError, AppResult, ErrorCode};

/// Customer label when the seller leaves the name blank
pub const DEFAULT_CUSTOMER_NAME: &str = "Consumidor Final";

#[derive(Debug, Clone)]
pub struct PosSession {
    seller: User,
    cart: Vec<CartItem>,
    selected_payment: Option<String>,
    last_sale: Option<Sale>,
}

impl PosSession {
    /// Start a POS session for the logged-in seller
    pub fn start(session: &SessionStore) -> AppResult<Self> {
        let seller = session.require_role(Role::Seller)?.clone();
        Ok(Self::for_seller(seller))
    }

    fn for_seller(seller: User) -> Self {
        tracing::info!(seller = %seller.username, "POS session started");
        Self {
            seller,
            cart: Vec::new(),
            selected_payment: None,
            last_sale: None,
        }
    }

    pub fn seller(&self) -> &User {
        &self.seller
    }

    pub fn items(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn total(&self) -> f64 {
        money::lines_total(&self.cart)
    }

    pub fn count(&self) -> i64 {
        money::lines_count(&self.cart)
    }

    pub fn selected_payment(&self) -> Option<&str> {
        self.selected_payment.as_deref()
    }

    pub fn last_sale(&self) -> Option<&Sale> {
        self.last_sale.as_ref()
    }

    pub fn add(&mut self, product: &Product) {
        match self.cart.iter_mut().find(|i| i.product_id() == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.cart.push(CartItem::new(product.clone())),
        }
    }

    /// Adjust a line by `delta`; the result never drops below 1
    pub fn change_quantity(&mut self, product_id: i64, delta: i32) -> bool {
        let Some(line) = self.cart.iter_mut().find(|i| i.product_id() == product_id) else {
            return false;
        };
        line.quantity = line.quantity.saturating_add(delta).max(1);
        true
    }

    pub fn remove(&mut self, product_id: i64) -> bool {
        let before = self.cart.len();
        self.cart.retain(|i| i.product_id() != product_id);
        self.cart.len() != before
    }

    /// Open the payment dialog, preselecting the first active method
    pub fn open_checkout(&mut self, settings: &[PaymentConfig]) -> AppResult<&str> {
        if self.cart.is_empty() {
            return Err(AppError::new(ErrorCode::CartEmpty));
        }
        let first = settings
            .iter()
            .find(|p| p.active)
            .ok_or_else(|| AppError::new(ErrorCode::NoPaymentMethodAvailable))?;
        Ok(self.selected_payment.insert(first.name.clone()).as_str())
    }

    pub fn select_payment(&mut self, name: impl Into<String>) {
        self.selected_payment = Some(name.into());
    }

    /// Record the sale in the catalog store
    ///
    /// A blank customer name becomes [`DEFAULT_CUSTOMER_NAME`]; a blank CPF
    /// is not recorded.
    pub fn finalize(
        &mut self,
        catalog: &mut CatalogStore,
        customer_name: &str,
        customer_cpf: &str,
        payment_method: &str,
    ) -> AppResult<Sale> {
        if self.last_sale.is_some() {
            return Err(AppError::invalid_request(
                "Sale already finalized, start a new sale first",
            ));
        }
        if self.cart.is_empty() {
            return Err(AppError::new(ErrorCode::CartEmpty));
        }
        let payment_method = payment_method.trim();
        if payment_method.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::CheckoutIncomplete,
                "Selecione um método de pagamento",
            ));
        }
        if !catalog
            .active_payment_methods()
            .iter()
            .any(|p| p.name == payment_method)
        {
            return Err(AppError::new(ErrorCode::PaymentMethodInactive)
                .with_detail("payment_method", payment_method));
        }

        let customer_name = match customer_name.trim() {
            "" => DEFAULT_CUSTOMER_NAME,
            name => name,
        };
        let customer_cpf = customer_cpf.trim();

        let draft = SaleDraft {
            seller_id: Some(self.seller.id.clone()),
            seller_name: Some(self.seller.name.clone()),
            total: self.total(),
            items: self.cart.clone(),
            customer_name: Some(customer_name.to_string()),
            customer_cpf: (!customer_cpf.is_empty()).then(|| customer_cpf.to_string()),
            payment_method: payment_method.to_string(),
        };
        let sale = catalog.record_sale(draft)?;
        self.last_sale = Some(sale.clone());
        Ok(sale)
    }

    /// Text receipt for the last finalized sale
    pub fn receipt(&self, store: &StoreInfo, width: usize) -> Option<String> {
        self.last_sale
            .as_ref()
            .map(|sale| receipt::render(sale, store, width))
    }

    /// Reset for the next customer
    pub fn new_sale(&mut self) {
        self.cart.clear();
        self.selected_payment = None;
        self.last_sale = None;
    }
}
