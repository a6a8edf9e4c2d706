//! AppState - explicitly wired store container
//!
//! Holds the three stores, the credential verifier and the event bus. Built
//! once with [`AppState::new`] and cloned cheaply (all fields are `Arc`s).

use super::{Config, EventBus, StoreEvent};
use crate::auth::{CredentialVerifier, DemoCredentials, SessionStore};
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::checkout::{self, CheckoutError, CheckoutForm, PaymentOutcome, PaymentTask};
use crate::pos::PosSession;
use crate::printing;
use crate::storage::KvStore;
use parking_lot::RwLock;
use shared::models::{Sale, User};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<RwLock<CatalogStore>>,
    pub cart: Arc<RwLock<CartStore>>,
    pub session: Arc<RwLock<SessionStore>>,
    verifier: Arc<dyn CredentialVerifier>,
    events: EventBus,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("catalog", &*self.catalog.read())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Load every store from `kv`, using demo credentials from `config`
    pub fn new(kv: Arc<dyn KvStore>, config: Config) -> AppResult<Self> {
        let verifier = Arc::new(DemoCredentials::from_config(&config));
        Self::with_verifier(kv, config, verifier)
    }

    pub fn with_verifier(
        kv: Arc<dyn KvStore>,
        config: Config,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> AppResult<Self> {
        let events = EventBus::new();
        let catalog = CatalogStore::load(kv.clone(), events.clone())?;
        let cart = CartStore::load(kv.clone(), events.clone());
        let session = SessionStore::load(kv, events.clone());

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(RwLock::new(catalog)),
            cart: Arc::new(RwLock::new(cart)),
            session: Arc::new(RwLock::new(session)),
            verifier,
            events,
        })
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ========== Session ==========

    pub fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let sellers = self.catalog.read().sellers().to_vec();
        self.session
            .write()
            .login(username, password, &sellers, self.verifier.as_ref())
    }

    pub fn logout(&self) -> AppResult<()> {
        self.session.write().logout()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().current().cloned()
    }

    /// POS session for the logged-in seller
    pub fn start_pos(&self) -> AppResult<PosSession> {
        PosSession::start(&self.session.read())
    }

    // ========== Online checkout ==========

    /// Validate the form, wait for the simulated payment, record the sale
    ///
    /// The cart is snapshotted at submission; it is left untouched so the
    /// caller can still show it until [`confirm_success`](Self::confirm_success).
    /// Cancelling `token` before the delay elapses records nothing.
    pub async fn place_order(
        &self,
        form: CheckoutForm,
        token: CancellationToken,
    ) -> Result<PaymentOutcome, CheckoutError> {
        {
            let catalog = self.catalog.read();
            form.validate(catalog.payment_settings())?;
        }
        let draft = {
            let cart = self.cart.read();
            checkout::online_sale_draft(&form, cart.items())?
        };
        tracing::info!(
            total = draft.total,
            payment_method = %draft.payment_method,
            "Checkout submitted"
        );

        let catalog = self.catalog.clone();
        let task = PaymentTask::new(self.config.payment_delay(), token);
        let outcome = task
            .run(move || {
                let mut catalog = catalog.write();
                // Admin may have disabled the method while payment was pending
                let still_active = catalog
                    .active_payment_methods()
                    .iter()
                    .any(|p| p.name == draft.payment_method);
                if !still_active {
                    return Err(AppError::new(ErrorCode::PaymentMethodInactive)
                        .with_detail("payment_method", draft.payment_method.clone()));
                }
                catalog.record_sale(draft)
            })
            .await;
        Ok(outcome)
    }

    /// Success view shown: empty the cart
    pub fn confirm_success(&self, sale: &Sale) -> AppResult<()> {
        tracing::debug!(sale_id = sale.id, "Order confirmed, clearing cart");
        self.cart.write().clear_cart()
    }

    /// Receipt text using the configured store header and paper width
    pub fn render_receipt(&self, sale: &Sale) -> String {
        printing::render(sale, &self.config.store, self.config.receipt_width)
    }

    // ========== Maintenance ==========

    /// Factory reset: wipe storage, reload defaults, drop cart and session
    pub fn reset_data(&self) -> AppResult<()> {
        self.catalog.write().reset_data()?;
        self.cart.write().reload();
        self.session.write().reload();
        Ok(())
    }
}
