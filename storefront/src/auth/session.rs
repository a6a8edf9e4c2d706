//! SessionStore - the single logged-in identity
//!
//! Persisted under [`SESSION_KEY`]; logout removes the key entirely.

use super::CredentialVerifier;
use crate::core::{Action, EventBus, Resource};
use crate::storage::{self, KvStore, SESSION_KEY};
use shared::models::{Role, User};
use shared::{AppError, AppResult, ErrorCode};
use std::sync::Arc;

pub struct SessionStore {
    kv: Arc<dyn KvStore>,
    events: EventBus,
    current: Option<User>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn load(kv: Arc<dyn KvStore>, events: EventBus) -> Self {
        let current: Option<User> = storage::load_json(kv.as_ref(), SESSION_KEY);
        if let Some(user) = &current {
            tracing::info!(username = %user.username, role = %user.role, "Session restored");
        }
        Self {
            kv,
            events,
            current,
        }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Verify credentials and persist the resulting identity
    ///
    /// A failed attempt leaves any existing session untouched.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        sellers: &[User],
        verifier: &dyn CredentialVerifier,
    ) -> AppResult<User> {
        let Some(user) = verifier.verify(username, password, sellers) else {
            tracing::warn!(username = %username, "Login failed");
            return Err(AppError::invalid_credentials());
        };

        storage::save_json(self.kv.as_ref(), SESSION_KEY, &user)?;
        self.current = Some(user.clone());

        tracing::info!(username = %user.username, role = %user.role, "Login successful");
        self.events
            .publish(Resource::Session, Action::Created, Some(user.id.clone()));
        Ok(user)
    }

    pub fn logout(&mut self) -> AppResult<()> {
        self.kv.remove(SESSION_KEY)?;
        if let Some(user) = self.current.take() {
            tracing::info!(username = %user.username, "Logged out");
            self.events
                .publish(Resource::Session, Action::Deleted, Some(user.id));
        }
        Ok(())
    }

    /// Guard for role-restricted views (admin panel, POS)
    pub fn require_role(&self, role: Role) -> AppResult<&User> {
        let user = self.current.as_ref().ok_or_else(AppError::not_authenticated)?;
        if user.role == role {
            return Ok(user);
        }
        let code = match role {
            Role::Admin => ErrorCode::AdminRequired,
            _ => ErrorCode::RoleRequired,
        };
        Err(AppError::new(code).with_detail("required", role.as_str()))
    }

    /// Forget the in-memory identity after storage was wiped
    pub(crate) fn reload(&mut self) {
        self.current = storage::load_json(self.kv.as_ref(), SESSION_KEY);
        self.events.publish(Resource::Session, Action::Reset, None);
    }
}
