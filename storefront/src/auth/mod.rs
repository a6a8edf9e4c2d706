//! 身份认证模块
//!
//! - [`CredentialVerifier`] - 凭证校验 (demo / argon2)
//! - [`SessionStore`] - 当前登录身份，持久化到 KV

pub mod credentials;
pub mod session;

pub use credentials::{CredentialVerifier, DemoCredentials, HashedCredentials};
pub use session::SessionStore;
