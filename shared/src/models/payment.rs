//! Payment method configuration Model
//!
//! Six fixed provider slots; admins toggle and configure them but never
//! create or delete them.

use serde::{Deserialize, Serialize};

/// Known payment provider ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProviderId {
    MercadoPago,
    Stripe,
    Asaas,
    PagarMe,
    Pix,
    Crypto,
}

impl PaymentProviderId {
    pub const ALL: [PaymentProviderId; 6] = [
        PaymentProviderId::MercadoPago,
        PaymentProviderId::Stripe,
        PaymentProviderId::Asaas,
        PaymentProviderId::PagarMe,
        PaymentProviderId::Pix,
        PaymentProviderId::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentProviderId::MercadoPago => "mercado_pago",
            PaymentProviderId::Stripe => "stripe",
            PaymentProviderId::Asaas => "asaas",
            PaymentProviderId::PagarMe => "pagar_me",
            PaymentProviderId::Pix => "pix",
            PaymentProviderId::Crypto => "crypto",
        }
    }
}

/// Integration type, decides which config fields apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    /// Gateway with public/private keys and a mode
    Api,
    /// Manual transfer (pix key)
    Manual,
    /// Wallet address + network
    Crypto,
}

/// Gateway environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    Sandbox,
    Production,
}

/// Config bag; which fields are meaningful depends on [`PaymentKind`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ApiMode>,
}

/// Payment method configuration entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfig {
    pub id: PaymentProviderId,
    /// Display name; recorded on sales as the payment method label
    pub name: String,
    /// Offered at checkout / POS only when active
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    #[serde(default)]
    pub config: PaymentSettings,
}
