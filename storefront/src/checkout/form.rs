//! Checkout form and its validation

use serde::{Deserialize, Serialize};
use shared::models::PaymentConfig;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Shipping address (delivery only)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    /// Optional
    #[serde(default)]
    pub complement: String,
}

impl Address {
    fn is_complete(&self) -> bool {
        [&self.zip_code, &self.street, &self.number, &self.neighborhood]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Store pickup
    Pickup,
    Delivery(Address),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    /// Optional; recorded on the sale when non-blank
    #[serde(default)]
    pub cpf: String,
    pub delivery: DeliveryMethod,
    /// Display name of the chosen payment config
    pub payment_method: String,
}

/// Why a checkout submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Por favor, preencha os dados de contato obrigatórios.")]
    MissingContact,

    #[error("Por favor, preencha o endereço completo para entrega.")]
    MissingAddress,

    #[error("Por favor, selecione uma forma de pagamento.")]
    MissingPaymentMethod,

    #[error("Nenhum método de pagamento disponível no momento.")]
    NoPaymentMethodAvailable,

    #[error("Forma de pagamento indisponível: {0}")]
    UnknownPaymentMethod(String),

    #[error("O carrinho está vazio.")]
    EmptyCart,
}

impl From<CheckoutError> for AppError {
    fn from(e: CheckoutError) -> Self {
        let code = match &e {
            CheckoutError::MissingContact
            | CheckoutError::MissingAddress
            | CheckoutError::MissingPaymentMethod => ErrorCode::CheckoutIncomplete,
            CheckoutError::NoPaymentMethodAvailable => ErrorCode::NoPaymentMethodAvailable,
            CheckoutError::UnknownPaymentMethod(_) => ErrorCode::PaymentMethodInactive,
            CheckoutError::EmptyCart => ErrorCode::CartEmpty,
        };
        AppError::with_message(code, e.to_string())
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl CheckoutForm {
    /// Check required fields against the configured payment methods
    ///
    /// Only active configs count; the chosen label must match one of them.
    pub fn validate(&self, settings: &[PaymentConfig]) -> Result<(), CheckoutError> {
        if blank(&self.full_name) || blank(&self.email) || blank(&self.whatsapp) {
            return Err(CheckoutError::MissingContact);
        }
        if let DeliveryMethod::Delivery(address) = &self.delivery
            && !address.is_complete()
        {
            return Err(CheckoutError::MissingAddress);
        }

        let mut active = settings.iter().filter(|p| p.active).peekable();
        if active.peek().is_none() {
            return Err(CheckoutError::NoPaymentMethodAvailable);
        }
        if blank(&self.payment_method) {
            return Err(CheckoutError::MissingPaymentMethod);
        }
        if !active.any(|p| p.name == self.payment_method) {
            return Err(CheckoutError::UnknownPaymentMethod(
                self.payment_method.clone(),
            ));
        }
        Ok(())
    }

    /// CPF as recorded on the sale (`None` when blank)
    pub fn customer_cpf(&self) -> Option<String> {
        let cpf = self.cpf.trim();
        (!cpf.is_empty()).then(|| cpf.to_string())
    }
}
