//! 线上结账
//!
//! - [`CheckoutForm`] - 联系方式 / 配送 / 支付方式校验
//! - [`PaymentTask`] - 可取消的延迟支付步骤
//!
//! 编排逻辑 (购物车快照、记录销售) 位于
//! [`AppState::place_order`](crate::core::AppState::place_order)。

pub mod form;
pub mod payment_task;

pub use form::{Address, CheckoutError, CheckoutForm, DeliveryMethod};
pub use payment_task::{PaymentOutcome, PaymentTask};

use crate::utils::money;
use shared::models::{CartItem, SaleDraft};

/// Seller label recorded on online sales
pub const ONLINE_SELLER_NAME: &str = "Loja Online";

/// Snapshot the cart into an online sale (no seller id)
pub fn online_sale_draft(
    form: &CheckoutForm,
    items: &[CartItem],
) -> Result<SaleDraft, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(SaleDraft {
        seller_id: None,
        seller_name: Some(ONLINE_SELLER_NAME.to_string()),
        total: money::lines_total(items),
        items: items.to_vec(),
        customer_name: Some(form.full_name.trim().to_string()),
        customer_cpf: form.customer_cpf(),
        payment_method: form.payment_method.clone(),
    })
}
