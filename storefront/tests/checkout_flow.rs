//! 线上结账端到端测试
//!
//! 购物车 → 表单校验 → 延迟支付 → 销售记录 → 成功页清空购物车

use shared::models::{PaymentProviderId, ProductCreate};
use std::sync::Arc;
use std::time::Duration;
use storefront::checkout::{Address, DeliveryMethod, ONLINE_SELLER_NAME};
use storefront::{AppState, CheckoutError, CheckoutForm, Config, MemoryStore, PaymentOutcome};
use tokio_util::sync::CancellationToken;

fn create_test_state(payment_delay_ms: u64) -> AppState {
    let kv = Arc::new(MemoryStore::new());
    let config = Config::with_overrides("./target/test-data", payment_delay_ms);
    AppState::new(kv, config).unwrap()
}

fn create_test_form(payment_method: &str) -> CheckoutForm {
    CheckoutForm {
        full_name: "Ana Lima".to_string(),
        email: "ana@example.com".to_string(),
        whatsapp: "11999990000".to_string(),
        cpf: "123.456.789-00".to_string(),
        delivery: DeliveryMethod::Pickup,
        payment_method: payment_method.to_string(),
    }
}

/// Add product "A" (price 100) to the catalog and put it in the cart twice
fn fill_cart(state: &AppState) {
    let product = state
        .catalog
        .write()
        .add_product(ProductCreate {
            title: "A".to_string(),
            price: 100.0,
            category: "Acessórios".to_string(),
            ..Default::default()
        })
        .unwrap();

    let mut cart = state.cart.write();
    cart.add_to_cart(&product).unwrap();
    cart.add_to_cart(&product).unwrap();
}

#[tokio::test]
async fn test_checkout_end_to_end() {
    let state = create_test_state(0);
    fill_cart(&state);
    {
        let cart = state.cart.read();
        assert_eq!(cart.cart_count(), 2);
        assert_eq!(cart.cart_total(), 200.0);
    }

    let outcome = state
        .place_order(create_test_form("Pix"), CancellationToken::new())
        .await
        .unwrap();
    let PaymentOutcome::Completed(sale) = outcome else {
        panic!("expected completed payment, got {:?}", outcome);
    };

    {
        let catalog = state.catalog.read();
        assert_eq!(catalog.sales().len(), 1);
        let recorded = &catalog.sales()[0];
        assert_eq!(recorded, &sale);
        assert_eq!(recorded.total, 200.0);
        assert_eq!(recorded.items.len(), 1);
        assert_eq!(recorded.items[0].quantity, 2);
        assert_eq!(recorded.payment_method, "Pix");
        assert_eq!(recorded.seller_id, None);
        assert_eq!(recorded.seller_name.as_deref(), Some(ONLINE_SELLER_NAME));
        assert_eq!(recorded.customer_name.as_deref(), Some("Ana Lima"));
        assert_eq!(recorded.customer_cpf.as_deref(), Some("123.456.789-00"));
    }

    // Cart survives until the success view confirms
    assert_eq!(state.cart.read().cart_count(), 2);
    state.confirm_success(&sale).unwrap();
    assert!(state.cart.read().is_empty());
}

#[tokio::test]
async fn test_delivery_checkout() {
    let state = create_test_state(0);
    fill_cart(&state);

    let mut form = create_test_form("Mercado Pago");
    form.cpf = String::new();
    form.delivery = DeliveryMethod::Delivery(Address {
        zip_code: "01310-100".to_string(),
        street: "Av. Paulista".to_string(),
        number: "1000".to_string(),
        neighborhood: "Bela Vista".to_string(),
        complement: "Apto 12".to_string(),
    });

    let outcome = state.place_order(form, CancellationToken::new()).await.unwrap();
    let sale = outcome.sale().unwrap();
    assert_eq!(sale.payment_method, "Mercado Pago");
    assert_eq!(sale.customer_cpf, None);
}

#[tokio::test]
async fn test_abandoned_payment_records_nothing() {
    let state = create_test_state(60_000);
    fill_cart(&state);

    let token = CancellationToken::new();
    token.cancel();
    let outcome = state
        .place_order(create_test_form("Pix"), token)
        .await
        .unwrap();

    assert_eq!(outcome, PaymentOutcome::Abandoned);
    assert!(state.catalog.read().sales().is_empty());
    assert_eq!(state.cart.read().cart_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_while_pending() {
    let state = create_test_state(1500);
    fill_cart(&state);

    let token = CancellationToken::new();
    let pending = {
        let state = state.clone();
        let token = token.clone();
        tokio::spawn(async move { state.place_order(create_test_form("Pix"), token).await })
    };

    tokio::time::sleep(Duration::from_millis(500)).await;
    token.cancel();

    assert_eq!(pending.await.unwrap().unwrap(), PaymentOutcome::Abandoned);
    assert!(state.catalog.read().sales().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_method_disabled_while_pending() {
    let state = create_test_state(1500);
    fill_cart(&state);

    let pending = {
        let state = state.clone();
        tokio::spawn(async move {
            state
                .place_order(create_test_form("Pix"), CancellationToken::new())
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(10)).await;
    {
        let mut catalog = state.catalog.write();
        let mut pix = catalog
            .payment_settings()
            .iter()
            .find(|p| p.id == PaymentProviderId::Pix)
            .cloned()
            .unwrap();
        pix.active = false;
        catalog.update_payment_setting(pix).unwrap();
    }

    let outcome = pending.await.unwrap().unwrap();
    assert!(matches!(outcome, PaymentOutcome::Failed(_)));
    assert!(state.catalog.read().sales().is_empty());
}

#[tokio::test]
async fn test_no_active_payment_blocks_submission() {
    let state = create_test_state(0);
    fill_cart(&state);
    {
        let mut catalog = state.catalog.write();
        let settings = catalog.payment_settings().to_vec();
        for mut config in settings {
            config.active = false;
            catalog.update_payment_setting(config).unwrap();
        }
        assert!(catalog.active_payment_methods().is_empty());
    }

    let err = state
        .place_order(create_test_form("Pix"), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::NoPaymentMethodAvailable);
    assert!(state.catalog.read().sales().is_empty());
}

#[tokio::test]
async fn test_empty_cart_rejected() {
    let state = create_test_state(0);
    let err = state
        .place_order(create_test_form("Pix"), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::EmptyCart);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_store() {
    let state = create_test_state(0);
    fill_cart(&state);

    let mut form = create_test_form("Pix");
    form.email = String::new();
    let err = state
        .place_order(form, CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::MissingContact);

    let err = state
        .place_order(create_test_form("Stripe"), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, CheckoutError::UnknownPaymentMethod("Stripe".to_string()));
    assert!(state.catalog.read().sales().is_empty());
}
