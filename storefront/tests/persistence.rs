//! 持久化测试 - redb 文件跨重启
//!
//! 每个集合写入后关闭数据库，重新打开验证内容一致

use shared::models::{CategoryCreate, PaymentProviderId, ProductCreate, User};
use std::path::Path;
use std::sync::Arc;
use storefront::storage::{PRODUCTS_KEY, SALES_KEY, SESSION_KEY};
use storefront::{AppState, Config, KvStore, RedbStore};

fn open_state(path: &Path) -> AppState {
    let kv = Arc::new(RedbStore::open(path).unwrap());
    let config = Config::with_overrides(path.parent().unwrap().to_string_lossy(), 0);
    AppState::new(kv, config).unwrap()
}

#[test]
fn test_all_collections_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("techcase.redb");

    let (products, categories, sellers, sales, payments, cart, user) = {
        let state = open_state(&path);
        {
            let mut catalog = state.catalog.write();
            catalog
                .add_product(ProductCreate {
                    title: "Carregador 20W".to_string(),
                    price: 149.9,
                    original_price: Some(199.9),
                    category: "Acessórios".to_string(),
                    is_new: Some(true),
                    ..Default::default()
                })
                .unwrap();
            catalog
                .add_category(CategoryCreate {
                    name: "Cabos".to_string(),
                    image: String::new(),
                })
                .unwrap();
            catalog
                .add_seller(User::new_seller("Maria", "maria"))
                .unwrap();

            let mut crypto = catalog.payment_settings()[5].clone();
            assert_eq!(crypto.id, PaymentProviderId::Crypto);
            crypto.active = true;
            crypto.config.wallet_address = Some("TXYZ".to_string());
            catalog.update_payment_setting(crypto).unwrap();
        }

        state.login("vendedor1", "123").unwrap();
        let mut pos = state.start_pos().unwrap();
        {
            let mut catalog = state.catalog.write();
            pos.add(catalog.product(2).unwrap());
            pos.finalize(&mut catalog, "João", "111.222.333-44", "USDT / Cripto")
                .unwrap();
        }

        state
            .cart
            .write()
            .add_to_cart(state.catalog.read().product(4).unwrap())
            .unwrap();

        let catalog = state.catalog.read();
        (
            catalog.products().to_vec(),
            catalog.categories().to_vec(),
            catalog.sellers().to_vec(),
            catalog.sales().to_vec(),
            catalog.payment_settings().to_vec(),
            state.cart.read().items().to_vec(),
            state.current_user(),
        )
    };

    let state = open_state(&path);
    let catalog = state.catalog.read();
    assert_eq!(catalog.products(), products.as_slice());
    assert_eq!(catalog.categories(), categories.as_slice());
    assert_eq!(catalog.sellers(), sellers.as_slice());
    assert_eq!(catalog.sales(), sales.as_slice());
    assert_eq!(catalog.payment_settings(), payments.as_slice());
    assert_eq!(state.cart.read().items(), cart.as_slice());
    assert_eq!(state.current_user(), user);

    assert_eq!(catalog.sales()[0].customer_cpf.as_deref(), Some("111.222.333-44"));
    let receipt = state.render_receipt(&catalog.sales()[0]);
    assert!(receipt.contains("CPF: 111.222.333-44"));
    assert!(receipt.contains("Pagamento: USDT / Cripto"));
    assert_eq!(catalog.products()[6].discount_percent(), Some(25));
}

#[test]
fn test_empty_products_reseeded_but_empty_sales_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("techcase.redb");
    {
        let kv = RedbStore::open(&path).unwrap();
        kv.set(PRODUCTS_KEY, "[]").unwrap();
        kv.set(SALES_KEY, "[]").unwrap();
    }

    let state = open_state(&path);
    let catalog = state.catalog.read();
    assert_eq!(catalog.products().len(), 6);
    assert!(catalog.sales().is_empty());
}

#[test]
fn test_logout_and_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("techcase.redb");

    {
        let state = open_state(&path);
        state.login("admin", "admin123").unwrap();
        state.logout().unwrap();
        assert!(state.current_user().is_none());
    }
    {
        let kv = RedbStore::open(&path).unwrap();
        assert!(kv.get(SESSION_KEY).unwrap().is_none());
    }

    let state = open_state(&path);
    state.login("admin", "admin123").unwrap();
    state.catalog.write().delete_product(1).unwrap();
    let product = state.catalog.read().product(2).cloned().unwrap();
    state.cart.write().add_to_cart(&product).unwrap();

    state.reset_data().unwrap();

    assert_eq!(state.catalog.read().products().len(), 6);
    assert!(state.cart.read().is_empty());
    assert!(state.current_user().is_none());
}

#[test]
fn test_login_failure() {
    let dir = tempfile::tempdir().unwrap();
    let state = open_state(&dir.path().join("techcase.redb"));

    let err = state.login("vendedor1", "wrong").unwrap_err();
    assert!(err.is(storefront::ErrorCode::InvalidCredentials));
    assert!(state.current_user().is_none());

    // sellers added at runtime can log in with the shared password
    state
        .catalog
        .write()
        .add_seller(User::new_seller("Maria", "maria"))
        .unwrap();
    let user = state.login("maria", "123").unwrap();
    assert!(user.is_seller());
}
