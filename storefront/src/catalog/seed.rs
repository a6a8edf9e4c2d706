//! Compiled-in default data
//!
//! Used whenever a collection is missing (or empty) in storage.

use shared::models::{
    ApiMode, Category, PaymentConfig, PaymentKind, PaymentProviderId, PaymentSettings, Product,
    User,
};

fn product(
    id: i64,
    title: &str,
    price: f64,
    original_price: Option<f64>,
    image: &str,
    category: &str,
    is_new: bool,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        original_price,
        image: image.to_string(),
        category: category.to_string(),
        is_new: is_new.then_some(true),
    }
}

pub fn default_categories() -> Vec<Category> {
    [
        (1, "Smartphones", "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?q=80&w=800&auto=format&fit=crop"),
        (2, "Acessórios", "https://images.unsplash.com/photo-1600086827875-a63b01f1335c?q=80&w=800&auto=format&fit=crop"),
        (3, "Smartwatches", "https://images.unsplash.com/photo-1508685096489-7aacd43bd3b1?q=80&w=800&auto=format&fit=crop"),
        (4, "Tablets", "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?q=80&w=800&auto=format&fit=crop"),
    ]
    .into_iter()
    .map(|(id, name, image)| Category {
        id,
        name: name.to_string(),
        image: image.to_string(),
    })
    .collect()
}

pub fn default_products() -> Vec<Product> {
    vec![
        product(
            1,
            "iPhone 15 Pro Max Titanium",
            8299.0,
            Some(9499.0),
            "https://images.unsplash.com/photo-1696446701796-da61225697cc?q=80&w=800&auto=format&fit=crop",
            "Smartphones",
            true,
        ),
        product(
            2,
            "Samsung Galaxy S24 Ultra",
            7999.0,
            None,
            "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?q=80&w=800&auto=format&fit=crop",
            "Smartphones",
            true,
        ),
        product(
            3,
            "AirPods Pro 2ª Geração",
            1899.0,
            Some(2299.0),
            "https://images.unsplash.com/photo-1603351154351-5cf99bc5f16d?q=80&w=800&auto=format&fit=crop",
            "Acessórios",
            false,
        ),
        product(
            4,
            "Apple Watch Series 9",
            3499.0,
            None,
            "https://images.unsplash.com/photo-1579586337278-3befd40fd17a?q=80&w=800&auto=format&fit=crop",
            "Smartwatches",
            false,
        ),
        product(
            5,
            "iPad Air M1",
            5499.0,
            Some(6200.0),
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?q=80&w=800&auto=format&fit=crop",
            "Tablets",
            false,
        ),
        product(
            6,
            "Capa MagSafe Leather",
            399.0,
            None,
            "https://images.unsplash.com/photo-1603921326210-6edd2d60ca68?q=80&w=800&auto=format&fit=crop",
            "Acessórios",
            false,
        ),
    ]
}

pub fn default_sellers() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Vendedor 1".to_string(),
            username: "vendedor1".to_string(),
            role: shared::models::Role::Seller,
        },
        User {
            id: "2".to_string(),
            name: "Vendedor 2".to_string(),
            username: "vendedor2".to_string(),
            role: shared::models::Role::Seller,
        },
    ]
}

fn api_gateway(id: PaymentProviderId, name: &str, active: bool) -> PaymentConfig {
    PaymentConfig {
        id,
        name: name.to_string(),
        active,
        kind: PaymentKind::Api,
        config: PaymentSettings {
            mode: Some(ApiMode::Sandbox),
            ..Default::default()
        },
    }
}

/// One entry per provider, in [`PaymentProviderId::ALL`] order
pub fn default_payment_settings() -> Vec<PaymentConfig> {
    vec![
        api_gateway(PaymentProviderId::MercadoPago, "Mercado Pago", true),
        api_gateway(PaymentProviderId::Stripe, "Stripe", false),
        api_gateway(PaymentProviderId::Asaas, "Asaas", false),
        api_gateway(PaymentProviderId::PagarMe, "Pagar.me", false),
        PaymentConfig {
            id: PaymentProviderId::Pix,
            name: "Pix".to_string(),
            active: true,
            kind: PaymentKind::Manual,
            config: PaymentSettings {
                pix_key: Some("email@loja.com".to_string()),
                ..Default::default()
            },
        },
        PaymentConfig {
            id: PaymentProviderId::Crypto,
            name: "USDT / Cripto".to_string(),
            active: false,
            kind: PaymentKind::Crypto,
            config: PaymentSettings {
                wallet_address: Some(String::new()),
                network: Some("TRC20".to_string()),
                ..Default::default()
            },
        },
    ]
}
