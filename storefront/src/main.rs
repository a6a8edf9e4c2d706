use std::sync::Arc;
use storefront::{AppState, Config, RedbStore, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!("TechCase Pro storefront starting...");

    // 2. 加载配置
    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    let db_path = config.db_path();

    // 3. 打开存储并加载 store
    let kv = Arc::new(RedbStore::open(&db_path)?);
    let state = AppState::new(kv, config)?;

    let catalog = state.catalog.read();
    let active: Vec<&str> = catalog
        .active_payment_methods()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    tracing::info!(
        db = %db_path.display(),
        products = catalog.products().len(),
        categories = catalog.categories().len(),
        sellers = catalog.sellers().len(),
        sales = catalog.sales().len(),
        revenue = catalog.revenue(),
        "Store ready"
    );
    tracing::info!(methods = ?active, "Active payment methods");

    let online = catalog.sales().iter().filter(|s| s.is_online()).count();
    let units: i64 = catalog.sales().iter().map(|s| s.item_count()).sum();
    tracing::info!(
        online,
        in_store = catalog.sales().len() - online,
        units,
        "Sales history"
    );

    let cart = state.cart.read();
    tracing::info!(
        lines = cart.items().len(),
        count = cart.cart_count(),
        total = cart.cart_total(),
        "Cart restored"
    );
    if let Some(user) = state.current_user() {
        tracing::info!(username = %user.username, role = %user.role, "Session active");
    }

    Ok(())
}
