//! TechCase Pro Storefront - 电商店面核心
//!
//! # 架构概述
//!
//! 商品目录、购物车、结账与门店收银，所有状态以 JSON 快照形式持久化到
//! 本地 KV 存储：
//!
//! - **目录与销售** (`catalog`): 商品、分类、销售员、销售记录、支付配置
//! - **购物车** (`cart`): 顾客购物车
//! - **认证** (`auth`): 凭证校验 + 会话
//! - **结账** (`checkout`): 表单校验 + 可取消的支付任务
//! - **收银** (`pos`): 销售员门店销售
//! - **打印** (`printing`): 文本小票
//! - **存储** (`storage`): redb / 内存 KV
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置、状态、事件
//! ├── catalog/       # 目录与销售 store + 默认数据
//! ├── cart/          # 购物车 store
//! ├── auth/          # 凭证、会话
//! ├── checkout/      # 结账
//! ├── pos/           # 门店收银
//! ├── printing/      # 小票
//! ├── storage/       # KV 持久化
//! └── utils/         # 日志、金额
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod pos;
pub mod printing;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use auth::{CredentialVerifier, DemoCredentials, HashedCredentials, SessionStore};
pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use checkout::{CheckoutError, CheckoutForm, PaymentOutcome};
pub use core::{AppState, Config, EventBus, StoreEvent};
pub use pos::PosSession;
pub use storage::{KvStore, MemoryStore, RedbStore};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then initialize logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  _____         _      ____                 ____
 |_   _|__  ___| |__  / ___|__ _ ___  ___  |  _ \ _ __ ___
   | |/ _ \/ __| '_ \| |   / _` / __|/ _ \ | |_) | '__/ _ \
   | |  __/ (__| | | | |__| (_| \__ \  __/ |  __/| | | (_) |
   |_|\___|\___|_| |_|\____\__,_|___/\___| |_|   |_|  \___/
    "#
    );
}
