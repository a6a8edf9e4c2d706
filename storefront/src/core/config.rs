use shared::models::StoreInfo;
use std::path::PathBuf;
use std::time::Duration;

/// 店面配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | DB_FILE | techcase.redb | 数据库文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录，设置后写入滚动文件 |
/// | PAYMENT_DELAY_MS | 1500 | 模拟支付处理延迟 |
/// | ADMIN_USERNAME | admin | 管理员用户名 |
/// | ADMIN_PASSWORD | admin123 | 管理员密码 |
/// | SELLER_PASSWORD | 123 | 销售员共享密码 |
/// | STORE_NAME | TechCase Pro | 小票抬头 |
/// | STORE_ADDRESS | Av. Paulista, 1000 - São Paulo, SP | 小票地址 |
/// | STORE_CNPJ | 00.000.000/0001-00 | 小票税号 |
/// | RECEIPT_WIDTH | 42 | 小票字符宽度 |
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub db_file: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Simulated payment processing delay (milliseconds)
    pub payment_delay_ms: u64,
    pub admin_username: String,
    pub admin_password: String,
    /// Shared password for every seller account (demo only)
    pub seller_password: String,
    pub store: StoreInfo,
    pub receipt_width: usize,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let store_defaults = StoreInfo::default();
        Self {
            work_dir: env_or("WORK_DIR", "./data"),
            db_file: env_or("DB_FILE", "techcase.redb"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok(),
            payment_delay_ms: env_parse("PAYMENT_DELAY_MS", 1500),
            admin_username: env_or("ADMIN_USERNAME", "admin"),
            admin_password: env_or("ADMIN_PASSWORD", "admin123"),
            seller_password: env_or("SELLER_PASSWORD", "123"),
            store: StoreInfo {
                name: env_or("STORE_NAME", &store_defaults.name),
                address: env_or("STORE_ADDRESS", &store_defaults.address),
                cnpj: env_or("STORE_CNPJ", &store_defaults.cnpj),
            },
            receipt_width: env_parse("RECEIPT_WIDTH", 42),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, payment_delay_ms: u64) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.payment_delay_ms = payment_delay_ms;
        config
    }

    /// Full path of the redb database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
