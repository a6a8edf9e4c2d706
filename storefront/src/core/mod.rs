//! 核心模块
//!
//! - [`Config`] - 环境变量配置
//! - [`AppState`] - 依赖注入的 store 容器
//! - [`EventBus`] - store 变更广播

pub mod config;
pub mod events;
pub mod state;

pub use config::Config;
pub use events::{Action, EventBus, Resource, StoreEvent};
pub use state::AppState;
