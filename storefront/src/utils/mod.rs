//! 工具模块 - 通用工具函数
//!
//! - [`logger`] - tracing 日志初始化
//! - [`money`] - 金额精确计算 (rust_decimal)

pub mod logger;
pub mod money;

pub use shared::{AppError, AppResult, ErrorCode};
