//! 小票打印
//!
//! 纯文本小票渲染，超宽文本自动换行。输出方式 (打印机、分享) 由调用方决定。

pub mod receipt;

pub use receipt::{ReceiptBuilder, render};
