//! 核心模块
//!
//! 包含统一错误处理

pub mod error;

pub use error::{AlgoError, AlgoResult};
