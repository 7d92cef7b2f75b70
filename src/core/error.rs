//! 统一错误处理 for AlgoKit
//!
//! 所有数据结构与图算法共用一个错误枚举，按失败类别分为四类：
//! 空结构访问、索引越界、实体未找到、非法操作。
//! 这些都属于调用方编程错误，不做任何内部重试或恢复，
//! 统一通过 `AlgoResult<T>` 立即向调用方传播。

use thiserror::Error;

/// 统一的算法库错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// 对空结构执行了取值或删除操作
    #[error("{0} 为空")]
    Empty(&'static str),

    /// 索引超出当前有效范围
    #[error("索引 {index} 越界（长度 {len}）")]
    IndexOutOfBounds { index: usize, len: usize },

    /// 要求存在的顶点、边或句柄不存在
    #[error("未找到: {0}")]
    NotFound(String),

    /// 参数非法（自环边、与自身收缩等）
    #[error("非法操作: {0}")]
    InvalidArgument(String),
}

/// 统一的返回类型别名
pub type AlgoResult<T> = Result<T, AlgoError>;
