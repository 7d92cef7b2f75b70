//! 查找模块
//!
//! 包含带边界选项的二分查找实现

pub mod binary_search;

pub use binary_search::{BinarySearch, SearchBound};
