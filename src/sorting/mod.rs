//! 排序模块
//!
//! 包含快速排序与归并排序（带逆序对统计）实现

pub mod merge_sort;
pub mod quick_sort;

pub use merge_sort::MergeSort;
pub use quick_sort::{PivotChoice, QuickSort};
