//! 二分查找模块
//!
//! 在已排序数组上查找，支持三种边界选项：精确匹配、
//! 第一个大于等于目标的位置、最后一个小于等于目标的位置。
//! 传入未排序数组时结果不可预测。

use std::cmp::Ordering;

/// 查找边界选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBound {
    /// 精确匹配，不存在时返回 None
    Exact,
    /// 第一个大于等于目标的位置
    EqOrGreater,
    /// 最后一个小于等于目标的位置
    EqOrLess,
}

/// 二分查找结构体
pub struct BinarySearch;

impl BinarySearch {
    /// 在已排序切片中按边界选项查找目标
    pub fn find<T: Ord>(items: &[T], target: &T, bound: SearchBound) -> Option<usize> {
        Self::find_by(items, |item| item.cmp(target), bound)
    }

    /// 按比较器查找。`compare` 返回元素相对目标的次序，
    /// 用于在元素与目标类型不同的场合（如按键对查边）复用查找逻辑。
    pub fn find_by<T, F>(items: &[T], mut compare: F, bound: SearchBound) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        if items.is_empty() {
            return None;
        }
        // 求第一个不小于目标的位置（partition point）
        let mut low = 0usize;
        let mut high = items.len();
        while low < high {
            let middle = low + (high - low) / 2;
            if compare(&items[middle]) == Ordering::Less {
                low = middle + 1;
            } else {
                high = middle;
            }
        }
        match bound {
            SearchBound::Exact => {
                if low < items.len() && compare(&items[low]) == Ordering::Equal {
                    Some(low)
                } else {
                    None
                }
            }
            SearchBound::EqOrGreater => {
                if low < items.len() {
                    Some(low)
                } else {
                    None
                }
            }
            SearchBound::EqOrLess => {
                if low < items.len() && compare(&items[low]) == Ordering::Equal {
                    Some(low)
                } else if low > 0 {
                    Some(low - 1)
                } else {
                    None
                }
            }
        }
    }
}
