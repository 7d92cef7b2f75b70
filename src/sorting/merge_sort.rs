//! 归并排序模块
//!
//! 自顶向下归并排序，排序的同时统计输入中的逆序对总数。
//! 每当右半区元素先于左半区剩余元素落位，
//! 左半区剩余的元素个数即为新增的逆序对数。

/// 归并排序结构体
pub struct MergeSort;

impl MergeSort {
    /// 原地排序并返回输入中的逆序对总数
    pub fn sort<T: Ord + Clone>(arr: &mut [T]) -> u64 {
        if arr.len() < 2 {
            return 0;
        }
        let middle = arr.len() / 2;
        let mut inversions;
        {
            let (left, right) = arr.split_at_mut(middle);
            inversions = Self::sort(left);
            inversions += Self::sort(right);
        }
        inversions + Self::merge(arr, middle)
    }

    fn merge<T: Ord + Clone>(arr: &mut [T], middle: usize) -> u64 {
        let left: Vec<T> = arr[..middle].to_vec();
        let right: Vec<T> = arr[middle..].to_vec();
        let mut inversions = 0u64;
        let mut i = 0;
        let mut j = 0;
        for slot in arr.iter_mut() {
            if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
                *slot = left[i].clone();
                i += 1;
            } else {
                *slot = right[j].clone();
                j += 1;
                inversions += (left.len() - i) as u64;
            }
        }
        inversions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_array() {
        let mut arr = [64, 34, 25, 12, 22, 11, 90];
        MergeSort::sort(&mut arr);
        assert_eq!(arr, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn test_inversion_count_fixture() {
        // (3,2) (5,2) (5,4) 共 3 个逆序对
        let mut arr = [1, 3, 5, 2, 4, 6];
        assert_eq!(MergeSort::sort(&mut arr), 3);
        assert_eq!(arr, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_inversion_count_extremes() {
        let mut sorted = [1, 2, 3, 4, 5];
        assert_eq!(MergeSort::sort(&mut sorted), 0);

        // 完全倒序：C(5, 2) = 10 个逆序对
        let mut reversed = [5, 4, 3, 2, 1];
        assert_eq!(MergeSort::sort(&mut reversed), 10);
        assert_eq!(reversed, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stable_with_duplicates() {
        let mut arr = [2, 1, 2, 1];
        // 逆序对: (2,1) (2,1) (2,1) 共 3 个（相等元素不计）
        assert_eq!(MergeSort::sort(&mut arr), 3);
        assert_eq!(arr, [1, 1, 2, 2]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        assert_eq!(MergeSort::sort(&mut empty), 0);

        let mut single = [9];
        assert_eq!(MergeSort::sort(&mut single), 0);
    }
}
