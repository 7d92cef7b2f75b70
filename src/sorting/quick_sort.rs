//! 快速排序模块
//!
//! 原地快速排序，支持四种主元选择策略，
//! 返回分区过程中的比较次数作为工作量度量。

use rand::Rng;

/// 主元选择策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotChoice {
    /// 总是取区间首元素
    AlwaysFirst,
    /// 总是取区间末元素
    AlwaysLast,
    /// 首、中、末三数取中
    Median,
    /// 随机选取
    Random,
}

/// 快速排序结构体
pub struct QuickSort;

impl QuickSort {
    /// 原地排序，返回比较次数
    pub fn sort<T: Ord>(arr: &mut [T], choice: PivotChoice) -> usize {
        if arr.len() < 2 {
            return 0;
        }
        let mut rng = rand::thread_rng();
        Self::sort_range(arr, choice, &mut rng)
    }

    fn sort_range<T: Ord, R: Rng>(arr: &mut [T], choice: PivotChoice, rng: &mut R) -> usize {
        let len = arr.len();
        if len < 2 {
            return 0;
        }
        let pivot_index = match choice {
            PivotChoice::AlwaysFirst => 0,
            PivotChoice::AlwaysLast => len - 1,
            PivotChoice::Median => Self::median_of_three(arr),
            PivotChoice::Random => rng.gen_range(0..len),
        };
        let pivot_position = Self::partition(arr, pivot_index);
        // 分区本身对除主元外的每个元素各比较一次
        let mut comparisons = len - 1;
        let (left, right) = arr.split_at_mut(pivot_position);
        comparisons += Self::sort_range(left, choice, rng);
        comparisons += Self::sort_range(&mut right[1..], choice, rng);
        comparisons
    }

    /// 三数取中：返回首、中、末三个元素中值居中者的下标
    fn median_of_three<T: Ord>(arr: &[T]) -> usize {
        let middle = arr.len() / 2;
        let last = arr.len() - 1;
        if (arr[0] < arr[middle] && arr[middle] < arr[last])
            || (arr[last] < arr[middle] && arr[middle] < arr[0])
        {
            middle
        } else if (arr[middle] < arr[0] && arr[0] < arr[last])
            || (arr[last] < arr[0] && arr[0] < arr[middle])
        {
            0
        } else {
            last
        }
    }

    /// Lomuto 式分区：主元换到区间首位，扫描后落到最终位置
    fn partition<T: Ord>(arr: &mut [T], pivot_index: usize) -> usize {
        arr.swap(0, pivot_index);
        let mut less = 0;
        for scanned in 1..arr.len() {
            if arr[scanned] < arr[0] {
                less += 1;
                arr.swap(less, scanned);
            }
        }
        arr.swap(0, less);
        less
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: [PivotChoice; 4] = [
        PivotChoice::AlwaysFirst,
        PivotChoice::AlwaysLast,
        PivotChoice::Median,
        PivotChoice::Random,
    ];

    #[test]
    fn test_sorts_with_every_pivot_choice() {
        for choice in CHOICES {
            let mut arr = [64, 34, 25, 12, 22, 11, 90];
            QuickSort::sort(&mut arr, choice);
            assert_eq!(arr, [11, 12, 22, 25, 34, 64, 90]);
        }
    }

    #[test]
    fn test_sorts_with_duplicates() {
        for choice in CHOICES {
            let mut arr = [3, 1, 3, 2, 1, 3];
            QuickSort::sort(&mut arr, choice);
            assert_eq!(arr, [1, 1, 2, 3, 3, 3]);
        }
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        let mut sorted = [1, 2, 3, 4, 5];
        QuickSort::sort(&mut sorted, PivotChoice::Median);
        assert_eq!(sorted, [1, 2, 3, 4, 5]);

        let mut reversed = [5, 4, 3, 2, 1];
        QuickSort::sort(&mut reversed, PivotChoice::AlwaysFirst);
        assert_eq!(reversed, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        assert_eq!(QuickSort::sort(&mut empty, PivotChoice::Random), 0);

        let mut single = [7];
        assert_eq!(QuickSort::sort(&mut single, PivotChoice::Random), 0);
        assert_eq!(single, [7]);
    }

    #[test]
    fn test_comparison_count_positive() {
        let mut arr = [4, 2, 6, 1];
        let comparisons = QuickSort::sort(&mut arr, PivotChoice::AlwaysFirst);
        assert!(comparisons >= arr.len() - 1);
    }
}
