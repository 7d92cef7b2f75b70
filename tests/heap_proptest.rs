use algokit::structures::{HeapHandle, IndexableHeap};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Operation {
    Insert(i32),
    ExtractMin,
    RemoveAt(usize),
    RemoveByHandle(usize),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i32>().prop_map(Operation::Insert),
        1 => Just(Operation::ExtractMin),
        1 => any::<usize>().prop_map(Operation::RemoveAt),
        1 => any::<usize>().prop_map(Operation::RemoveByHandle),
    ]
}

fn drain_sorted(heap: &mut IndexableHeap<i32>) -> Vec<i32> {
    let mut drained = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        drained.push(heap.extract_min().expect("Extract should succeed in test"));
    }
    drained
}

proptest! {
    #[test]
    fn test_extract_min_drains_in_sorted_order(values in proptest::collection::vec(any::<i32>(), 0..64)) {
        let mut heap: IndexableHeap<i32> = values.iter().copied().collect();
        let drained = drain_sorted(&mut heap);
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn test_heap_matches_multiset_model(ops in proptest::collection::vec(operation_strategy(), 1..100)) {
        let mut heap: IndexableHeap<i32> = IndexableHeap::new();
        // 模型：当前存活的元素多重集，以及存活句柄表
        let mut model: Vec<i32> = Vec::new();
        let mut live_handles: Vec<(HeapHandle, i32)> = Vec::new();

        for op in ops {
            match op {
                Operation::Insert(value) => {
                    let handle = heap.insert(value);
                    model.push(value);
                    live_handles.push((handle, value));
                }
                Operation::ExtractMin => {
                    if model.is_empty() {
                        prop_assert!(heap.extract_min().is_err());
                    } else {
                        let extracted = heap.extract_min().expect("Extract should succeed in test");
                        let expected = *model.iter().min().expect("Model should be non-empty in test");
                        prop_assert_eq!(extracted, expected);
                        let position = model.iter().position(|&v| v == extracted)
                            .expect("Extracted value should be in model in test");
                        model.swap_remove(position);
                        retire_one(&mut live_handles, &heap, extracted);
                    }
                }
                Operation::RemoveAt(raw) => {
                    if !model.is_empty() {
                        let index = raw % heap.len();
                        let removed = heap.remove_at(index).expect("Remove should succeed in test");
                        let position = model.iter().position(|&v| v == removed)
                            .expect("Removed value should be in model in test");
                        model.swap_remove(position);
                        retire_one(&mut live_handles, &heap, removed);
                    }
                }
                Operation::RemoveByHandle(raw) => {
                    if !live_handles.is_empty() {
                        let (handle, value) = live_handles[raw % live_handles.len()];
                        let removed = heap.remove(handle).expect("Remove should succeed in test");
                        prop_assert_eq!(removed, value);
                        let position = model.iter().position(|&v| v == removed)
                            .expect("Removed value should be in model in test");
                        model.swap_remove(position);
                        retire_one(&mut live_handles, &heap, removed);
                    }
                }
            }
            prop_assert_eq!(heap.len(), model.len());
            if let Ok(min) = heap.find_min() {
                prop_assert_eq!(Some(min), model.iter().min());
            }
        }

        let drained = drain_sorted(&mut heap);
        model.sort();
        prop_assert_eq!(drained, model);
    }

    #[test]
    fn test_handles_stay_valid_across_churn(values in proptest::collection::vec(any::<i32>(), 1..48)) {
        let mut heap: IndexableHeap<i32> = IndexableHeap::new();
        let mut handle_of: HashMap<usize, (HeapHandle, i32)> = HashMap::new();
        for (serial, value) in values.iter().copied().enumerate() {
            handle_of.insert(serial, (heap.insert(value), value));
        }
        // 隔一个删一个，剩余句柄必须仍指向各自的元素
        for serial in (0..values.len()).step_by(2) {
            let (handle, value) = handle_of.remove(&serial).expect("Handle should exist in test");
            prop_assert_eq!(heap.remove(handle), Ok(value));
        }
        for (handle, value) in handle_of.values() {
            let position = heap.position_of(*handle).expect("Live handle should resolve in test");
            prop_assert!(position < heap.len());
            prop_assert_eq!(heap.remove(*handle), Ok(*value));
        }
        prop_assert!(heap.is_empty());
    }
}

/// 从存活句柄表里剔除一个值等于 removed 的条目。
/// 值可能重复，句柄无法唯一定位被删元素，
/// 保守策略是剔除第一个已失效的同值句柄。
fn retire_one(live_handles: &mut Vec<(HeapHandle, i32)>, heap: &IndexableHeap<i32>, removed: i32) {
    if let Some(position) = live_handles
        .iter()
        .position(|(handle, value)| *value == removed && heap.position_of(*handle).is_none())
    {
        live_handles.swap_remove(position);
    }
}
