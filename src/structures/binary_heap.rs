//! 可索引二叉堆模块
//!
//! 经典二叉小顶堆，额外维护"句柄 → 当前槽位"索引表。
//! 插入返回稳定句柄，元素在堆内换位时索引表同步更新，
//! 因此可以按句柄删除任意元素后重插——这是 Dijkstra
//! 最短路径中 decrease-key 操作的基础。

use crate::core::error::{AlgoError, AlgoResult};

/// 空闲槽位标记
const FREE_SLOT: usize = usize::MAX;

/// 堆元素的稳定句柄。
///
/// 插入时返回，元素被移除前始终有效；元素移除后其句柄编号
/// 会被回收复用，持有过期句柄属于调用方错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapHandle(usize);

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    handle: usize,
}

/// 可索引二叉小顶堆
#[derive(Debug, Clone)]
pub struct IndexableHeap<T> {
    entries: Vec<Entry<T>>,
    /// 句柄编号 → 堆内槽位
    slots: Vec<usize>,
    /// 可复用的句柄编号
    free: Vec<usize>,
    autoshrink: bool,
}

impl<T: Ord> IndexableHeap<T> {
    /// 创建空堆，默认开启自动收缩
    pub fn new() -> Self {
        Self::with_capacity(2, true)
    }

    /// 按初始容量创建空堆。
    /// `autoshrink` 为 true 时，元素数量降到容量四分之一及以下
    /// 会把底层数组收缩一半。
    pub fn with_capacity(capacity: usize, autoshrink: bool) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.max(2)),
            slots: Vec::new(),
            free: Vec::new(),
            autoshrink,
        }
    }

    /// 堆内元素数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 堆是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 当前底层容量
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// 插入一个元素，返回其稳定句柄
    pub fn insert(&mut self, value: T) -> HeapHandle {
        let handle = self.alloc_handle();
        let position = self.entries.len();
        self.entries.push(Entry { value, handle });
        self.slots[handle] = position;
        self.sift_up(position);
        HeapHandle(handle)
    }

    /// 查看最小元素但不移除
    pub fn find_min(&self) -> AlgoResult<&T> {
        self.entries
            .first()
            .map(|entry| &entry.value)
            .ok_or(AlgoError::Empty("IndexableHeap"))
    }

    /// 移除并返回最小元素。
    /// 存在多个相等的最小元素时，返回其中任意一个。
    pub fn extract_min(&mut self) -> AlgoResult<T> {
        self.remove_at(0)
    }

    /// 按堆内槽位移除任意元素。
    /// 与末尾元素交换后收缩，被换入的元素向破坏堆序的方向下沉，
    /// 若比新父节点还小则改为上浮。
    pub fn remove_at(&mut self, index: usize) -> AlgoResult<T> {
        if self.entries.is_empty() {
            return Err(AlgoError::Empty("IndexableHeap"));
        }
        if index >= self.entries.len() {
            return Err(AlgoError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        let entry = self.entries.swap_remove(index);
        self.slots[entry.handle] = FREE_SLOT;
        self.free.push(entry.handle);
        if index < self.entries.len() {
            self.record_slot(index);
            let settled = self.sift_down(index);
            if settled == index {
                self.sift_up(index);
            }
        }
        if self.autoshrink {
            self.shrink_if_sparse();
        }
        Ok(entry.value)
    }

    /// 按句柄移除任意元素
    pub fn remove(&mut self, handle: HeapHandle) -> AlgoResult<T> {
        let position = self
            .position_of(handle)
            .ok_or_else(|| AlgoError::NotFound(format!("堆句柄 {}", handle.0)))?;
        self.remove_at(position)
    }

    /// 查询句柄对应元素当前所在的槽位
    pub fn position_of(&self, handle: HeapHandle) -> Option<usize> {
        self.slots
            .get(handle.0)
            .copied()
            .filter(|&position| position != FREE_SLOT)
    }

    fn parent(index: usize) -> usize {
        (index - 1) / 2
    }

    fn left_child(index: usize) -> usize {
        index * 2 + 1
    }

    fn alloc_handle(&mut self) -> usize {
        match self.free.pop() {
            Some(handle) => handle,
            None => {
                self.slots.push(FREE_SLOT);
                self.slots.len() - 1
            }
        }
    }

    /// 把槽位 position 上元素的当前位置写回索引表
    fn record_slot(&mut self, position: usize) {
        let handle = self.entries[position].handle;
        self.slots[handle] = position;
    }

    fn swap_entries(&mut self, first: usize, second: usize) {
        self.entries.swap(first, second);
        self.record_slot(first);
        self.record_slot(second);
    }

    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = Self::parent(position);
            if self.entries[position].value < self.entries[parent].value {
                self.swap_entries(position, parent);
                position = parent;
            } else {
                break;
            }
        }
        position
    }

    fn sift_down(&mut self, mut position: usize) -> usize {
        while let Some(child) = self.min_child(position) {
            if self.entries[child].value < self.entries[position].value {
                self.swap_entries(position, child);
                position = child;
            } else {
                break;
            }
        }
        position
    }

    fn min_child(&self, position: usize) -> Option<usize> {
        let left = Self::left_child(position);
        if left >= self.entries.len() {
            return None;
        }
        let right = left + 1;
        if right < self.entries.len() && self.entries[right].value < self.entries[left].value {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.entries.capacity();
        if capacity > 2 && self.entries.len() <= capacity / 4 {
            self.entries.shrink_to(capacity / 2);
        }
    }
}

impl<T: Ord> Default for IndexableHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for IndexableHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for item in iter {
            heap.insert(item);
        }
        heap
    }
}
