//! 队列模块
//!
//! 基于环形缓冲区的经典队列实现，扩缩容策略与栈一致：
//! 满时翻倍，元素数量降到容量四分之一及以下时减半。

use crate::core::error::{AlgoError, AlgoResult};

/// 环形缓冲区队列
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: Vec<Option<T>>,
    first: usize,
    count: usize,
}

impl<T> Queue<T> {
    /// 创建空队列，初始容量为 2
    pub fn new() -> Self {
        Self::with_capacity(2)
    }

    /// 按指定初始容量创建空队列
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            items: (0..capacity).map(|_| None).collect(),
            first: 0,
            count: 0,
        }
    }

    /// 队列内元素数量
    pub fn len(&self) -> usize {
        self.count
    }

    /// 队列是否为空
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// 当前底层容量
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// 入队一个元素
    pub fn enqueue(&mut self, item: T) {
        if self.count == self.items.len() {
            self.resize(self.count * 2);
        }
        let position = (self.first + self.count) % self.items.len();
        self.items[position] = Some(item);
        self.count += 1;
    }

    /// 查看队首元素但不移除
    pub fn peek(&self) -> AlgoResult<&T> {
        self.items[self.first]
            .as_ref()
            .ok_or(AlgoError::Empty("Queue"))
    }

    /// 移除并返回队首元素
    pub fn dequeue(&mut self) -> AlgoResult<T> {
        let item = self.items[self.first]
            .take()
            .ok_or(AlgoError::Empty("Queue"))?;
        self.first = (self.first + 1) % self.items.len();
        self.count -= 1;
        if self.items.len() > 2 && self.count <= self.items.len() / 4 {
            self.resize(self.items.len() / 2);
        }
        Ok(item)
    }

    /// 清空队列并重置容量
    pub fn clear(&mut self) {
        self.items = (0..2).map(|_| None).collect();
        self.first = 0;
        self.count = 0;
    }

    /// 从队首到队尾迭代
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count)
            .filter_map(move |i| self.items[(self.first + i) % self.items.len()].as_ref())
    }

    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(2);
        let old_len = self.items.len();
        let mut items: Vec<Option<T>> = (0..capacity).map(|_| None).collect();
        for i in 0..self.count {
            items[i] = self.items[(self.first + i) % old_len].take();
        }
        self.items = items;
        self.first = 0;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        for item in iter {
            queue.enqueue(item);
        }
        queue
    }
}
