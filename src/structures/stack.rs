//! 栈模块
//!
//! 基于可变长数组的经典栈实现。容量不足时翻倍扩容，
//! 元素数量降到容量四分之一及以下时减半收缩，
//! 扩缩容代价按摊还计为 O(1)。

use crate::core::error::{AlgoError, AlgoResult};

/// 经典数组栈
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// 创建空栈，初始容量为 2
    pub fn new() -> Self {
        Self::with_capacity(2)
    }

    /// 按指定初始容量创建空栈
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.max(2)),
        }
    }

    /// 栈内元素数量
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 栈是否为空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 当前底层容量
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// 压入一个元素
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// 查看栈顶元素但不移除
    pub fn peek(&self) -> AlgoResult<&T> {
        self.items.last().ok_or(AlgoError::Empty("Stack"))
    }

    /// 弹出栈顶元素
    pub fn pop(&mut self) -> AlgoResult<T> {
        let item = self.items.pop().ok_or(AlgoError::Empty("Stack"))?;
        self.shrink_if_sparse();
        Ok(item)
    }

    /// 清空栈并释放多余内存
    pub fn clear(&mut self) {
        self.items.clear();
        self.items.shrink_to(2);
    }

    /// 从栈顶到栈底迭代
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.items.capacity();
        if capacity > 2 && self.items.len() <= capacity / 4 {
            self.items.shrink_to(capacity / 2);
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop().expect("Pop should succeed in test"), 3);
        assert_eq!(stack.pop().expect("Pop should succeed in test"), 2);
        assert_eq!(stack.pop().expect("Pop should succeed in test"), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push("a");
        assert_eq!(*stack.peek().expect("Peek should succeed in test"), "a");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_empty_errors() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(AlgoError::Empty("Stack")));
        assert_eq!(stack.peek(), Err(AlgoError::Empty("Stack")));
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        let items: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn test_shrink_after_mass_pop() {
        let mut stack: Stack<i32> = (0..64).collect();
        let grown = stack.capacity();
        for _ in 0..60 {
            stack.pop().expect("Pop should succeed in test");
        }
        assert!(stack.capacity() < grown);
        assert_eq!(stack.len(), 4);
    }
}
