//! 数据结构模块
//!
//! 包含栈、队列与可索引二叉堆实现

pub mod binary_heap;
pub mod queue;
pub mod stack;

pub use binary_heap::{HeapHandle, IndexableHeap};
pub use queue::Queue;
pub use stack::Stack;
