//! AlgoKit - 经典数据结构与图算法库
//!
//! 提供教学用途的经典数据结构（栈、队列、可索引二叉堆）、
//! 排序与查找算法，以及有向/无向图及其上的遍历、强连通分量、
//! 边收缩与 Dijkstra 最短路径实现。
//!
//! 所有结构均为单线程、内存内、确定性实现，不涉及并发与持久化。

pub mod core;
pub mod graph;
pub mod search;
pub mod sorting;
pub mod structures;

pub use crate::core::error::{AlgoError, AlgoResult};
