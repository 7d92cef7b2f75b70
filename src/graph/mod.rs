//! 图模块
//!
//! 包含有向图、无向图与 Dijkstra 最短路径图实现，
//! 以及基于显式栈/队列的深度优先与广度优先遍历。

pub mod base;
pub mod directed;
pub mod dijkstra;
pub mod undirected;

pub use base::{Edge, Graph, GraphBase, Vertex, VisitFn, INFINITE};
pub use directed::DirectedGraph;
pub use dijkstra::DijkstrasGraph;
pub use undirected::UndirectedGraph;
