//! Dijkstra 最短路径模块
//!
//! 在有向图上计算单源最短路径长度。堆里放的是边而不是顶点：
//! 每条边的优先级是"源点当前路径长度 + 边权"。顶点落定时，
//! 借助可索引堆的句柄把该顶点所有出边按新路径长度删除重插，
//! 等价于经典的 decrease-key。

use std::fmt::Debug;

use crate::core::error::{AlgoError, AlgoResult};
use crate::graph::base::{Graph, GraphBase, INFINITE};
use crate::graph::directed::DirectedGraph;
use crate::structures::{HeapHandle, IndexableHeap};

/// 堆内条目：一条候选边及其当前优先级。
/// 按优先级比较，同优先级时按边下标，保证全序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct EdgeEntry {
    priority: i64,
    edge_index: usize,
}

/// 带最短路径计算的有向图
#[derive(Debug, Clone, Default)]
pub struct DijkstrasGraph<K> {
    graph: DirectedGraph<K>,
}

impl<K: Ord + Clone + Debug> DijkstrasGraph<K> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            graph: DirectedGraph::new(),
        }
    }

    /// 从 (源, 终, 权重) 三元组批量建图
    pub fn from_edges(edges: &[(K, K, i64)]) -> AlgoResult<Self> {
        Ok(Self {
            graph: DirectedGraph::from_edges(edges)?,
        })
    }

    /// 计算从 start 出发到每个顶点的最短路径长度，
    /// 结果写入各顶点的 path_len。落定以 visited 标志记账，
    /// 不可达顶点保持 INFINITE。
    pub fn calc_path_len(&mut self, start: &K) -> AlgoResult<()> {
        let base = self.graph.base_mut();
        base.set_enforce_order(true);
        let start_index = base
            .vertex_index(start)
            .ok_or_else(|| AlgoError::NotFound(format!("顶点 {:?}", start)))?;
        for vertex in base.vertices_mut() {
            vertex.path_len = INFINITE;
            vertex.visited = false;
        }
        base.vertices_mut()[start_index].path_len = 0;
        base.vertices_mut()[start_index].visited = true;

        // 算法期间边表不变，快照一份避免反复查表
        let edges: Vec<(K, K, i64)> = base
            .edges()
            .iter()
            .map(|e| (e.source().clone(), e.dest().clone(), e.weight()))
            .collect();

        let mut heap: IndexableHeap<EdgeEntry> = IndexableHeap::with_capacity(edges.len(), false);
        let mut handles: Vec<HeapHandle> = Vec::with_capacity(edges.len());
        for (edge_index, (source, _, weight)) in edges.iter().enumerate() {
            let source_len = base.try_get_vertex(source)?.path_len;
            handles.push(heap.insert(EdgeEntry {
                priority: source_len + weight,
                edge_index,
            }));
        }

        while !heap.is_empty() {
            let entry = heap.extract_min()?;
            // 剩余候选全部经过未落定顶点，不可达部分到此为止
            if entry.priority >= INFINITE {
                break;
            }
            let dest = &edges[entry.edge_index].1;
            let dest_index = base
                .vertex_index(dest)
                .ok_or_else(|| AlgoError::NotFound(format!("顶点 {:?}", dest)))?;
            if base.vertices()[dest_index].visited {
                continue;
            }
            base.vertices_mut()[dest_index].visited = true;
            base.vertices_mut()[dest_index].path_len = entry.priority;
            log::debug!("顶点 {:?} 落定，路径长度 {}", dest, entry.priority);

            // 新落定顶点的出边按新路径长度删除重插
            for edge_index in base.outgoing(dest) {
                heap.remove(handles[edge_index])?;
                let weight = edges[edge_index].2;
                handles[edge_index] = heap.insert(EdgeEntry {
                    priority: entry.priority + weight,
                    edge_index,
                });
            }
        }
        Ok(())
    }

    /// 查询上一次 calc_path_len 得到的路径长度
    pub fn path_len(&self, key: &K) -> AlgoResult<i64> {
        Ok(self.graph.base().try_get_vertex(key)?.path_len)
    }
}

impl<K: Ord + Clone + Debug> Graph<K> for DijkstrasGraph<K> {
    fn base(&self) -> &GraphBase<K> {
        self.graph.base()
    }

    fn base_mut(&mut self) -> &mut GraphBase<K> {
        self.graph.base_mut()
    }

    fn add_edge_weighted(&mut self, first: &K, second: &K, weight: i64) -> AlgoResult<()> {
        self.graph.add_edge_weighted(first, second, weight)
    }

    fn remove_edge(&mut self, first: &K, second: &K) -> AlgoResult<()> {
        self.graph.remove_edge(first, second)
    }
}
