//! 无向图模块
//!
//! 每条逻辑边在存储中展开为一对互逆半边，两条半边同权。
//! 提供保持总权重不变的边收缩操作（Karger 最小割的基本步骤）。

use std::fmt::Debug;

use crate::core::error::{AlgoError, AlgoResult};
use crate::graph::base::{Graph, GraphBase};

/// 无向图
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph<K> {
    base: GraphBase<K>,
}

impl<K: Ord + Clone + Debug> UndirectedGraph<K> {
    /// 创建空的无向图
    pub fn new() -> Self {
        Self {
            base: GraphBase::new(),
        }
    }

    /// 从 (端点, 端点, 权重) 三元组批量建图
    pub fn from_edges(edges: &[(K, K, i64)]) -> AlgoResult<Self> {
        let mut graph = Self::new();
        for (first, second, weight) in edges {
            graph.add_edge_weighted(first, second, *weight)?;
        }
        Ok(graph)
    }

    /// 收缩一条边：键较大的端点并入键较小的端点。
    /// 被并入顶点的所有邻接边改接到保留顶点，两点之间的边消失，
    /// 平行边通过权重累加合并，最后删除被并入的顶点并重新排序。
    /// 除被收缩边外每条幸存边的权重保持不变。
    pub fn contraction(&mut self, first: &K, second: &K) -> AlgoResult<()> {
        if first == second {
            return Err(AlgoError::InvalidArgument(format!(
                "收缩的两个端点相同: {:?}",
                first
            )));
        }
        if self.base.get_edge(first, second).is_none() {
            return Err(AlgoError::NotFound(format!(
                "边 ({:?}, {:?})",
                first, second
            )));
        }
        let (kept, merged) = if first < second {
            (first.clone(), second.clone())
        } else {
            (second.clone(), first.clone())
        };

        // 以 source < dest 的半边为逻辑边代表收集整张图，
        // 重映射被并入的端点后重建边表
        let mut logical: Vec<(K, K, i64)> = Vec::new();
        for edge in self.base.edges() {
            if edge.source() >= edge.dest() {
                continue;
            }
            let one = if *edge.source() == merged {
                kept.clone()
            } else {
                edge.source().clone()
            };
            let other = if *edge.dest() == merged {
                kept.clone()
            } else {
                edge.dest().clone()
            };
            if one == other {
                // 收缩边本身以及由此产生的自环被丢弃
                continue;
            }
            logical.push((one, other, edge.weight()));
        }
        self.base.rebuild_half_edges(logical)?;
        self.base.remove_vertex(&merged);
        self.base.set_enforce_order(true);
        Ok(())
    }

    /// 全图逻辑边的总权重
    pub fn total_weight(&self) -> i64 {
        let half_sum: i64 = self.base.edges().iter().map(|e| e.weight()).sum();
        half_sum / 2
    }
}

impl<K: Ord + Clone + Debug> Graph<K> for UndirectedGraph<K> {
    fn base(&self) -> &GraphBase<K> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GraphBase<K> {
        &mut self.base
    }

    fn add_edge_weighted(&mut self, first: &K, second: &K, weight: i64) -> AlgoResult<()> {
        self.base.insert_half_edge(first, second, weight)?;
        self.base.insert_half_edge(second, first, weight)?;
        Ok(())
    }

    fn remove_edge(&mut self, first: &K, second: &K) -> AlgoResult<()> {
        self.base.remove_half_edge(first, second)?;
        self.base.remove_half_edge(second, first)?;
        Ok(())
    }

    fn edges_count(&self) -> usize {
        self.base.edges().len() / 2
    }
}
