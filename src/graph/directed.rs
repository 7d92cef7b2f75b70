//! 有向图模块
//!
//! 每条逻辑边对应存储中的一条半边。
//! 提供 Kosaraju 两趟 DFS 强连通分量算法。

use std::fmt::Debug;

use crate::core::error::AlgoResult;
use crate::graph::base::{Graph, GraphBase, Vertex};
use crate::structures::Stack;

/// 有向图
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<K> {
    base: GraphBase<K>,
}

impl<K: Ord + Clone + Debug> DirectedGraph<K> {
    /// 创建空的有向图
    pub fn new() -> Self {
        Self {
            base: GraphBase::new(),
        }
    }

    /// 从 (源, 终, 权重) 三元组批量建图
    pub fn from_edges(edges: &[(K, K, i64)]) -> AlgoResult<Self> {
        let mut graph = Self::new();
        for (source, dest, weight) in edges {
            graph.add_edge_weighted(source, dest, *weight)?;
        }
        Ok(graph)
    }

    /// Kosaraju 强连通分量。
    /// 先把边反转并做第一趟 DFS，按完成时间把顶点压栈；
    /// 把边转回去后按出栈顺序做第二趟 DFS，每一轮覆盖到的
    /// 顶点构成一个分量，分量编号写入各顶点的 secondary_order。
    /// 过程要求边表保持有序，内部会强制 enforce_order。
    /// 返回分量总数。
    pub fn find_strongly_connected_components(&mut self) -> AlgoResult<usize> {
        self.base.set_enforce_order(true);
        self.base.reset_traversal();
        self.base.reverse_edges();

        let mut finish_stack: Stack<K> = Stack::new();
        let roots: Vec<K> = self
            .base
            .vertices()
            .iter()
            .map(|v| v.key().clone())
            .collect();
        for root in &roots {
            if !self.base.try_get_vertex(root)?.visited {
                let mut on_finish = |v: &mut Vertex<K>| finish_stack.push(v.key().clone());
                self.base
                    .depth_first_search(root, None, Some(&mut on_finish))?;
            }
        }

        self.base.reverse_edges();
        self.base.reset_traversal();

        let mut components = 0i64;
        while !finish_stack.is_empty() {
            let root = finish_stack.pop()?;
            if self.base.try_get_vertex(&root)?.visited {
                continue;
            }
            let component_id = components;
            let mut on_visit = |v: &mut Vertex<K>| v.secondary_order = component_id;
            self.base
                .depth_first_search(&root, Some(&mut on_visit), None)?;
            log::debug!("强连通分量 {} 标记完成", component_id);
            components += 1;
        }
        Ok(components as usize)
    }
}

impl<K: Ord + Clone + Debug> Graph<K> for DirectedGraph<K> {
    fn base(&self) -> &GraphBase<K> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GraphBase<K> {
        &mut self.base
    }

    fn add_edge_weighted(&mut self, first: &K, second: &K, weight: i64) -> AlgoResult<()> {
        self.base.insert_half_edge(first, second, weight)?;
        Ok(())
    }

    fn remove_edge(&mut self, first: &K, second: &K) -> AlgoResult<()> {
        self.base.remove_half_edge(first, second)?;
        Ok(())
    }
}
