//! 图基础模块
//!
//! 顶点表与边表的存储及排序不变量维护、基于显式栈/队列的
//! DFS/BFS 遍历，以及有向/无向图共用的 `Graph` trait。
//!
//! 两张表各带一个有序标志：破坏排序的插入清除对应标志，
//! `set_enforce_order(true)` 重排两张表并置位。查找操作在
//! 对应表有序时走二分查找，否则线性扫描。所有修改统一经由
//! 本结构的插入/删除方法，保证标志与数据一致。

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::core::error::{AlgoError, AlgoResult};
use crate::search::{BinarySearch, SearchBound};
use crate::structures::{Queue, Stack};

/// 路径长度的"无穷大"哨兵值。
/// 取 i64::MAX 的一半，保证与边权相加不会溢出。
pub const INFINITE: i64 = i64::MAX / 2;

/// 遍历回调，访问顶点时可修改其暂存字段
pub type VisitFn<'a, K> = &'a mut dyn FnMut(&mut Vertex<K>);

/// 图顶点。key 唯一且不可变；其余为算法暂存字段：
/// `visited` 是遍历标志，`secondary_order` 记录遍历序号或
/// 强连通分量编号，`path_len` 是 Dijkstra 路径长度。
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    key: K,
    pub visited: bool,
    pub secondary_order: i64,
    pub path_len: i64,
}

impl<K> Vertex<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            visited: false,
            secondary_order: 0,
            path_len: INFINITE,
        }
    }

    /// 顶点的键
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// 图边。端点以键的形式保存，顶点表重排不影响边表。
/// 重复添加同一对端点的边会累加权重而不是新建。
#[derive(Debug, Clone)]
pub struct Edge<K> {
    source: K,
    dest: K,
    weight: i64,
}

impl<K: Ord + Clone + Debug> Edge<K> {
    fn new(source: K, dest: K, weight: i64) -> AlgoResult<Self> {
        if source == dest {
            return Err(AlgoError::InvalidArgument(format!(
                "不允许自环边: {:?}",
                source
            )));
        }
        Ok(Self {
            source,
            dest,
            weight,
        })
    }

    /// 边的源点键
    pub fn source(&self) -> &K {
        &self.source
    }

    /// 边的终点键
    pub fn dest(&self) -> &K {
        &self.dest
    }

    /// 边的权重
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// 与 (source, dest) 键对按字典序比较
    fn cmp_pair(&self, pair: (&K, &K)) -> Ordering {
        self.source
            .cmp(pair.0)
            .then_with(|| self.dest.cmp(pair.1))
    }
}

/// 图的公共存储：顶点表、边表与各自的有序标志
#[derive(Debug, Clone)]
pub struct GraphBase<K> {
    vertices: Vec<Vertex<K>>,
    edges: Vec<Edge<K>>,
    vertices_sorted: bool,
    edges_sorted: bool,
}

impl<K> Default for GraphBase<K> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            vertices_sorted: true,
            edges_sorted: true,
        }
    }
}

impl<K: Ord + Clone + Debug> GraphBase<K> {
    /// 创建空图存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 顶点表的只读视图
    pub fn vertices(&self) -> &[Vertex<K>] {
        &self.vertices
    }

    /// 边表的只读视图
    pub fn edges(&self) -> &[Edge<K>] {
        &self.edges
    }

    /// 顶点数量
    pub fn vertices_count(&self) -> usize {
        self.vertices.len()
    }

    /// 两张表是否都处于有序状态
    pub fn enforce_order(&self) -> bool {
        self.vertices_sorted && self.edges_sorted
    }

    /// 置 true 时把未排序的表排好并置位有序标志；
    /// 置 false 只清除标志，不改动数据。
    pub fn set_enforce_order(&mut self, on: bool) {
        if on {
            if !self.vertices_sorted {
                self.vertices.sort_by(|a, b| a.key.cmp(&b.key));
                self.vertices_sorted = true;
            }
            if !self.edges_sorted {
                self.sort_edges();
                self.edges_sorted = true;
            }
        } else {
            self.vertices_sorted = false;
            self.edges_sorted = false;
        }
    }

    /// 按键查顶点下标。顶点表有序时二分，否则线性扫描。
    pub fn vertex_index(&self, key: &K) -> Option<usize> {
        if self.vertices_sorted {
            BinarySearch::find_by(&self.vertices, |v| v.key.cmp(key), SearchBound::Exact)
        } else {
            self.vertices.iter().position(|v| v.key == *key)
        }
    }

    /// 按端点键对查边下标。边表有序时二分；
    /// 无序时全量正向扫描并保留最后一个匹配。
    pub fn edge_index(&self, first: &K, second: &K) -> Option<usize> {
        if self.edges_sorted {
            BinarySearch::find_by(
                &self.edges,
                |e| e.cmp_pair((first, second)),
                SearchBound::Exact,
            )
        } else {
            let mut found = None;
            for (index, edge) in self.edges.iter().enumerate() {
                if edge.source == *first && edge.dest == *second {
                    found = Some(index);
                }
            }
            found
        }
    }

    /// 幂等添加顶点：键已存在时返回现有顶点的下标
    pub fn add_vertex(&mut self, key: K) -> usize {
        if let Some(index) = self.vertex_index(&key) {
            return index;
        }
        if let Some(last) = self.vertices.last() {
            if last.key > key {
                self.vertices_sorted = false;
            }
        }
        self.vertices.push(Vertex::new(key));
        self.vertices.len() - 1
    }

    /// 按键移除顶点；键不存在时不做任何事。
    /// 注意：不会清理关联的边（沿袭既有行为的已知限制）。
    pub fn remove_vertex(&mut self, key: &K) {
        if let Some(index) = self.vertex_index(key) {
            self.vertices.remove(index);
        }
    }

    /// 顶点是否存在
    pub fn vertex_exists(&self, key: &K) -> bool {
        self.vertex_index(key).is_some()
    }

    /// 按键取顶点
    pub fn get_vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.vertex_index(key).map(|index| &self.vertices[index])
    }

    /// 按键取顶点，不存在时返回 NotFound
    pub fn try_get_vertex(&self, key: &K) -> AlgoResult<&Vertex<K>> {
        self.get_vertex(key)
            .ok_or_else(|| AlgoError::NotFound(format!("顶点 {:?}", key)))
    }

    /// 按端点键对取边
    pub fn get_edge(&self, first: &K, second: &K) -> Option<&Edge<K>> {
        self.edge_index(first, second).map(|index| &self.edges[index])
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vertex<K>] {
        &mut self.vertices
    }

    /// 追加或累加一条有向半边（两种图共用的单一插入路径）。
    /// 先保证两个端点存在；端点相同报非法操作。
    pub(crate) fn insert_half_edge(
        &mut self,
        first: &K,
        second: &K,
        weight: i64,
    ) -> AlgoResult<usize> {
        self.add_vertex(first.clone());
        self.add_vertex(second.clone());
        if let Some(index) = self.edge_index(first, second) {
            self.edges[index].weight += weight;
            return Ok(index);
        }
        let edge = Edge::new(first.clone(), second.clone(), weight)?;
        if let Some(last) = self.edges.last() {
            if last.cmp_pair((first, second)) == Ordering::Greater {
                self.edges_sorted = false;
            }
        }
        self.edges.push(edge);
        Ok(self.edges.len() - 1)
    }

    /// 按端点键对移除一条半边，不存在时报 NotFound
    pub(crate) fn remove_half_edge(&mut self, first: &K, second: &K) -> AlgoResult<Edge<K>> {
        let index = self
            .edge_index(first, second)
            .ok_or_else(|| AlgoError::NotFound(format!("边 ({:?}, {:?})", first, second)))?;
        Ok(self.edges.remove(index))
    }

    /// 反转所有边的方向；若边表有序则重新排序以维持不变量
    pub(crate) fn reverse_edges(&mut self) {
        for edge in &mut self.edges {
            std::mem::swap(&mut edge.source, &mut edge.dest);
        }
        if self.edges_sorted {
            self.sort_edges();
        }
    }

    /// 用逻辑边列表重建整张边表，每条逻辑边展开成一对互逆半边
    pub(crate) fn rebuild_half_edges(&mut self, logical: Vec<(K, K, i64)>) -> AlgoResult<()> {
        self.edges.clear();
        self.edges_sorted = true;
        for (first, second, weight) in logical {
            self.insert_half_edge(&first, &second, weight)?;
            self.insert_half_edge(&second, &first, weight)?;
        }
        Ok(())
    }

    /// 以 key 为源点的所有边的下标快照。
    /// 边表有序时用两次二分探测求出连续区间：
    /// 第一条不小于 (key, 最小顶点键) 的边到最后一条
    /// 不大于 (key, 最大顶点键) 的边；否则线性过滤。
    pub fn outgoing(&self, key: &K) -> Vec<usize> {
        if self.edges_sorted {
            let (min_key, max_key) = match self.key_span() {
                Some(span) => span,
                None => return Vec::new(),
            };
            let low = BinarySearch::find_by(
                &self.edges,
                |e| e.cmp_pair((key, min_key)),
                SearchBound::EqOrGreater,
            );
            let high = BinarySearch::find_by(
                &self.edges,
                |e| e.cmp_pair((key, max_key)),
                SearchBound::EqOrLess,
            );
            match (low, high) {
                (Some(low), Some(high)) if low <= high => (low..=high).collect(),
                _ => Vec::new(),
            }
        } else {
            self.edges
                .iter()
                .enumerate()
                .filter(|(_, e)| e.source == *key)
                .map(|(index, _)| index)
                .collect()
        }
    }

    /// 以 key 为源点可直达的邻居顶点键快照
    pub fn nearest(&self, key: &K) -> Vec<K> {
        self.outgoing(key)
            .into_iter()
            .map(|index| self.edges[index].dest.clone())
            .collect()
    }

    /// 显式栈 DFS。入栈时标记已访问并调用 pre_visit；
    /// 每轮外循环重扫栈顶邻居，只压入找到的第一个未访问邻居；
    /// 栈顶没有未访问邻居时出栈并调用 post_visit。
    /// 邻居顺序跟随边表当前次序（有序或插入序）。
    pub fn depth_first_search(
        &mut self,
        start: &K,
        mut pre_visit: Option<VisitFn<'_, K>>,
        mut post_visit: Option<VisitFn<'_, K>>,
    ) -> AlgoResult<()> {
        let start_index = self
            .vertex_index(start)
            .ok_or_else(|| AlgoError::NotFound(format!("顶点 {:?}", start)))?;
        let mut stack: Stack<K> = Stack::new();
        self.visit(start_index, &mut pre_visit);
        stack.push(self.vertices[start_index].key.clone());
        while !stack.is_empty() {
            let top = stack.peek()?.clone();
            let next = self.nearest(&top).into_iter().find_map(|neighbor| {
                let index = self.vertex_index(&neighbor)?;
                (!self.vertices[index].visited).then_some(index)
            });
            match next {
                Some(index) => {
                    self.visit(index, &mut pre_visit);
                    stack.push(self.vertices[index].key.clone());
                }
                None => {
                    let key = stack.pop()?;
                    if let Some(post) = post_visit.as_mut() {
                        if let Some(index) = self.vertex_index(&key) {
                            post(&mut self.vertices[index]);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// 队列 BFS。入队时标记已访问并调用 pre_visit，
    /// 出队时调用 post_visit。
    pub fn breadth_first_search(
        &mut self,
        start: &K,
        mut pre_visit: Option<VisitFn<'_, K>>,
        mut post_visit: Option<VisitFn<'_, K>>,
    ) -> AlgoResult<()> {
        let start_index = self
            .vertex_index(start)
            .ok_or_else(|| AlgoError::NotFound(format!("顶点 {:?}", start)))?;
        let mut queue: Queue<K> = Queue::new();
        self.visit(start_index, &mut pre_visit);
        queue.enqueue(self.vertices[start_index].key.clone());
        while !queue.is_empty() {
            let current = queue.dequeue()?;
            for neighbor in self.nearest(&current) {
                if let Some(index) = self.vertex_index(&neighbor) {
                    if !self.vertices[index].visited {
                        self.visit(index, &mut pre_visit);
                        queue.enqueue(neighbor);
                    }
                }
            }
            if let Some(post) = post_visit.as_mut() {
                if let Some(index) = self.vertex_index(&current) {
                    post(&mut self.vertices[index]);
                }
            }
        }
        Ok(())
    }

    /// 清除遍历暂存状态（visited 与 secondary_order）
    pub fn reset_traversal(&mut self) {
        for vertex in &mut self.vertices {
            vertex.visited = false;
            vertex.secondary_order = 0;
        }
    }

    fn visit(&mut self, index: usize, pre_visit: &mut Option<VisitFn<'_, K>>) {
        self.vertices[index].visited = true;
        if let Some(pre) = pre_visit.as_mut() {
            pre(&mut self.vertices[index]);
        }
    }

    fn sort_edges(&mut self) {
        self.edges
            .sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.dest.cmp(&b.dest)));
    }

    /// 当前顶点键的最小值与最大值
    fn key_span(&self) -> Option<(&K, &K)> {
        if self.vertices_sorted {
            match (self.vertices.first(), self.vertices.last()) {
                (Some(first), Some(last)) => Some((&first.key, &last.key)),
                _ => None,
            }
        } else {
            let min = self.vertices.iter().map(|v| &v.key).min()?;
            let max = self.vertices.iter().map(|v| &v.key).max()?;
            Some((min, max))
        }
    }
}

/// 图的公共操作。有向图与无向图通过实现
/// `add_edge_weighted`/`remove_edge`/`edges_count` 定制边的
/// 构造方式，其余操作统一委托给 `GraphBase`。
pub trait Graph<K: Ord + Clone + Debug> {
    /// 底层存储的只读访问
    fn base(&self) -> &GraphBase<K>;

    /// 底层存储的可变访问
    fn base_mut(&mut self) -> &mut GraphBase<K>;

    /// 添加一条指定权重的边；端点不存在时自动创建，
    /// 边已存在时累加权重，端点相同时报非法操作
    fn add_edge_weighted(&mut self, first: &K, second: &K, weight: i64) -> AlgoResult<()>;

    /// 移除一条边，不存在时报 NotFound
    fn remove_edge(&mut self, first: &K, second: &K) -> AlgoResult<()>;

    /// 逻辑边数量
    fn edges_count(&self) -> usize {
        self.base().edges().len()
    }

    /// 添加一条权重为 1 的边
    fn add_edge(&mut self, first: &K, second: &K) -> AlgoResult<()> {
        self.add_edge_weighted(first, second, 1)
    }

    fn add_vertex(&mut self, key: K) {
        self.base_mut().add_vertex(key);
    }

    fn remove_vertex(&mut self, key: &K) {
        self.base_mut().remove_vertex(key);
    }

    fn vertex_exists(&self, key: &K) -> bool {
        self.base().vertex_exists(key)
    }

    fn vertices_count(&self) -> usize {
        self.base().vertices_count()
    }

    fn enforce_order(&self) -> bool {
        self.base().enforce_order()
    }

    fn set_enforce_order(&mut self, on: bool) {
        self.base_mut().set_enforce_order(on);
    }

    fn get_vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.base().get_vertex(key)
    }

    fn try_get_vertex(&self, key: &K) -> AlgoResult<&Vertex<K>> {
        self.base().try_get_vertex(key)
    }

    fn outgoing(&self, key: &K) -> Vec<usize> {
        self.base().outgoing(key)
    }

    fn nearest(&self, key: &K) -> Vec<K> {
        self.base().nearest(key)
    }

    fn depth_first_search(
        &mut self,
        start: &K,
        pre_visit: Option<VisitFn<'_, K>>,
        post_visit: Option<VisitFn<'_, K>>,
    ) -> AlgoResult<()> {
        self.base_mut().depth_first_search(start, pre_visit, post_visit)
    }

    fn breadth_first_search(
        &mut self,
        start: &K,
        pre_visit: Option<VisitFn<'_, K>>,
        post_visit: Option<VisitFn<'_, K>>,
    ) -> AlgoResult<()> {
        self.base_mut().breadth_first_search(start, pre_visit, post_visit)
    }

    fn reset_traversal(&mut self) {
        self.base_mut().reset_traversal();
    }
}
