use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use structure::DeclarationRecord;

/// 节点 - 一个已声明的类型名
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 边 - `left` 继承或遵循 `right`
///
/// 排序按 (left, right) 字典序, 保证遍历结果与输入顺序无关。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    left: Node,
    right: Node,
}

impl Edge {
    /// 自环返回 None
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Option<Self> {
        let left = Node::new(left);
        let right = Node::new(right);
        if left == right {
            return None;
        }
        Some(Self { left, right })
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }

    pub fn left_name(&self) -> &str {
        &self.left.name
    }

    pub fn right_name(&self) -> &str {
        &self.right.name
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.left.name, self.right.name)
    }
}

/// 有序去重的边集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EdgeSet {
    edges: BTreeSet<Edge>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入边, 已存在时返回 false
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// 按 (left, right) 升序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    pub fn contains(&self, left: &str, right: &str) -> bool {
        Edge::new(left, right).map_or(false, |e| self.edges.contains(&e))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl Extend<Edge> for EdgeSet {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl IntoIterator for EdgeSet {
    type Item = Edge;
    type IntoIter = std::collections::btree_set::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::collections::btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// 从声明记录构建边集合
///
/// 只看 class / protocol; 缺名字、空继承名、自继承都静默跳过。
pub fn extract_edges<'a, I>(records: I) -> EdgeSet
where
    I: IntoIterator<Item = &'a DeclarationRecord>,
{
    let mut edges = EdgeSet::new();
    let mut seen = 0usize;

    for record in records {
        seen += 1;
        if !record.kind.is_inheritable() {
            continue;
        }

        let name = match record.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => continue,
        };

        for inherited in &record.inherited_names {
            if inherited.is_empty() {
                continue;
            }
            if let Some(edge) = Edge::new(name, inherited.as_str()) {
                edges.insert(edge);
            }
        }
    }

    tracing::debug!("Extracted {} edges from {} declarations", edges.len(), seen);
    edges
}
