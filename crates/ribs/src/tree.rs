//! RIB 树遍历
//!
//! 命名约定:
//! - `XInteractable: YListener` 表示 `Y` 是 `X` 的子 RIB
//! - 存在以 `XViewController` 为左端的边, 则 `X` 是 viewful

use crate::graph::EdgeSet;
use std::collections::{HashMap, HashSet};
use std::fmt;

const INTERACTABLE: &str = "Interactable";
const LISTENER: &str = "Listener";
const VIEW_CONTROLLER: &str = "ViewController";

/// mindmap 缩进标记
const DEPTH_MARKER: &str = "*";

/// 名字包含 `marker` 时返回去掉所有 `marker` 后的名字
fn strip_marker(name: &str, marker: &str) -> Option<String> {
    if name.contains(marker) {
        Some(name.replace(marker, ""))
    } else {
        None
    }
}

pub fn interactable_base(name: &str) -> Option<String> {
    strip_marker(name, INTERACTABLE)
}

pub fn listener_base(name: &str) -> Option<String> {
    strip_marker(name, LISTENER)
}

pub fn view_controller_base(name: &str) -> Option<String> {
    strip_marker(name, VIEW_CONTROLLER)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Viewful,
    Viewless,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewful => "Viewful",
            Self::Viewless => "Viewless",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<{}>>", self.as_str())
    }
}

/// 树中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RibNode {
    pub name: String,
    /// 根节点深度为 1
    pub depth: usize,
    pub view: ViewKind,
}

impl fmt::Display for RibNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", DEPTH_MARKER.repeat(self.depth), self.name, self.view)
    }
}

struct Frame {
    name: String,
    depth: usize,
    /// 从根到父节点的路径, 用于检测环
    ancestors: Vec<String>,
}

/// 深度优先的 RIB 树迭代器
///
/// 惰性产出, 只能遍历一次。兄弟节点按边集合的排序顺序输出。
pub struct RibsTree {
    children: HashMap<String, Vec<String>>,
    viewful: HashSet<String>,
    max_depth: Option<usize>,
    stack: Vec<Frame>,
}

impl RibsTree {
    pub fn new(edges: &EdgeSet, root: &str) -> Self {
        let viewful: HashSet<String> = edges
            .iter()
            .filter_map(|e| view_controller_base(e.left_name()))
            .collect();

        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for edge in edges.iter() {
            let Some(parent) = interactable_base(edge.left_name()) else {
                continue;
            };
            if let Some(child) = listener_base(edge.right_name()) {
                children.entry(parent).or_default().push(child);
            }
        }

        Self {
            children,
            viewful,
            max_depth: None,
            stack: vec![Frame {
                name: root.to_string(),
                depth: 1,
                ancestors: Vec::new(),
            }],
        }
    }

    /// 限制最大深度 (根为 1)
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn view_kind(&self, name: &str) -> ViewKind {
        if self.viewful.contains(name) {
            ViewKind::Viewful
        } else {
            ViewKind::Viewless
        }
    }

    /// 逐行输出 mindmap 文本
    pub fn lines(self) -> impl Iterator<Item = String> {
        self.map(|node| node.to_string())
    }
}

impl Iterator for RibsTree {
    type Item = RibNode;

    fn next(&mut self) -> Option<RibNode> {
        let frame = self.stack.pop()?;
        let node = RibNode {
            view: self.view_kind(&frame.name),
            name: frame.name.clone(),
            depth: frame.depth,
        };

        if self.max_depth.map_or(true, |max| frame.depth < max) {
            if let Some(children) = self.children.get(&frame.name) {
                let mut ancestors = frame.ancestors;
                ancestors.push(frame.name);

                // 逆序入栈, 出栈时保持排序顺序
                for child in children.iter().rev() {
                    if ancestors.contains(child) {
                        tracing::warn!(
                            "Cycle detected: {} -> {}, branch truncated",
                            ancestors.join(" -> "),
                            child
                        );
                        continue;
                    }
                    self.stack.push(Frame {
                        name: child.clone(),
                        depth: frame.depth + 1,
                        ancestors: ancestors.clone(),
                    });
                }
            }
        }

        Some(node)
    }
}
