//! ribs - RIBs 架构树
//!
//! 从 Interactable / Listener / ViewController 命名约定还原 RIB 父子关系, 输出 PlantUML mindmap

mod analyzer;
mod config;
mod graph;
mod mindmap;
mod tree;

pub use analyzer::{RibsAnalyzer, RibsError, Result};
pub use config::RibsConfig;
pub use graph::{extract_edges, Edge, EdgeSet, Node};
pub use mindmap::MindmapGenerator;
pub use tree::{RibNode, RibsTree, ViewKind};
