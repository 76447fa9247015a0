use crate::config::RibsConfig;
use crate::graph::{extract_edges, EdgeSet};
use crate::mindmap::MindmapGenerator;
use crate::tree::RibsTree;
use std::io::Write;
use std::path::{Path, PathBuf};
use structure::DeclarationRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RibsError {
    #[error("Structure not found: {0}")]
    StructureNotFound(#[from] structure::StructureError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RibsError>;

/// RIBs 架构分析器
pub struct RibsAnalyzer {
    config: RibsConfig,
    edges: EdgeSet,
}

impl RibsAnalyzer {
    pub fn new(config: RibsConfig) -> Self {
        Self {
            config,
            edges: EdgeSet::new(),
        }
    }

    /// 展开输入路径 (目录递归)
    pub fn collect_sources<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<PathBuf>> {
        Ok(structure::collect_sources(paths, self.config.skip_dirs.as_slice())?)
    }

    /// 解析所有文件并构建边集合; 任一文件失败都不会留下部分结果
    pub fn load<P: AsRef<Path>>(&mut self, files: &[P]) -> Result<()> {
        let records = structure::load_structures(files)?;
        self.add_records(&records);
        Ok(())
    }

    pub fn add_records(&mut self, records: &[DeclarationRecord]) {
        self.edges.extend(extract_edges(records));
    }

    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// 以 `root` 为根的 RIB 树
    pub fn tree(&self, root: &str) -> RibsTree {
        RibsTree::new(&self.edges, root).with_max_depth(self.config.max_depth)
    }

    pub fn write_mindmap<W: Write>(&self, root: &str, out: &mut W) -> Result<()> {
        MindmapGenerator::new()
            .with_max_depth(self.config.max_depth)
            .write(&self.edges, root, out)?;
        Ok(())
    }
}

impl Default for RibsAnalyzer {
    fn default() -> Self {
        Self::new(RibsConfig::default())
    }
}
