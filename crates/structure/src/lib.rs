//! structure - 源码结构提取
//!
//! 把 Swift 源文件 (或 SourceKitten 结构 JSON) 转成强类型的声明记录

mod error;
mod files;
mod parser;
mod types;
pub mod sourcekitten;

pub use error::{Result, StructureError};
pub use files::{collect_sources, is_structure_dump, is_swift_file, DEFAULT_SKIP_DIRS};
pub use parser::SwiftParser;
pub use types::{DeclarationKind, DeclarationRecord};

use std::fs;
use std::path::Path;

/// 读取并解析所有路径, 任一文件失败即整体失败 (不返回部分结果)
pub fn load_structures<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<DeclarationRecord>> {
    let mut parser = SwiftParser::new()?;
    let mut records = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StructureError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let parsed = if is_structure_dump(path) {
            sourcekitten::records_from_json(&content).map_err(|source| StructureError::Json {
                path: path.display().to_string(),
                source,
            })?
        } else {
            parser
                .parse(&content)
                .ok_or_else(|| StructureError::Parse(path.display().to_string()))?
        };

        tracing::debug!("{}: {} declarations", path.display(), parsed.len());
        records.extend(parsed);
    }

    Ok(records)
}
