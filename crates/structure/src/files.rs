use crate::error::{Result, StructureError};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认跳过的构建/依赖目录
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".build", "Build", "DerivedData", "Pods", "Carthage"];

pub fn is_swift_file(path: &Path) -> bool {
    path.extension().map(|e| e == "swift").unwrap_or(false)
}

/// SourceKitten `structure` 输出的 JSON dump
pub fn is_structure_dump(path: &Path) -> bool {
    path.extension().map(|e| e == "json").unwrap_or(false)
}

/// 展开输入路径: 目录递归收集 .swift, 文件原样保留
pub fn collect_sources<P, S>(paths: &[P], skip_dirs: &[S]) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            collect_swift_files(path, skip_dirs, &mut files)?;
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            return Err(StructureError::NotFound(path.display().to_string()));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// 递归收集 .swift 文件
fn collect_swift_files<S: AsRef<str>>(dir: &Path, skip_dirs: &[S], files: &mut Vec<PathBuf>) -> Result<()> {
    // 跳过构建目录
    if dir
        .file_name()
        .map(|n| skip_dirs.iter().any(|s| n == s.as_ref()))
        .unwrap_or(false)
    {
        tracing::debug!("Skipping {}", dir.display());
        return Ok(());
    }

    let io_err = |source| StructureError::Io {
        path: dir.display().to_string(),
        source,
    };

    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();

        if path.is_dir() {
            collect_swift_files(&path, skip_dirs, files)?;
        } else if is_swift_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}
