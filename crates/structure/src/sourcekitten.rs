//! SourceKitten `structure` 输出适配
//!
//! `sourcekitten structure --file Foo.swift` 产出的 JSON 里, 顶层
//! `key.substructure` 的每一项对应一个声明。这里只保留构建声明记录需要的字段。

use crate::types::{DeclarationKind, DeclarationRecord};
use serde::Deserialize;

const DECL_KIND_PREFIX: &str = "source.lang.swift.decl.";

#[derive(Debug, Deserialize)]
struct Structure {
    #[serde(rename = "key.substructure", default)]
    substructure: Vec<Substructure>,
}

#[derive(Debug, Deserialize)]
struct Substructure {
    #[serde(rename = "key.kind")]
    kind: Option<String>,
    #[serde(rename = "key.name")]
    name: Option<String>,
    #[serde(rename = "key.inheritedtypes", default)]
    inherited_types: Vec<InheritedType>,
}

#[derive(Debug, Deserialize)]
struct InheritedType {
    #[serde(rename = "key.name")]
    name: Option<String>,
}

/// `source.lang.swift.decl.class` -> `DeclarationKind::Class`
pub fn kind_from_sourcekit(kind: &str) -> DeclarationKind {
    match kind.strip_prefix(DECL_KIND_PREFIX) {
        Some(short) if short.starts_with("extension") => DeclarationKind::Extension,
        Some(short) => DeclarationKind::from_keyword(short),
        None => DeclarationKind::Other(kind.to_string()),
    }
}

/// 解析 SourceKitten 结构 JSON; 缺失字段跳过而非报错
pub fn records_from_json(json: &str) -> serde_json::Result<Vec<DeclarationRecord>> {
    let structure: Structure = serde_json::from_str(json)?;

    let records = structure
        .substructure
        .into_iter()
        .filter_map(|sub| {
            let kind = kind_from_sourcekit(sub.kind.as_deref()?);
            Some(DeclarationRecord {
                kind,
                name: sub.name,
                inherited_names: sub
                    .inherited_types
                    .into_iter()
                    .filter_map(|t| t.name)
                    .collect(),
            })
        })
        .collect();

    Ok(records)
}
