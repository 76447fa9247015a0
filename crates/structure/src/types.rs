use serde::{Deserialize, Serialize};

/// 声明类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Class,
    Protocol,
    Struct,
    Enum,
    Extension,
    Other(String),
}

impl DeclarationKind {
    /// 从 Swift 关键字映射 (`class`, `protocol`, ...)
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "class" => Self::Class,
            "protocol" => Self::Protocol,
            "struct" => Self::Struct,
            "enum" => Self::Enum,
            "extension" => Self::Extension,
            other => Self::Other(other.to_string()),
        }
    }

    /// 只有 class / protocol 参与继承关系
    pub fn is_inheritable(&self) -> bool {
        matches!(self, Self::Class | Self::Protocol)
    }
}

/// 声明记录 - 一个顶层类型声明及其继承/遵循列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub kind: DeclarationKind,
    /// 声明名, 解析失败时为 None
    pub name: Option<String>,
    /// 继承的类型名, 按声明顺序
    pub inherited_names: Vec<String>,
}

impl DeclarationRecord {
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            inherited_names: Vec::new(),
        }
    }

    pub fn inheriting<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inherited_names.extend(names.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_keyword() {
        assert_eq!(DeclarationKind::from_keyword("class"), DeclarationKind::Class);
        assert_eq!(DeclarationKind::from_keyword("protocol"), DeclarationKind::Protocol);
        assert_eq!(
            DeclarationKind::from_keyword("actor"),
            DeclarationKind::Other("actor".to_string())
        );
    }

    #[test]
    fn test_is_inheritable() {
        assert!(DeclarationKind::Class.is_inheritable());
        assert!(DeclarationKind::Protocol.is_inheritable());
        assert!(!DeclarationKind::Struct.is_inheritable());
        assert!(!DeclarationKind::Extension.is_inheritable());
        assert!(!DeclarationKind::Other("func".into()).is_inheritable());
    }

    #[test]
    fn test_record_builder() {
        let record = DeclarationRecord::new(DeclarationKind::Protocol, "FooInteractable")
            .inheriting(["BarListener", "Interactable"]);
        assert_eq!(record.name.as_deref(), Some("FooInteractable"));
        assert_eq!(record.inherited_names, vec!["BarListener", "Interactable"]);
    }
}
