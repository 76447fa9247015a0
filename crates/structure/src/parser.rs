//! Swift 声明解析器 - 使用 tree-sitter 提取顶层类型声明及其继承列表

use crate::error::Result;
use crate::types::{DeclarationKind, DeclarationRecord};
use tree_sitter::{Node, Parser};

/// `class_declaration` 同时覆盖 class / struct / enum / extension / actor
const DECLARATION_KEYWORDS: &[&str] = &["class", "struct", "enum", "extension", "actor"];

pub struct SwiftParser {
    parser: Parser,
}

impl SwiftParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_swift::language();
        parser.set_language(&language)?;
        Ok(Self { parser })
    }

    /// 解析源码, 只返回顶层声明 (嵌套类型不参与 RIB 关系)
    pub fn parse(&mut self, content: &str) -> Option<Vec<DeclarationRecord>> {
        let tree = self.parser.parse(content.as_bytes(), None)?;
        let root = tree.root_node();

        let records = root
            .children(&mut root.walk())
            .filter_map(|node| Self::declaration(node, content))
            .collect();

        Some(records)
    }

    fn declaration(node: Node, content: &str) -> Option<DeclarationRecord> {
        let kind = match node.kind() {
            "protocol_declaration" => DeclarationKind::Protocol,
            "class_declaration" => node
                .children(&mut node.walk())
                .find(|c| !c.is_named() && DECLARATION_KEYWORDS.contains(&c.kind()))
                .map(|c| DeclarationKind::from_keyword(c.kind()))
                .unwrap_or(DeclarationKind::Class),
            _ => return None,
        };

        let name = node
            .child_by_field_name("name")
            .or_else(|| {
                node.children(&mut node.walk())
                    .find(|c| c.kind() == "type_identifier")
            })
            .map(|c| content[c.byte_range()].trim().to_string())
            .filter(|n| !n.is_empty());

        let inherited_names = node
            .children(&mut node.walk())
            .filter(|c| c.kind() == "inheritance_specifier")
            .map(|c| content[c.byte_range()].trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        Some(DeclarationRecord {
            kind,
            name,
            inherited_names,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<DeclarationRecord> {
        SwiftParser::new().unwrap().parse(content).unwrap()
    }

    #[test]
    fn test_parse_protocol_with_inheritance() {
        let records = parse("protocol RootInteractable: Interactable, ChildListener {}\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, DeclarationKind::Protocol);
        assert_eq!(records[0].name.as_deref(), Some("RootInteractable"));
        assert_eq!(records[0].inherited_names, vec!["Interactable", "ChildListener"]);
    }

    #[test]
    fn test_parse_class_with_modifiers() {
        let content = r#"
import RIBs
import UIKit

final class RootViewController: UIViewController, RootPresentable {
    weak var listener: RootPresentableListener?
}
"#;
        let records = parse(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, DeclarationKind::Class);
        assert_eq!(records[0].name.as_deref(), Some("RootViewController"));
        assert_eq!(records[0].inherited_names, vec!["UIViewController", "RootPresentable"]);
    }

    #[test]
    fn test_parse_generic_superclass() {
        let content = "final class RootRouter: ViewableRouter<RootInteractable, RootViewControllable>, RootRouting {}\n";
        let records = parse(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].inherited_names.len(), 2);
        assert!(records[0].inherited_names[0].starts_with("ViewableRouter"));
        assert_eq!(records[0].inherited_names[1], "RootRouting");
    }

    #[test]
    fn test_parse_reports_other_kinds() {
        let content = r#"
struct RootState {}
enum RootAction {}
"#;
        let records = parse(content);
        let kinds: Vec<_> = records.iter().map(|r| r.kind.clone()).collect();
        assert_eq!(kinds, vec![DeclarationKind::Struct, DeclarationKind::Enum]);
    }

    #[test]
    fn test_parse_ignores_nested_declarations() {
        let content = r#"
class Outer {
    class InnerInteractable: InnerListener {}
}
"#;
        let records = parse(content);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name.as_deref(), Some("Outer"));
        assert!(records[0].inherited_names.is_empty());
    }

    #[test]
    fn test_parse_ignores_functions_and_imports() {
        let content = r#"
import Foundation

func makeRoot() {}
let value = 1
"#;
        assert!(parse(content).is_empty());
    }
}
