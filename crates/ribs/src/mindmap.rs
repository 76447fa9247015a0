use crate::graph::EdgeSet;
use crate::tree::RibsTree;
use std::io::{self, Write};

pub const MINDMAP_START: &str = "@startmindmap";
pub const MINDMAP_END: &str = "@endmindmap";
pub const PREVIEW_URL: &str = "https://sujoyu.github.io/plantuml-previewer/";

/// Viewful / Viewless 节点配色
pub const MINDMAP_STYLE: &str = "\
<style>
mindmapDiagram {
  .Viewful {
    BackGroundColor #00c88b
  }
  .Viewless {
    BackGroundColor #d3d3d3
  }
}
</style>";

/// PlantUML mindmap 生成器
pub struct MindmapGenerator {
    max_depth: Option<usize>,
}

impl MindmapGenerator {
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(mut self, max: Option<usize>) -> Self {
        self.max_depth = max;
        self
    }

    /// 把完整 mindmap 写入 `out`
    pub fn write<W: Write>(&self, edges: &EdgeSet, root: &str, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", MINDMAP_START)?;
        writeln!(out, "{}", MINDMAP_STYLE)?;

        let mut count = 0usize;
        for line in RibsTree::new(edges, root).with_max_depth(self.max_depth).lines() {
            writeln!(out, "{}", line)?;
            count += 1;
        }
        tracing::info!("Rendered {} RIBs under {}", count, root);

        writeln!(out, "{}", MINDMAP_END)?;
        // 预览链接前空两行
        writeln!(out, "\n")?;
        writeln!(out, "{}", PREVIEW_URL)?;
        Ok(())
    }

    /// 生成 mindmap 文本
    pub fn generate(&self, edges: &EdgeSet, root: &str) -> String {
        let mut buf = Vec::new();
        self.write(edges, root, &mut buf)
            .expect("writing to Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Default for MindmapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn edges(pairs: &[(&str, &str)]) -> EdgeSet {
        pairs.iter().filter_map(|(l, r)| Edge::new(*l, *r)).collect()
    }

    #[test]
    fn test_generate_full_document() {
        let set = edges(&[
            ("RootInteractable", "ChildListener"),
            ("RootViewController", "UIViewController"),
        ]);
        let output = MindmapGenerator::new().generate(&set, "Root");
        let expected = "\
@startmindmap
<style>
mindmapDiagram {
  .Viewful {
    BackGroundColor #00c88b
  }
  .Viewless {
    BackGroundColor #d3d3d3
  }
}
</style>
* Root<<Viewful>>
** Child<<Viewless>>
@endmindmap


https://sujoyu.github.io/plantuml-previewer/
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_unmatched_root() {
        let output = MindmapGenerator::new().generate(&EdgeSet::new(), "Ghost");
        let tree: Vec<_> = output
            .lines()
            .skip_while(|l| *l != "</style>")
            .skip(1)
            .take_while(|l| *l != MINDMAP_END)
            .collect();
        assert_eq!(tree, vec!["* Ghost<<Viewless>>"]);
    }

    #[test]
    fn test_write_to_sink() {
        let set = edges(&[("AInteractable", "BListener"), ("BInteractable", "CListener")]);
        let mut buf = Vec::new();
        MindmapGenerator::new()
            .with_max_depth(Some(2))
            .write(&set, "A", &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("** B<<Viewless>>\n@endmindmap"));
        assert!(!text.contains("*** C"));
    }

    #[test]
    fn test_generator_default() {
        let gen = MindmapGenerator::default();
        assert_eq!(gen.max_depth, None);
    }
}
