use crate::grammar::{DiagramDocument, Grammar};
use crate::labels::{base_name, title_label};
use calltree_graph::{CallForest, CallTreeNode};
use std::collections::HashMap;

const CLASS_DEF: &str = "    classDef default fill:#eef4ff,stroke:#1e66f5,stroke-width:1px,color:#1e1e2e";
const LINK_STYLE: &str = "    linkStyle default stroke:#6c7086,stroke-width:1px";

/// Render the forest as a top-down Mermaid flowchart.
///
/// Node ids are assigned in first-seen depth-first order, so the output is
/// stable for a given forest.
#[must_use]
pub fn render_graph(forest: &CallForest) -> DiagramDocument {
    let mut ids: HashMap<String, String> = HashMap::new();
    let mut declarations = Vec::new();

    for tree in forest {
        tree.walk(&mut |node| {
            if ids.contains_key(&node.name) {
                return;
            }
            let id = format!("N{}", ids.len());
            declarations.push(declaration(&id, node));
            ids.insert(node.name.clone(), id);
        });
    }

    let mut edges = Vec::new();
    for tree in forest {
        for (parent, child) in tree.edges() {
            if parent.name == child.name {
                continue;
            }
            if let (Some(from), Some(to)) = (ids.get(&parent.name), ids.get(&child.name)) {
                edges.push(format!("    {from} --> {to}"));
            }
        }
    }

    let mut lines = Vec::with_capacity(declarations.len() + edges.len() + 3);
    lines.push(Grammar::Graph.marker().to_string());
    lines.push(CLASS_DEF.to_string());
    lines.extend(declarations);
    lines.extend(edges);
    lines.push(LINK_STYLE.to_string());

    DiagramDocument::new(Grammar::Graph, lines)
}

fn declaration(id: &str, node: &CallTreeNode) -> String {
    let label = format!("{} ({})", title_label(&node.name), base_name(&node.file));
    format!("    {id}[\"{}\"]", label.replace('"', "#quot;"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use calltree_extractor::{FunctionKind, FunctionRecord};
    use calltree_graph::build_call_trees;
    use pretty_assertions::assert_eq;

    #[test]
    fn declarations_then_edges() {
        let functions = vec![
            FunctionRecord::new("main", "src/app.js", 1, FunctionKind::FunctionDeclaration)
                .with_calls(["load_users"]),
            FunctionRecord::new("load_users", "src/api/users.js", 4, FunctionKind::ArrowFunction),
        ];
        let doc = render_graph(&build_call_trees(&functions, 3));

        assert_eq!(
            doc.lines(),
            [
                "graph TD",
                CLASS_DEF,
                "    N0[\"Main (app.js)\"]",
                "    N1[\"Load Users (users.js)\"]",
                "    N0 --> N1",
                LINK_STYLE,
            ]
        );
    }

    #[test]
    fn empty_forest_is_only_framing() {
        let doc = render_graph(&CallForest::new());
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.lines()[0], "graph TD");
    }
}
