use crate::classify::{classify, NodeRole};
use crate::grammar::{DiagramDocument, Grammar};
use crate::labels::{alias, package_label};
use calltree_extractor::FunctionRecord;
use calltree_graph::CallForest;
use std::collections::{HashMap, HashSet};

const PREAMBLE: &[&str] = &[
    "!theme plain",
    "allowmixing",
    "skinparam componentStyle rectangle",
    "skinparam packageStyle rectangle",
    "skinparam shadowing false",
    "left to right direction",
];

const END_MARKER: &str = "@enduml";

/// Render functions grouped by file, then the call-tree edges.
///
/// Declarations come from the full function list, so functions outside every
/// tree still appear. A name is declared once even when several files define
/// it.
#[must_use]
pub fn render_components(forest: &CallForest, functions: &[FunctionRecord]) -> DiagramDocument {
    let mut lines = vec![Grammar::Component.marker().to_string()];
    lines.extend(PREAMBLE.iter().map(|line| (*line).to_string()));

    let mut declared: HashSet<&str> = HashSet::new();
    for (file, members) in group_by_file(functions) {
        lines.push(format!("package \"{}\" {{", package_label(file)));
        for record in members {
            if declared.insert(record.name.as_str()) {
                declare(&mut lines, record);
            }
        }
        lines.push("}".to_string());
    }

    let mut seen_edges = HashSet::new();
    for tree in forest {
        for (parent, child) in tree.edges() {
            if parent.name == child.name {
                continue;
            }
            let edge = format!("{} --> {}", alias(&parent.name), alias(&child.name));
            if seen_edges.insert(edge.clone()) {
                lines.push(edge);
            }
        }
    }

    lines.push(END_MARKER.to_string());
    DiagramDocument::new(Grammar::Component, lines)
}

fn declare(lines: &mut Vec<String>, record: &FunctionRecord) {
    let name = record.name.as_str();
    let id = alias(name);
    let role = classify(&record.file, name);

    match role {
        NodeRole::Utility => {
            lines.push(format!("  class \"{name}\" as {id} {} {{", role.stereotype()));
            lines.push(format!("    +{name}()"));
            lines.push("  }".to_string());
        }
        NodeRole::Component | NodeRole::Service => {
            lines.push(format!("  [{name}] as {id} {}", role.stereotype()));
        }
    }
}

/// Files in first-seen order with their functions in input order
fn group_by_file(functions: &[FunctionRecord]) -> Vec<(&str, Vec<&FunctionRecord>)> {
    let mut groups: Vec<(&str, Vec<&FunctionRecord>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for record in functions {
        let slot = *slots.entry(record.file.as_str()).or_insert_with(|| {
            groups.push((record.file.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
}
