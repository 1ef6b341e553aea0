//! Rendering and repair over realistic call trees

use calltree_diagram::{render, repair, Grammar};
use calltree_extractor::{FunctionKind, FunctionRecord};
use calltree_graph::build_call_trees;
use pretty_assertions::assert_eq;

fn record(name: &str, file: &str, calls: &[&str]) -> FunctionRecord {
    FunctionRecord::new(name, file, 1, FunctionKind::ArrowFunction)
        .with_calls(calls.iter().copied())
}

fn react_app() -> Vec<FunctionRecord> {
    vec![
        record("App", "src/App.jsx", &["Dashboard"]),
        record(
            "Dashboard",
            "src/components/Dashboard.jsx",
            &["useUsers", "formatDate", "handleSubmit"],
        ),
        record("useUsers", "src/hooks/useUsers.js", &["fetchUsers"]),
        record("fetchUsers", "src/api/users.js", &["fetchUsers"]),
        record("formatDate", "src/utils/date.js", &[]),
        record("handleSubmit", "src/components/Dashboard.jsx", &["validateForm"]),
        record("validateForm", "src/utils/validation.js", &[]),
    ]
}

#[test]
fn formatdate_is_restored_in_place() {
    let functions = vec![
        record("main", "src/app.js", &["formatDate"]),
        record("formatDate", "src/utils.js", &[]),
    ];
    let doc = render(&build_call_trees(&functions, 3), &functions, Grammar::Graph);
    let text = doc.text();

    let line = text
        .lines()
        .position(|line| line.contains("Formatdate"))
        .expect("title-cased label");
    let column = text.lines().nth(line).unwrap().find("Formatdate").unwrap();

    let repaired = repair(&text);
    let repaired_line = repaired.lines().nth(line).unwrap();
    assert_eq!(&repaired_line[column..column + "FormatDate".len()], "FormatDate");
    assert_eq!(repaired.lines().count(), text.lines().count());
}

#[test]
fn graph_grammar_renders_whole_forest() {
    let functions = react_app();
    let doc = render(&build_call_trees(&functions, 5), &functions, Grammar::Graph);
    let lines = doc.lines();

    assert_eq!(lines[0], "graph TD");
    assert_eq!(lines[2], "    N0[\"App (App.jsx)\"]");
    let declarations = lines.iter().filter(|line| line.contains("[\"")).count();
    assert_eq!(declarations, functions.len());
    // fetchUsers calls itself; no self edge
    let edges: Vec<&String> = lines.iter().filter(|line| line.contains("-->")).collect();
    assert_eq!(edges.len(), functions.len() - 1);
}

#[test]
fn component_grammar_roles_survive_repair() {
    let functions = react_app();
    let doc = render(&build_call_trees(&functions, 5), &functions, Grammar::Component);
    let text = doc.text();

    assert!(text.starts_with("@startuml\n"));
    assert!(text.ends_with("\n@enduml"));
    assert!(text.contains("  [Dashboard] as fn_Dashboard <<component>>"));
    assert!(text.contains("  [useUsers] as fn_useUsers <<component>>"));
    assert!(text.contains("  [fetchUsers] as fn_fetchUsers <<service>>"));
    // handler defined in a component file is tagged component first
    assert!(text.contains("  [handleSubmit] as fn_handleSubmit <<component>>"));
    assert!(!text.contains("fn_fetchUsers --> fn_fetchUsers"));

    let repaired = repair(&text);
    assert!(repaired.contains("  [handleSubmit] as fn_handleSubmit <<utility>>"));
    assert!(repaired.contains("  [Dashboard] as fn_Dashboard <<component>>"));
    assert_eq!(repaired.lines().count(), text.lines().count());
}

#[test]
fn render_then_repair_preserves_line_count() {
    let cases = vec![
        react_app(),
        Vec::new(),
        vec![record("a", "a.py", &["b"]), record("b", "a.py", &["a"])],
        vec![record("format_date", "x/helpers.py", &[])],
    ];

    for functions in cases {
        for grammar in [Grammar::Graph, Grammar::Component] {
            let doc = render(&build_call_trees(&functions, 3), &functions, grammar);
            let repaired = repair(&doc.text());
            assert_eq!(repaired.split('\n').count(), doc.line_count());
        }
    }
}
