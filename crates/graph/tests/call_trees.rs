//! Tests for call-tree assembly

use calltree_extractor::{FunctionKind, FunctionRecord};
use calltree_graph::{
    build_call_trees, entry_points, CallForest, CallTreeNode, GraphBuilder, GraphConfig,
};
use pretty_assertions::assert_eq;
use std::collections::{BTreeSet, HashMap};

fn func(name: &str, calls: &[&str]) -> FunctionRecord {
    FunctionRecord::new(name, "src/app.js", 1, FunctionKind::FunctionDeclaration)
        .with_calls(calls.iter().copied())
}

fn all_names(forest: &CallForest) -> Vec<String> {
    let mut names = Vec::new();
    for tree in forest {
        tree.walk(&mut |node: &CallTreeNode| names.push(node.name.clone()));
    }
    names
}

fn assert_no_repeats(forest: &CallForest) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for name in all_names(forest) {
        *counts.entry(name).or_default() += 1;
    }
    for (name, count) in counts {
        assert_eq!(count, 1, "{name} appears {count} times");
    }
}

fn scenario_a() -> Vec<FunctionRecord> {
    vec![
        func("main", &["funcA", "funcB"]),
        func("funcA", &["funcC"]),
        func("funcB", &["funcD"]),
        func("funcC", &[]),
        func("funcD", &[]),
    ]
}

#[test]
fn single_entry_tree_contains_every_descendant_once() {
    let forest = build_call_trees(&scenario_a(), 5);

    assert_eq!(forest.entry_names(), vec!["main"]);
    let main = forest.get("main").expect("main tree");
    assert_eq!(main.depth(), 3);
    assert_eq!(main.node_count(), 5);
    assert_eq!(
        all_names(&forest),
        vec!["main", "funcA", "funcC", "funcB", "funcD"]
    );
    assert_no_repeats(&forest);
}

#[test]
fn mutual_recursion_has_no_entry_points() {
    let functions = vec![func("a", &["b"]), func("b", &["a"])];

    assert!(entry_points(&functions).is_empty());
    assert!(build_call_trees(&functions, 5).is_empty());
}

#[test]
fn empty_input_builds_empty_forest() {
    let forest = build_call_trees(&[], 3);
    assert!(forest.is_empty());
    assert!(entry_points(&[]).is_empty());
}

#[test]
fn zero_depth_yields_childless_roots() {
    let forest = build_call_trees(&scenario_a(), 0);
    assert_eq!(forest.len(), 1);
    for tree in &forest {
        tree.walk(&mut |node: &CallTreeNode| assert!(node.children.is_empty()));
    }
}

#[test]
fn depth_limit_bounds_tree_height() {
    let functions = vec![
        func("a", &["b"]),
        func("b", &["c"]),
        func("c", &["d"]),
        func("d", &[]),
    ];
    for max_depth in 1..=4 {
        let forest = build_call_trees(&functions, max_depth);
        let root = forest.get("a").unwrap();
        assert!(
            root.depth() <= max_depth,
            "depth {} exceeds max_depth {max_depth}",
            root.depth()
        );
    }

    let root = build_call_trees(&functions, 2).get("a").cloned().unwrap();
    // levels: a, b
    assert_eq!(root.depth(), 2);
    assert!(root.children["b"].children.is_empty());
}

#[test]
fn scenario_trees_stay_within_max_depth() {
    for max_depth in 1..=5 {
        let forest = build_call_trees(&scenario_a(), max_depth);
        let main = forest.get("main").unwrap();
        assert!(main.depth() <= max_depth);
    }
    assert_eq!(build_call_trees(&scenario_a(), 2).get("main").unwrap().depth(), 2);
}

#[test]
fn names_beyond_the_depth_limit_stay_available_to_later_trees() {
    let functions = vec![
        func("first", &["middle"]),
        func("middle", &["deep"]),
        func("second", &["deep"]),
        func("deep", &[]),
    ];
    let forest = build_call_trees(&functions, 2);

    assert!(forest.get("first").unwrap().children["middle"].children.is_empty());
    assert!(forest.get("second").unwrap().children.contains_key("deep"));
    assert_no_repeats(&forest);
}

#[test]
fn shared_callee_appears_in_first_tree_only() {
    let functions = vec![
        func("first", &["shared"]),
        func("second", &["shared", "own"]),
        func("shared", &["leaf"]),
        func("own", &[]),
        func("leaf", &[]),
    ];
    let forest = build_call_trees(&functions, 5);

    assert_eq!(forest.entry_names(), vec!["first", "second"]);
    assert!(forest.get("first").unwrap().children.contains_key("shared"));
    let second = forest.get("second").unwrap();
    assert_eq!(
        second.children.keys().cloned().collect::<Vec<_>>(),
        vec!["own".to_string()]
    );
    assert_no_repeats(&forest);
}

#[test]
fn cycle_below_entry_terminates() {
    let functions = vec![
        func("main", &["ping"]),
        func("ping", &["pong"]),
        func("pong", &["ping", "pong"]),
    ];
    let forest = build_call_trees(&functions, 50);
    assert_eq!(all_names(&forest), vec!["main", "ping", "pong"]);
}

#[test]
fn only_first_ten_entry_points_get_trees() {
    let functions: Vec<FunctionRecord> = (0..14).map(|i| func(&format!("entry{i:02}"), &[])).collect();

    let forest = build_call_trees(&functions, 3);
    assert_eq!(forest.len(), 10);
    assert_eq!(forest.entry_names().last(), Some(&"entry09"));
    assert_eq!(entry_points(&functions).len(), 14);

    let wider = GraphBuilder::new(&functions).build(GraphConfig {
        max_depth: 3,
        max_entry_points: 12,
    });
    assert_eq!(wider.len(), 12);
}

#[test]
fn entry_point_count_matches_uncalled_name_set() {
    let inputs = vec![
        scenario_a(),
        vec![func("a", &["b"]), func("b", &["c"]), func("c", &["a"])],
        vec![
            func("x", &["y", "external"]),
            func("y", &[]),
            func("z", &["z"]),
            func("x", &[]),
        ],
        Vec::new(),
    ];

    for functions in inputs {
        let called: BTreeSet<&str> = functions
            .iter()
            .flat_map(|f| f.calls.iter().map(String::as_str))
            .collect();
        let expected: BTreeSet<&str> = functions
            .iter()
            .map(|f| f.name.as_str())
            .filter(|name| !called.contains(name))
            .collect();

        assert_eq!(entry_points(&functions).len(), expected.len());
    }
}
