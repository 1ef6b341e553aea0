use crate::types::{CallForest, CallTreeNode};
use calltree_extractor::FunctionRecord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Ceiling on the number of entry points that get a tree
pub const MAX_ENTRY_TREES: usize = 10;

pub const DEFAULT_MAX_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub max_depth: usize,
    pub max_entry_points: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_entry_points: MAX_ENTRY_TREES,
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }
}

/// Builds call trees from a flat function list.
///
/// The index is keyed by bare name: a later record silently shadows an
/// earlier one with the same name, even across files.
pub struct GraphBuilder<'a> {
    functions: &'a [FunctionRecord],
    index: HashMap<&'a str, &'a FunctionRecord>,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    pub fn new(functions: &'a [FunctionRecord]) -> Self {
        let index = functions
            .iter()
            .map(|record| (record.name.as_str(), record))
            .collect();

        Self { functions, index }
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&'a FunctionRecord> {
        self.index.get(name).copied()
    }

    /// Union of every function's call set
    #[must_use]
    pub fn called_set(&self) -> HashSet<&'a str> {
        self.functions
            .iter()
            .flat_map(|record| record.calls.iter().map(String::as_str))
            .collect()
    }

    /// Names never called by any extracted function, in input order.
    ///
    /// Each name is listed once, at its first occurrence.
    #[must_use]
    pub fn entry_points(&self) -> Vec<&'a str> {
        let called = self.called_set();
        let mut seen = HashSet::new();

        self.functions
            .iter()
            .map(|record| record.name.as_str())
            .filter(|name| !called.contains(name))
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Materialize one tree per entry point (up to the configured cap).
    ///
    /// A single `visited` set spans all trees, so a name appears at most once
    /// in the whole forest and cyclic graphs terminate.
    #[must_use]
    pub fn build(&self, config: GraphConfig) -> CallForest {
        let mut forest = CallForest::new();
        let mut visited: HashSet<&'a str> = HashSet::new();

        let entries = self.entry_points();
        if entries.len() > config.max_entry_points {
            log::debug!(
                "{} entry points, building trees for the first {}",
                entries.len(),
                config.max_entry_points
            );
        }

        for entry in entries.into_iter().take(config.max_entry_points) {
            if visited.contains(entry) {
                continue;
            }
            if let Some(tree) = self.expand(entry, 0, config.max_depth, &mut visited) {
                forest.push(tree);
            }
        }

        log::info!(
            "Built {} call trees ({} nodes) from {} functions",
            forest.len(),
            forest.node_count(),
            self.functions.len()
        );

        forest
    }

    fn expand(
        &self,
        name: &str,
        depth: usize,
        max_depth: usize,
        visited: &mut HashSet<&'a str>,
    ) -> Option<CallTreeNode> {
        let record = self.resolve(name)?;
        if !visited.insert(record.name.as_str()) {
            return None;
        }

        // a tree holds at most `max_depth` levels; the root level always exists
        let mut node = CallTreeNode::leaf(record);
        if depth + 1 < max_depth {
            for callee in &record.calls {
                if let Some(child) = self.expand(callee, depth + 1, max_depth, visited) {
                    node.children.insert(callee.clone(), child);
                }
            }
        }

        Some(node)
    }
}

/// Build bounded, cycle-safe call trees rooted at the entry points
#[must_use]
pub fn build_call_trees(functions: &[FunctionRecord], max_depth: usize) -> CallForest {
    GraphBuilder::new(functions).build(GraphConfig::with_max_depth(max_depth))
}

/// Every entry-point name, without the tree cap applied
#[must_use]
pub fn entry_points(functions: &[FunctionRecord]) -> Vec<String> {
    GraphBuilder::new(functions)
        .entry_points()
        .into_iter()
        .map(str::to_string)
        .collect()
}
