use calltree_extractor::FunctionRecord;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Name-keyed call graph over the extracted functions.
///
/// Only resolvable calls become edges. Used for summary statistics; call trees
/// are built by [`crate::GraphBuilder`].
pub struct CallGraph {
    graph: DiGraph<String, ()>,
}

impl CallGraph {
    #[must_use]
    pub fn from_functions(functions: &[FunctionRecord]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<String, NodeIndex> = HashMap::new();

        for record in functions {
            nodes
                .entry(record.name.clone())
                .or_insert_with(|| graph.add_node(record.name.clone()));
        }

        for record in functions {
            let from = nodes[&record.name];
            for callee in &record.calls {
                if let Some(&to) = nodes.get(callee) {
                    graph.update_edge(from, to, ());
                }
            }
        }

        Self { graph }
    }

    /// Distinct resolved caller → callee pairs
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Mutually recursive groups and self-recursive functions.
    ///
    /// Each group is sorted by name; groups are sorted by their first name.
    #[must_use]
    pub fn recursive_groups(&self) -> Vec<Vec<String>> {
        let mut groups: Vec<Vec<String>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut names: Vec<String> =
                    scc.into_iter().map(|idx| self.graph[idx].clone()).collect();
                names.sort();
                names
            })
            .collect();

        groups.sort();
        groups
    }
}
