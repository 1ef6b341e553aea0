use calltree_extractor::FunctionRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// A node of a depth-bounded call tree.
///
/// Children are keyed by the called name and only exist for calls that
/// resolved to an extracted function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallTreeNode {
    pub name: String,
    pub file: String,
    pub children: BTreeMap<String, CallTreeNode>,
}

impl CallTreeNode {
    #[must_use]
    pub fn leaf(record: &FunctionRecord) -> Self {
        Self {
            name: record.name.clone(),
            file: record.file.clone(),
            children: BTreeMap::new(),
        }
    }

    /// Number of levels, counting this node
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .values()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total nodes in the subtree, including this one
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first pre-order walk
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a CallTreeNode)) {
        visit(self);
        for child in self.children.values() {
            child.walk(visit);
        }
    }

    /// Parent→child pairs in depth-first order
    #[must_use]
    pub fn edges(&self) -> Vec<(&CallTreeNode, &CallTreeNode)> {
        let mut out = Vec::new();
        self.collect_edges(&mut out);
        out
    }

    fn collect_edges<'a>(&'a self, out: &mut Vec<(&'a CallTreeNode, &'a CallTreeNode)>) {
        for child in self.children.values() {
            out.push((self, child));
            child.collect_edges(out);
        }
    }
}

/// Call trees keyed by entry-point name, in entry-point order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CallForest {
    trees: Vec<CallTreeNode>,
}

impl CallForest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tree: CallTreeNode) {
        self.trees.push(tree);
    }

    #[must_use]
    pub fn get(&self, entry: &str) -> Option<&CallTreeNode> {
        self.trees.iter().find(|tree| tree.name == entry)
    }

    #[must_use]
    pub fn entry_names(&self) -> Vec<&str> {
        self.trees.iter().map(|tree| tree.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CallTreeNode> {
        self.trees.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.trees.iter().map(CallTreeNode::node_count).sum()
    }
}

impl<'a> IntoIterator for &'a CallForest {
    type Item = &'a CallTreeNode;
    type IntoIter = std::slice::Iter<'a, CallTreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.iter()
    }
}

