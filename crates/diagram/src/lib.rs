//! # Call Tree Diagrams
//!
//! Serializes call trees into diagram text and cleans that text up.
//!
//! ## Pipeline
//!
//! ```text
//! CallForest + FunctionRecord[]
//!     │
//!     ├──> Graph grammar (Mermaid): node per distinct name, tree edges
//!     │
//!     ├──> Component grammar (PlantUML): packages per file, role
//!     │      stereotypes, deduplicated tree edges
//!     │
//!     └──> Repair pass: capitalization fixes, arrow spacing, role
//!            corrections (line count preserved)
//! ```

mod classify;
mod grammar;
mod labels;
mod mermaid;
mod plantuml;
mod repair;

pub use classify::{classify, NodeRole};
pub use grammar::{DiagramDocument, Grammar};
pub use labels::{alias, base_name, package_label, title_label};
pub use mermaid::render_graph;
pub use plantuml::render_components;
pub use repair::{accept_enhanced, Repairer};

use calltree_extractor::FunctionRecord;
use calltree_graph::CallForest;

/// Renders call trees in one grammar
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagramRenderer {
    grammar: Grammar,
}

impl DiagramRenderer {
    #[must_use]
    pub const fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    #[must_use]
    pub fn render(&self, call_trees: &CallForest, functions: &[FunctionRecord]) -> DiagramDocument {
        let doc = match self.grammar {
            Grammar::Graph => render_graph(call_trees),
            Grammar::Component => render_components(call_trees, functions),
        };
        log::debug!(
            "Rendered {} diagram: {} lines",
            self.grammar,
            doc.line_count()
        );
        doc
    }
}

/// Render `call_trees` in `grammar`. `functions` feeds the component
/// grammar's per-file packages; the graph grammar ignores it.
#[must_use]
pub fn render(
    call_trees: &CallForest,
    functions: &[FunctionRecord],
    grammar: Grammar,
) -> DiagramDocument {
    DiagramRenderer::new(grammar).render(call_trees, functions)
}

/// Apply the repair pass to diagram text
#[must_use]
pub fn repair(text: &str) -> String {
    Repairer.repair(text)
}
