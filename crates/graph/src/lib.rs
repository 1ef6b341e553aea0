//! # Call Tree Graph
//!
//! Assembles extracted functions into bounded call trees.
//!
//! ## Architecture
//!
//! ```text
//! FunctionRecord[]
//!     │
//!     ├──> Name index (last record wins on collisions)
//!     │
//!     ├──> Entry points (names no extracted function calls)
//!     │
//!     ├──> Call trees (first 10 entry points, depth-bounded,
//!     │      one visited set across the whole forest)
//!     │
//!     └──> Call graph (petgraph) for statistics: edges, recursive groups
//! ```

mod builder;
mod graph;
mod types;

pub use builder::{
    build_call_trees, entry_points, GraphBuilder, GraphConfig, DEFAULT_MAX_DEPTH, MAX_ENTRY_TREES,
};
pub use graph::CallGraph;
pub use types::{CallForest, CallTreeNode};
