//! # Call Tree Analyzer
//!
//! End-to-end pipeline from a project folder to repaired diagram text.
//!
//! ## Flow
//!
//! ```text
//! Project root (+ code folder)
//!     │
//!     ├──> FileScanner (.gitignore aware, suffix + exclude glob filters)
//!     │
//!     ├──> Extractor per file ──> FunctionRecord[]
//!     │      └─ nothing found ──> AnalyzerError::NoFunctions
//!     │
//!     ├──> GraphBuilder ──> call trees
//!     │
//!     ├──> DiagramRenderer ──> optional DiagramEnhancer rewrite
//!     │      (rejected unless it keeps the grammar marker)
//!     │
//!     └──> Repair pass ──> AnalysisResult
//! ```

mod analyzer;
mod config;
mod enhancer;
mod error;
mod scanner;

pub use analyzer::{AnalysisResult, AnalysisSummary, Analyzer};
pub use config::AnalyzerConfig;
pub use enhancer::DiagramEnhancer;
pub use error::{AnalyzerError, Result};
pub use scanner::{FileScanner, SourceFile};
