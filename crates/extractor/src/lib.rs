//! # Call Tree Extractor
//!
//! Turns raw source text into a flat list of [`FunctionRecord`]s: one per
//! function or method definition, each carrying the identifiers it calls.
//!
//! ## Strategies
//!
//! ```text
//! (text, file, language hint)
//!     │
//!     ├──> Structured mode (tree-sitter: Rust, Python, optionally JS/TS)
//!     │      ├─ every definition node becomes a record
//!     │      └─ bare-identifier calls go to the innermost definition
//!     │
//!     └──> Lexical mode (regex: JS/TS by default, unknown languages)
//!            ├─ function keyword / arrow binding / method-style patterns
//!            └─ calls scanned from each match to end of file
//! ```
//!
//! Extraction never fails outright: a file that cannot be parsed contributes
//! no records and the failure is logged.

mod error;
mod extractor;
mod language;
mod lexical;
mod structured;
mod types;

pub use error::{ExtractError, Result};
pub use extractor::{Extractor, ExtractorConfig};
pub use language::{ExtractionMode, Language};
pub use lexical::{LexicalExtractor, DEFAULT_EXCLUDED_CALL_PREFIX};
pub use structured::StructuredExtractor;
pub use types::{FunctionKind, FunctionRecord};

/// Extract function records from one file with default settings.
///
/// `language_hint` is a free-form label such as `"react"`, `"python"` or `"ts"`.
#[must_use]
pub fn extract(text: &str, file_id: &str, language_hint: &str) -> Vec<FunctionRecord> {
    Extractor::default().extract(text, file_id, Language::from_hint(language_hint))
}
