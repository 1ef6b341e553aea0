use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Syntactic flavour of a definition. Only rendering heuristics look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionKind {
    FunctionDeclaration,
    ArrowFunction,
    MethodDefinition,
    ModuleFunction,
}

impl FunctionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FunctionDeclaration => "function_declaration",
            Self::ArrowFunction => "arrow_function",
            Self::MethodDefinition => "method_definition",
            Self::ModuleFunction => "module_function",
        }
    }
}

/// One discovered function or method.
///
/// `name` is not unique: the same name can show up in several files, or twice
/// in one file on different lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    /// Path relative to the analysis root
    pub file: String,
    /// 1-based definition line
    pub line: usize,
    pub kind: FunctionKind,
    /// Identifiers used as call targets inside the body
    #[serde(default)]
    pub calls: BTreeSet<String>,
}

impl FunctionRecord {
    pub fn new(
        name: impl Into<String>,
        file: impl Into<String>,
        line: usize,
        kind: FunctionKind,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            line,
            kind,
            calls: BTreeSet::new(),
        }
    }

    /// Builder-style helper, mostly for tests and fixtures
    #[must_use]
    pub fn with_calls<I, S>(mut self, calls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calls.extend(calls.into_iter().map(Into::into));
        self
    }

    pub fn has_call(&self, name: &str) -> bool {
        self.calls.contains(name)
    }
}
