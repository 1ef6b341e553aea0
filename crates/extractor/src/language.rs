use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported source language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Unknown,
}

/// How function records are pulled out of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Walk a tree-sitter syntax tree
    Structured,
    /// Apply the named regex patterns over raw text
    Lexical,
}

impl Language {
    /// Resolve a free-form language label ("react", "ts", "python", ...)
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_lowercase().as_str() {
            "rust" | "rs" => Self::Rust,
            "python" | "py" => Self::Python,
            "javascript" | "js" | "jsx" | "react" | "node" | "nodejs" => Self::JavaScript,
            "typescript" | "ts" | "tsx" => Self::TypeScript,
            _ => Self::Unknown,
        }
    }

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => Self::Rust,
            "py" | "pyw" => Self::Python,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            _ => Self::Unknown,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(Self::Unknown, Self::from_extension)
    }

    /// Get language name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Unknown => "unknown",
        }
    }

    /// Strategy used when the caller does not force one.
    ///
    /// JavaScript and TypeScript default to the lexical patterns, which is what
    /// the diagram heuristics were tuned against.
    pub const fn default_mode(self) -> ExtractionMode {
        match self {
            Self::Rust | Self::Python => ExtractionMode::Structured,
            Self::JavaScript | Self::TypeScript | Self::Unknown => ExtractionMode::Lexical,
        }
    }

    /// Get Tree-sitter language instance
    ///
    /// `jsx` selects the TSX grammar for TypeScript files carrying markup.
    pub fn tree_sitter_language(self, jsx: bool) -> Result<tree_sitter::Language> {
        match self {
            Self::Rust => Ok(tree_sitter_rust::LANGUAGE.into()),
            Self::Python => Ok(tree_sitter_python::LANGUAGE.into()),
            Self::JavaScript => Ok(tree_sitter_javascript::LANGUAGE.into()),
            Self::TypeScript if jsx => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
            Self::TypeScript => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            Self::Unknown => Err(ExtractError::unsupported_language(self.as_str())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
