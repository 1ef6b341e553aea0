use crate::error::Result;
use calltree_diagram::Grammar;
use calltree_extractor::{ExtractorConfig, Language};
use calltree_graph::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Pipeline settings, usually loaded from `calltree.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Language label: `javascript`, `react`, `typescript`, `python`, `rust`
    #[serde(default = "default_language")]
    pub language: String,

    /// File suffixes scanned for each language label
    #[serde(default = "default_extensions")]
    pub extensions: BTreeMap<String, Vec<String>>,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub grammar: Grammar,

    /// Sub-folder of the root to analyze
    #[serde(default)]
    pub code_folder: Option<String>,

    /// Glob patterns (relative to the scanned folder) to skip
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(flatten)]
    pub extraction: ExtractorConfig,
}

fn default_language() -> String {
    "javascript".to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_extensions() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 5] = [
        ("javascript", &[".js", ".jsx", ".mjs", ".cjs"]),
        ("react", &[".js", ".jsx", ".ts", ".tsx"]),
        ("typescript", &[".ts", ".tsx"]),
        ("python", &[".py"]),
        ("rust", &[".rs"]),
    ];

    table
        .into_iter()
        .map(|(label, suffixes)| {
            (
                label.to_string(),
                suffixes.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}

fn default_exclude() -> Vec<String> {
    vec![
        "**/node_modules/**".to_string(),
        "**/dist/**".to_string(),
        "**/build/**".to_string(),
        "**/target/**".to_string(),
        "**/*.min.js".to_string(),
    ]
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            extensions: default_extensions(),
            max_depth: default_max_depth(),
            grammar: Grammar::default(),
            code_folder: None,
            exclude: default_exclude(),
            extraction: ExtractorConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Language the label resolves to, used for files whose extension says
    /// nothing
    #[must_use]
    pub fn language_hint(&self) -> Language {
        Language::from_hint(&self.language)
    }

    /// Suffixes to scan for the configured label.
    ///
    /// Unlisted labels fall back to their canonical language (`ts` →
    /// `typescript`). An empty list means every file is a candidate.
    #[must_use]
    pub fn suffixes(&self) -> Vec<String> {
        let label = self.language.trim().to_lowercase();
        self.extensions
            .get(&label)
            .or_else(|| self.extensions.get(self.language_hint().as_str()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_is_default() {
        let config = AnalyzerConfig::from_toml_str("").unwrap();
        assert_eq!(config.language, "javascript");
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.grammar, Grammar::Component);
        assert!(!config.extraction.prefer_structured);
        assert_eq!(config.extraction.excluded_call_prefixes, vec!["console."]);
    }

    #[test]
    fn toml_overrides() {
        let config = AnalyzerConfig::from_toml_str(
            r#"
language = "python"
max_depth = 6
grammar = "mermaid"
code_folder = "app"
exclude = ["**/tests/**"]
prefer_structured = true

[extensions]
python = [".py", ".pyi"]
"#,
        )
        .unwrap();

        assert_eq!(config.grammar, Grammar::Graph);
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.code_folder.as_deref(), Some("app"));
        assert_eq!(config.exclude, vec!["**/tests/**"]);
        assert!(config.extraction.prefer_structured);
        assert_eq!(config.suffixes(), vec![".py", ".pyi"]);
    }

    #[test]
    fn suffixes_fall_back_to_canonical_label() {
        let config = AnalyzerConfig {
            language: "TS".to_string(),
            ..AnalyzerConfig::default()
        };
        assert_eq!(config.suffixes(), vec![".ts", ".tsx"]);

        let unknown = AnalyzerConfig {
            language: "cobol".to_string(),
            ..AnalyzerConfig::default()
        };
        assert!(unknown.suffixes().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AnalyzerConfig::load("/definitely/not/here/calltree.toml").unwrap_err();
        assert!(matches!(err, crate::AnalyzerError::IoError(_)));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = AnalyzerConfig::from_toml_str("max_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, crate::AnalyzerError::ConfigError(_)));
    }
}
