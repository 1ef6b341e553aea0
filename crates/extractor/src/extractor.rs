use crate::error::Result;
use crate::language::{ExtractionMode, Language};
use crate::lexical::{LexicalExtractor, DEFAULT_EXCLUDED_CALL_PREFIX};
use crate::structured::StructuredExtractor;
use crate::types::FunctionRecord;
use serde::{Deserialize, Serialize};

/// Extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Use tree-sitter for JavaScript/TypeScript instead of the lexical patterns
    #[serde(default)]
    pub prefer_structured: bool,

    /// Lexical-mode calls starting with any of these are ignored
    #[serde(default = "default_excluded_call_prefixes")]
    pub excluded_call_prefixes: Vec<String>,
}

fn default_excluded_call_prefixes() -> Vec<String> {
    vec![DEFAULT_EXCLUDED_CALL_PREFIX.to_string()]
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            prefer_structured: false,
            excluded_call_prefixes: default_excluded_call_prefixes(),
        }
    }
}

/// Turns file text into function records, one strategy per language family
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    #[must_use]
    pub const fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn mode_for(&self, language: Language) -> ExtractionMode {
        match language {
            Language::JavaScript | Language::TypeScript if self.config.prefer_structured => {
                ExtractionMode::Structured
            }
            _ => language.default_mode(),
        }
    }

    /// Extract records, treating any parse failure as "no records".
    ///
    /// The failure is logged; one bad file never stops an analysis.
    #[must_use]
    pub fn extract(&self, source: &str, file: &str, language: Language) -> Vec<FunctionRecord> {
        match self.try_extract(source, file, language) {
            Ok(records) => {
                log::debug!("{file}: {} functions ({language})", records.len());
                records
            }
            Err(e) => {
                log::warn!("Skipping {file}: {e}");
                Vec::new()
            }
        }
    }

    /// Same as [`Extractor::extract`] but surfaces structured-mode failures
    pub fn try_extract(
        &self,
        source: &str,
        file: &str,
        language: Language,
    ) -> Result<Vec<FunctionRecord>> {
        if source.trim().is_empty() {
            return Ok(Vec::new());
        }

        match self.mode_for(language) {
            ExtractionMode::Structured => {
                let jsx = file.ends_with(".tsx");
                StructuredExtractor::new(language, jsx)?.extract(source, file)
            }
            ExtractionMode::Lexical => {
                let lexical = LexicalExtractor::new(self.config.excluded_call_prefixes.clone());
                Ok(lexical.extract(source, file))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefer_structured_only_affects_script_languages() {
        let extractor = Extractor::new(ExtractorConfig {
            prefer_structured: true,
            ..Default::default()
        });
        assert_eq!(
            extractor.mode_for(Language::TypeScript),
            ExtractionMode::Structured
        );
        assert_eq!(extractor.mode_for(Language::Unknown), ExtractionMode::Lexical);
        assert_eq!(
            Extractor::default().mode_for(Language::JavaScript),
            ExtractionMode::Lexical
        );
    }

    #[test]
    fn blank_input_yields_nothing() {
        let extractor = Extractor::default();
        assert!(extractor.extract("", "a.py", Language::Python).is_empty());
        assert!(extractor.extract("\n\n  ", "a.js", Language::JavaScript).is_empty());
    }
}
