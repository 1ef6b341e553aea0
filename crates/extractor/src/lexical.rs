use crate::types::{FunctionKind, FunctionRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Call prefix dropped by default (logging namespace)
pub const DEFAULT_EXCLUDED_CALL_PREFIX: &str = "console.";

/// Words that look like `name(` but never name a function or a call target
const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "catch", "try", "finally", "return",
    "function", "typeof", "instanceof", "new", "delete", "void", "async", "await", "yield",
    "with", "throw", "in", "of", "super", "import", "export", "class", "constructor",
];

struct DefinitionPattern {
    label: &'static str,
    kind: FunctionKind,
    regex: Regex,
}

// Priority order matters: records are emitted pattern by pattern.
static DEFINITION_PATTERNS: Lazy<Vec<DefinitionPattern>> = Lazy::new(|| {
    vec![
        DefinitionPattern {
            label: "function_keyword",
            kind: FunctionKind::FunctionDeclaration,
            regex: Regex::new(r"\bfunction\s*\*?\s*([A-Za-z_$][\w$]*)\s*\(")
                .expect("function keyword pattern"),
        },
        DefinitionPattern {
            label: "arrow_binding",
            kind: FunctionKind::ArrowFunction,
            regex: Regex::new(
                r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*(?::\s*[^=]+)?=\s*(?:async\s+)?(?:\([^)]*\)|[A-Za-z_$][\w$]*)\s*(?::\s*[^=]+)?=>",
            )
            .expect("arrow binding pattern"),
        },
        DefinitionPattern {
            label: "method_style",
            kind: FunctionKind::MethodDefinition,
            regex: Regex::new(
                r"(?m)^[ \t]*(?:(?:public|private|protected|static|async|get|set)\s+)*([A-Za-z_$][\w$]*)\s*\([^)]*\)\s*(?::\s*[^{;]+)?\{",
            )
            .expect("method style pattern"),
        },
    ]
});

static CALL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)\s*\(").expect("call pattern")
});

/// Pattern-based extraction over raw text.
///
/// Calls for each definition are collected from the definition's start to the
/// end of the file, so a function also "calls" whatever later siblings call.
/// Brace matching is deliberately not attempted.
#[derive(Debug, Clone)]
pub struct LexicalExtractor {
    excluded_prefixes: Vec<String>,
}

impl Default for LexicalExtractor {
    fn default() -> Self {
        Self::new(vec![DEFAULT_EXCLUDED_CALL_PREFIX.to_string()])
    }
}

impl LexicalExtractor {
    #[must_use]
    pub fn new(excluded_prefixes: Vec<String>) -> Self {
        Self { excluded_prefixes }
    }

    #[must_use]
    pub fn extract(&self, source: &str, file: &str) -> Vec<FunctionRecord> {
        let mut records = Vec::new();

        for pattern in DEFINITION_PATTERNS.iter() {
            for caps in pattern.regex.captures_iter(source) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let name = name.as_str();
                if is_keyword(name) {
                    continue;
                }

                let mut record =
                    FunctionRecord::new(name, file, line_at(source, whole.start()), pattern.kind);
                record.calls = self.calls_from(&source[whole.start()..], name);
                log::trace!(
                    "{file}:{} {} `{name}` ({} calls)",
                    record.line,
                    pattern.label,
                    record.calls.len()
                );
                records.push(record);
            }
        }

        records
    }

    fn calls_from(&self, text: &str, own_name: &str) -> BTreeSet<String> {
        CALL_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|callee| *callee != own_name && !is_keyword(callee))
            .filter(|callee| {
                !self
                    .excluded_prefixes
                    .iter()
                    .any(|prefix| callee.starts_with(prefix.as_str()))
            })
            .map(str::to_string)
            .collect()
    }
}

fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// 1-based line of a byte offset
fn line_at(source: &str, offset: usize) -> usize {
    source.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
