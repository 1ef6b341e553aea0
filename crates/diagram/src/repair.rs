use crate::classify::NodeRole;
use crate::grammar::Grammar;
use once_cell::sync::Lazy;
use regex::Regex;

/// Capitalizations lost by title-casing camel-case names
const CAPITALIZATION_FIXES: &[(&str, &str)] = &[
    ("Formatdate", "FormatDate"),
    ("Handlesubmit", "HandleSubmit"),
];

static ARROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]*(-{2,}>)[ \t]*").expect("valid arrow regex"));

static HANDLER_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)handle|format|validat").expect("valid keyword regex"));

static BRANCH_NODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[\s*(?:if|else|switch|case)\b[^\]]*\]|\[[^\]]*\?\s*\]")
        .expect("valid branch regex")
});

/// Deterministic post-processing of rendered (or externally rewritten)
/// diagram text. Every line is rewritten on its own; the line count never
/// changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Repairer;

impl Repairer {
    #[must_use]
    pub fn repair(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| self.repair_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn repair_line(&self, line: &str) -> String {
        let mut out = line.to_string();

        for (wrong, right) in CAPITALIZATION_FIXES {
            if out.contains(wrong) {
                out = out.replace(wrong, right);
            }
        }

        if out.contains("->") {
            out = ARROW.replace_all(&out, " $1 ").into_owned();
        }

        let component = NodeRole::Component.stereotype();
        if out.contains(component) && (HANDLER_KEYWORD.is_match(&out) || BRANCH_NODE.is_match(&out))
        {
            out = out.replace(component, NodeRole::Utility.stereotype());
        }

        out
    }
}

/// Use an externally rewritten diagram only when it is still a document of
/// the requested grammar.
///
/// Surrounding Markdown code fences are dropped. Anything that does not open
/// with the grammar's marker is rejected in favor of `original`.
#[must_use]
pub fn accept_enhanced(original: &str, candidate: &str, grammar: Grammar) -> String {
    let cleaned = strip_code_fence(candidate);
    if grammar.opens(cleaned) {
        cleaned.to_string()
    } else {
        log::warn!(
            "Rejected rewritten {grammar} diagram (missing '{}' marker), keeping original",
            grammar.marker()
        );
        original.to_string()
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (```mermaid, ```plantuml)
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
