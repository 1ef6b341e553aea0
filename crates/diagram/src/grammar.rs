use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output diagram syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// Mermaid flowchart (boxed graph)
    #[serde(alias = "mermaid")]
    Graph,
    /// PlantUML component diagram
    #[default]
    #[serde(alias = "plantuml")]
    Component,
}

impl Grammar {
    /// First line of every document in this grammar
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Graph => "graph TD",
            Self::Component => "@startuml",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "mermaid",
            Self::Component => "plantuml",
        }
    }

    /// Whether `text` opens like a document of this grammar.
    ///
    /// Mermaid accepts any direction (`graph LR`, `flowchart TD`).
    #[must_use]
    pub fn opens(self, text: &str) -> bool {
        let Some(first) = text.lines().map(str::trim).find(|line| !line.is_empty()) else {
            return false;
        };
        match self {
            Self::Graph => {
                first == "graph"
                    || first.starts_with("graph ")
                    || first.starts_with("flowchart")
            }
            Self::Component => first.starts_with("@startuml"),
        }
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "graph" | "mermaid" | "flowchart" => Ok(Self::Graph),
            "component" | "plantuml" | "uml" => Ok(Self::Component),
            other => Err(format!(
                "unknown grammar '{other}' (expected mermaid or plantuml)"
            )),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered diagram text, one entry per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    grammar: Grammar,
    lines: Vec<String>,
}

impl DiagramDocument {
    #[must_use]
    pub const fn new(grammar: Grammar, lines: Vec<String>) -> Self {
        Self { grammar, lines }
    }

    #[must_use]
    pub const fn grammar(&self) -> Grammar {
        self.grammar
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DiagramDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
