//! Node roles for the component grammar.
//!
//! Rules are pure predicates over `(file path, function name)` evaluated in
//! order; the first match wins and anything unmatched is a service.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// UI component, page or hook
    Component,
    /// Formatter, parser, validator, event handler or helper
    Utility,
    Service,
}

impl NodeRole {
    /// PlantUML stereotype
    #[must_use]
    pub const fn stereotype(self) -> &'static str {
        match self {
            Self::Component => "<<component>>",
            Self::Utility => "<<utility>>",
            Self::Service => "<<service>>",
        }
    }
}

struct RoleRule {
    role: NodeRole,
    applies: fn(&str, &str) -> bool,
}

const RULES: &[RoleRule] = &[
    RoleRule {
        role: NodeRole::Component,
        applies: looks_like_ui,
    },
    RoleRule {
        role: NodeRole::Utility,
        applies: looks_like_utility,
    },
];

const UI_PATH_MARKERS: &[&str] = &["component", "/pages/", "/hooks/"];
const APP_ROUTE_FILES: &[&str] = &["page", "layout"];
const UTILITY_PATH_MARKERS: &[&str] = &["util", "helper", "/lib/"];
const UTILITY_NAME_MARKERS: &[&str] = &["format", "parse", "valid", "handle"];

#[must_use]
pub fn classify(path: &str, name: &str) -> NodeRole {
    RULES
        .iter()
        .find(|rule| (rule.applies)(path, name))
        .map_or(NodeRole::Service, |rule| rule.role)
}

fn looks_like_ui(path: &str, name: &str) -> bool {
    let path = normalized(path);
    UI_PATH_MARKERS.iter().any(|marker| path.contains(marker))
        || is_app_route_file(&path)
        || is_hook(name)
        || is_pascal_case(name)
}

fn looks_like_utility(path: &str, name: &str) -> bool {
    let path = normalized(path);
    let name = name.to_lowercase();
    UTILITY_PATH_MARKERS.iter().any(|marker| path.contains(marker))
        || UTILITY_NAME_MARKERS.iter().any(|marker| name.contains(marker))
}

/// Lowercase, forward slashes, anchored with a leading `/` so that
/// `pages/x.js` matches `/pages/`.
fn normalized(path: &str) -> String {
    let path = path.replace('\\', "/").to_lowercase();
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

// Next.js app router: app/**/page.tsx, app/**/layout.jsx
fn is_app_route_file(path: &str) -> bool {
    if !path.contains("/app/") {
        return false;
    }
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| APP_ROUTE_FILES.contains(&stem))
}

fn is_hook(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase) && name.chars().any(char::is_lowercase)
}
