use std::path::Path;

/// Display label for a function name.
///
/// Underscores become spaces and every alphabetic run is title-cased: first
/// letter upper, the rest lower. Camel case is flattened (`formatDate` →
/// `Formatdate`); [`crate::repair`] restores the well-known names.
#[must_use]
pub fn title_label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for ch in name.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Last path component, or the whole string when there is none
#[must_use]
pub fn base_name(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// PlantUML package label: base name with dots replaced
#[must_use]
pub fn package_label(file: &str) -> String {
    base_name(file).replace('.', "_")
}

/// PlantUML alias: `fn_` plus the name with non-alphanumerics replaced
#[must_use]
pub fn alias(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    format!("fn_{sanitized}")
}
