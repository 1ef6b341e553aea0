use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use calltree_extractor::Language;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// One source file handed to the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Forward-slash path relative to the scanned folder
    pub path: String,
    pub text: String,
    pub language: Language,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>, language: Language) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            language,
        }
    }
}

/// Walks a project folder honoring `.gitignore`, keeping files with one of
/// the configured suffixes that no exclude glob matches.
pub struct FileScanner {
    root: PathBuf,
    suffixes: Vec<String>,
    exclude: GlobSet,
    fallback_language: Language,
}

impl FileScanner {
    /// Scanner over every file under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffixes: Vec::new(),
            exclude: GlobSet::empty(),
            fallback_language: Language::Unknown,
        }
    }

    /// Scanner for `root` (narrowed to `code_folder` when set)
    pub fn from_config(root: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<Self> {
        let root = resolve_root(root.as_ref(), config.code_folder.as_deref())?;
        let mut scanner = Self::new(root)
            .with_suffixes(config.suffixes())
            .with_exclude(&config.exclude)?;
        scanner.fallback_language = config.language_hint();
        Ok(scanner)
    }

    #[must_use]
    pub fn with_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn with_exclude(mut self, patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }
        self.exclude = builder.build()?;
        Ok(self)
    }

    /// Matching file paths, sorted by name within each directory
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(AnalyzerError::InvalidPath(self.root.display().to_string()));
        }

        let walker = WalkBuilder::new(&self.root)
            .git_ignore(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        log::debug!("Scanned {} candidate files under {}", files.len(), self.root.display());
        Ok(files)
    }

    /// Read every matching file. Files that are not UTF-8 text are skipped.
    pub fn read_sources(&self) -> Result<Vec<SourceFile>> {
        let mut sources = Vec::new();

        for path in self.scan()? {
            match std::fs::read_to_string(&path) {
                Ok(text) => {
                    let relative = self.normalize_path(&path);
                    let language = match Language::from_path(&path) {
                        Language::Unknown => self.fallback_language,
                        detected => detected,
                    };
                    sources.push(SourceFile::new(relative, text, language));
                }
                Err(e) => log::warn!("Failed to read {}: {e}", path.display()),
            }
        }

        Ok(sources)
    }

    fn should_process(&self, path: &Path) -> bool {
        let relative = self.normalize_path(path);
        if self.exclude.is_match(&relative) {
            return false;
        }
        self.suffixes.is_empty()
            || self
                .suffixes
                .iter()
                .any(|suffix| relative.ends_with(suffix.as_str()))
    }

    fn normalize_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let mut normalized = relative.to_string_lossy().to_string();
        if normalized.contains('\\') {
            normalized = normalized.replace('\\', "/");
        }
        normalized
    }
}

/// `root/code_folder`, refusing folders that climb out of `root`
fn resolve_root(root: &Path, code_folder: Option<&str>) -> Result<PathBuf> {
    let Some(folder) = code_folder.map(str::trim).filter(|f| !f.is_empty()) else {
        return Ok(root.to_path_buf());
    };

    let folder_path = Path::new(folder);
    let escapes = folder_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AnalyzerError::InvalidPath(format!(
            "code folder must stay inside the project: {folder}"
        )));
    }

    Ok(root.join(folder_path))
}
