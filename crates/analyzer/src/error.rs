use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("No functions found in {files} {language} file(s)")]
    NoFunctions { language: String, files: usize },

    #[error("Invalid project path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Invalid exclude pattern: {0}")]
    GlobError(#[from] globset::Error),
}

impl AnalyzerError {
    pub fn no_functions(language: impl Into<String>, files: usize) -> Self {
        Self::NoFunctions {
            language: language.into(),
            files,
        }
    }
}
