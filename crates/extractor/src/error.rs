use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported language for structured extraction: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to load grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Failed to parse {file}")]
    Parse { file: String },
}

impl ExtractError {
    pub fn unsupported_language(name: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(name.into())
    }

    pub fn parse(file: impl Into<String>) -> Self {
        Self::Parse { file: file.into() }
    }
}
