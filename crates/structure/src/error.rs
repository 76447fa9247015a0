use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid SourceKitten structure in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to parse Swift source: {0}")]
    Parse(String),
    #[error("Path not found: {0}")]
    NotFound(String),
    #[error("Failed to load Swift grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

pub type Result<T> = std::result::Result<T, StructureError>;
