use thiserror::Error;

pub mod catalog;
pub mod manifest;
pub mod repository;
pub mod settings;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading {path}: {error}")]
    IO {
        path: String,
        error: std::io::Error,
    },
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid repository url `{0}`, expected <host>/<owner>/<name>[.git]")]
    InvalidRepositoryUrl(String),
    #[error("Duplicate bundled repository {0}")]
    DuplicateBundledRepository(String),
}
