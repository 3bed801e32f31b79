use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardzError {
    /// A draft card was rejected before touching the store.
    #[error("{0}")]
    Validation(String),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Duplicate card id in seed data: {0}")]
    DuplicateId(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl CardzError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CardzError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, CardzError>;
