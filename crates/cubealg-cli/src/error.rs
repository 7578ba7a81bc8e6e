use cubealg::core::io::traits::PersistenceError;
use cubealg::core::models::ids::AlgorithmId;
use cubealg::engine::error::FormError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Algorithm {0} not found")]
    NotFound(AlgorithmId),

    #[error("The change was applied but could not be saved: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
