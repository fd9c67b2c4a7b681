use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeeError {
    #[error("invalid bee configuration: {0}")]
    Config(String),

    #[error("persistence error: {0}")]
    Persist(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BeeResult<T> = Result<T, BeeError>;
