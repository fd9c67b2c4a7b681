use ap_bee::BeeError;
use ap_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("bee error: {0}")]
    Bee(#[from] BeeError),
}

pub type SimResult<T> = Result<T, SimError>;
