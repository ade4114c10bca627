use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("shoal failed to fully decide within {steps} ticks")]
    NonConvergence { steps: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
