use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Near-singular pivot at elimination step {step}: |pivot|^2 = {norm_sqr:e}")]
    NearSingularPivot { step: usize, norm_sqr: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ProbeResult<T> = Result<T, ProbeError>;
