use thiserror::Error;

/// Failure taxonomy of the scoring engine.
///
/// Only two situations are fatal: a bad weight/threshold configuration and
/// an empty or malformed required input. Missing evidence (no GitHub, no
/// experience entries) is never an error; those categories score zero with
/// a reduced confidence level instead.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
