use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbTestError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate experiment: {0}")]
    DegenerateExperiment(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

pub type AbTestResult<T> = Result<T, AbTestError>;
