use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradientError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}
