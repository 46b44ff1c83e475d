use thiserror::Error;

/// Errors raised by tuple and matrix operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("{operation} is only defined for vectors (w = 0), got w = {lhs_w} and w = {rhs_w}")]
    UnsupportedOperation {
        operation: &'static str,
        lhs_w: f64,
        rhs_w: f64,
    },
}

pub type MathResult<T> = Result<T, MathError>;
