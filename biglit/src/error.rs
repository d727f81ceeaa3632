use thiserror::Error;

/// Failures reported by the digit engine and the fallible façade methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    /// The destination buffer cannot hold the result.
    #[error("destination holds {available} digits but the result needs {required}")]
    Capacity { required: usize, available: usize },
    /// Unsigned subtraction whose subtrahend exceeds the minuend.
    #[error("subtraction underflow")]
    Underflow,
    #[error("division by zero")]
    DivideByZero,
}

pub type Result<T> = std::result::Result<T, ArithError>;

impl ArithError {
    pub(crate) fn capacity(required: usize, available: usize) -> ArithError {
        log::debug!("capacity fault: need {} digits, have {}", required, available);
        ArithError::Capacity { required, available }
    }
}
