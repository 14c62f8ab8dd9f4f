use thiserror::Error;

/// Failures raised by [`LogValue`](crate::LogValue) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LogValueError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("value is not a number")]
    NotANumber,
}

/// Failures raised by [`PrimalityTester`](crate::PrimalityTester).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrimalityError {
    #[error("{n} is outside the deterministic range (must be below {bound})")]
    DomainExceeded { n: u64, bound: u64 },
}
