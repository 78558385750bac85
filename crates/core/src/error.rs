//! Shared-kernel error model.

use thiserror::Error;

/// Result type used across the shared kernel.
pub type KernelResult<T> = Result<T, KernelError>;

/// Shared-kernel error.
///
/// The taxonomy is deliberately minimal: the only failure this library can
/// produce is a cross-type value-object comparison, which signals a logic
/// error at the call site rather than a recoverable condition. Everything
/// else (absent operands, out-of-range pages, empty sources) is a normal
/// outcome with a well-defined value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Equality was attempted between value objects of differing concrete types.
    #[error("invalid comparison of value objects of different types: {left} and {right}")]
    InvalidComparison {
        left: &'static str,
        right: &'static str,
    },
}

impl KernelError {
    pub fn invalid_comparison(left: &'static str, right: &'static str) -> Self {
        Self::InvalidComparison { left, right }
    }
}
