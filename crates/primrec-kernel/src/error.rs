//! Error types for kernel construction and evaluation.

/// Errors arising from contract violations or exhausted evaluation budgets.
///
/// Construction errors (`ArityMismatch` from combinator constructors,
/// `ProjectionOutOfRange`) are reported before any evaluation happens.
/// `StepBudgetExceeded` is the one runtime failure: it is recoverable and
/// carries no partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrfError {
    /// Argument count or operand arity does not match a declared arity.
    #[error("arity mismatch for {function}: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// A projection was constructed with an index outside `1..=arity`.
    #[error("projection index {index} outside 1..={arity}")]
    ProjectionOutOfRange { arity: usize, index: usize },

    /// An operand exceeds the agreed input ceiling.
    ///
    /// The kernel never raises this on its own; callers apply
    /// [`check_operand`](crate::budget::check_operand) at the boundary.
    #[error("operand {value} exceeds the input ceiling {ceiling}")]
    OperandOutOfRange { value: u64, ceiling: u64 },

    /// An evaluation charged more loop iterations than its budget allows.
    #[error("step budget exceeded: limit {limit}")]
    StepBudgetExceeded { limit: u64 },
}

/// Result alias for kernel operations.
pub type PrfResult<T> = Result<T, PrfError>;
