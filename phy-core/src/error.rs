//! Runtime error type.
//!
//! Dimension mismatches never show up here: they are rejected by the type checker. Only conditions that depend
//! on values known at execution time are reported through [`QuantityError`].

/// Result type for fallible quantity operations.
pub type Result<T> = core::result::Result<T, QuantityError>;

/// Error returned by value-dependent quantity operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum QuantityError {
    /// The divisor quantity had value zero.
    #[error("division by a zero-valued quantity")]
    DivisionByZero,

    /// The result does not fit in an `i64`.
    #[error("quantity value overflow")]
    Overflow,
}
