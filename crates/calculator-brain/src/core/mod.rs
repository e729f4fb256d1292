//! Core calculator module: the evaluation engine and its operation registry
//!
//! The engine itself never fails. [`CalcError`] belongs to the keypad layer
//! built on top of it, where typed text and button labels come from outside.

pub mod brain;
pub mod float_repr;
pub mod operations;

pub use brain::{CalculatorBrain, PendingBinaryOperation};
pub use operations::{BinaryOperation, Operation, UnaryOperation};

use thiserror::Error;

/// Result type for keypad-level operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while translating input into brain calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The label is not a button on the keypad
    #[error("Unknown button: {0}")]
    UnknownButton(String),

    /// The typed display text is not a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}
