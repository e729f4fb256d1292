//! Calculator Brain - accumulator and pending-operation engine
//!
//! A four-function calculator engine driven by button symbols. The brain
//! holds an optional accumulator and at most one pending binary operation;
//! every request is an immediate state transition and none of them fail.
//!
//! # Example
//!
//! ```rust
//! use calculator_brain::prelude::*;
//!
//! let mut brain = CalculatorBrain::new();
//! brain.set_operand(4.0);
//! brain.perform_operation("✖️");
//! brain.set_operand(5.0);
//! brain.perform_operation("=");
//! assert_eq!(brain.result(), Some(20.0));
//!
//! // Keypad-level session with digit entry
//! let mut session = CalculatorSession::new();
//! for label in ["9", "√"] {
//!     session.press(label).unwrap();
//! }
//! assert_eq!(session.display(), "3");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        BinaryOperation, CalcError, CalcResult, CalculatorBrain, Operation,
        PendingBinaryOperation, UnaryOperation,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};
    pub use crate::session::CalculatorSession;
}
