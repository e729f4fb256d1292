//! The evaluation engine
//!
//! State is two independent optionals: the accumulator and at most one
//! pending binary operation. Every request either transitions that state or
//! is silently ignored; nothing here returns an error.

use crate::core::operations::{BinaryOperation, Operation};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A binary operation waiting for its second operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingBinaryOperation {
    /// The deferred function
    pub operation: BinaryOperation,
    /// Captured when the binary symbol was pressed
    #[serde(with = "crate::core::float_repr")]
    pub first_operand: f64,
}

impl PendingBinaryOperation {
    /// Applies the deferred function with `second_operand` on the right
    #[must_use]
    pub fn perform(&self, second_operand: f64) -> f64 {
        self.operation.apply(self.first_operand, second_operand)
    }
}

/// Accumulator plus pending-operation state machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorBrain {
    #[serde(with = "crate::core::float_repr::option")]
    accumulator: Option<f64>,
    pending: Option<PendingBinaryOperation>,
}

impl CalculatorBrain {
    /// Creates a brain with no accumulator and nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the accumulator
    pub fn set_operand(&mut self, operand: f64) {
        trace!(operand, "set operand");
        self.accumulator = Some(operand);
    }

    /// Performs the operation registered for `symbol`.
    ///
    /// Unknown symbols, unary or binary requests without an accumulator, and
    /// equals without a complete pending operation are no-ops.
    pub fn perform_operation(&mut self, symbol: &str) {
        let Some(operation) = Operation::lookup(symbol) else {
            debug!(symbol, "ignoring unknown symbol");
            return;
        };

        match operation {
            Operation::Constant(value) => {
                trace!(symbol, value, "constant");
                self.accumulator = Some(value);
            }
            Operation::Unary(function) => match self.accumulator {
                Some(operand) => {
                    let value = function.apply(operand);
                    trace!(symbol, operand, value, "unary");
                    self.accumulator = Some(value);
                }
                None => debug!(symbol, "unary operation without accumulator"),
            },
            Operation::Binary(function) => match self.accumulator.take() {
                Some(first_operand) => {
                    trace!(symbol, first_operand, "binary pending");
                    self.pending = Some(PendingBinaryOperation {
                        operation: function,
                        first_operand,
                    });
                }
                None => debug!(symbol, "binary operation without accumulator"),
            },
            Operation::Equals => self.perform_pending_binary_operation(),
        }
    }

    fn perform_pending_binary_operation(&mut self) {
        match (self.pending, self.accumulator) {
            (Some(pending), Some(second_operand)) => {
                let value = pending.perform(second_operand);
                trace!(
                    first_operand = pending.first_operand,
                    second_operand,
                    value,
                    "resolved"
                );
                self.accumulator = Some(value);
                self.pending = None;
            }
            (None, _) => debug!("equals without pending operation"),
            (Some(_), None) => debug!("equals without second operand"),
        }
    }

    /// Returns the accumulator
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        self.accumulator
    }

    /// Returns the pending binary operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<PendingBinaryOperation> {
        self.pending
    }

    /// Returns true while a binary operation awaits resolution
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts;

    fn run(brain: &mut CalculatorBrain, operand: f64, symbols: &[&str]) {
        brain.set_operand(operand);
        for symbol in symbols {
            brain.perform_operation(symbol);
        }
    }

    // ===== Initial state =====

    #[test]
    fn test_new_is_empty() {
        let brain = CalculatorBrain::new();
        assert_eq!(brain.result(), None);
        assert!(!brain.is_pending());
        assert_eq!(brain, CalculatorBrain::default());
    }

    #[test]
    fn test_set_operand() {
        let mut brain = CalculatorBrain::new();
        brain.set_operand(42.0);
        assert_eq!(brain.result(), Some(42.0));
        brain.set_operand(-1.5);
        assert_eq!(brain.result(), Some(-1.5));
    }

    // ===== Constants =====

    #[test]
    fn test_pi_on_fresh_brain() {
        let mut brain = CalculatorBrain::new();
        brain.perform_operation("π");
        let result = brain.result().unwrap();
        assert!((result - 3.14159265358979).abs() < 1e-12);
    }

    #[test]
    fn test_constant_overwrites_accumulator() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 100.0, &["e"]);
        assert_eq!(brain.result(), Some(consts::E));
    }

    #[test]
    fn test_constant_keeps_pending_operation() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 2.0, &["✖️", "π"]);
        assert!(brain.is_pending());
        brain.perform_operation("=");
        assert_eq!(brain.result(), Some(2.0 * consts::PI));
    }

    // ===== Unary operations =====

    #[test]
    fn test_square_root() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 9.0, &["√"]);
        assert_eq!(brain.result(), Some(3.0));
    }

    #[test]
    fn test_cosine() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 0.0, &["cos"]);
        assert_eq!(brain.result(), Some(1.0));
    }

    #[test]
    fn test_negate() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 7.0, &["±"]);
        assert_eq!(brain.result(), Some(-7.0));
        brain.perform_operation("±");
        assert_eq!(brain.result(), Some(7.0));
    }

    #[test]
    fn test_unary_without_accumulator_is_noop() {
        let mut brain = CalculatorBrain::new();
        brain.perform_operation("√");
        assert_eq!(brain.result(), None);

        run(&mut brain, 3.0, &["➕", "±"]);
        assert_eq!(brain.result(), None);
        assert!(brain.is_pending());
    }

    #[test]
    fn test_square_root_of_negative_is_nan() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, -4.0, &["√"]);
        assert!(brain.result().unwrap().is_nan());
    }

    // ===== Binary operations =====

    #[test]
    fn test_multiply_scenario() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 4.0, &["✖️"]);
        run(&mut brain, 5.0, &["="]);
        assert_eq!(brain.result(), Some(20.0));
        assert!(!brain.is_pending());
    }

    #[test]
    fn test_binary_consumes_accumulator() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 8.0, &["➖"]);
        assert_eq!(brain.result(), None);
        assert_eq!(
            brain.pending(),
            Some(PendingBinaryOperation {
                operation: BinaryOperation::Subtract,
                first_operand: 8.0,
            })
        );
    }

    #[test]
    fn test_operand_order() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 10.0, &["➖"]);
        run(&mut brain, 3.0, &["="]);
        assert_eq!(brain.result(), Some(7.0));

        run(&mut brain, 1.0, &["➗"]);
        run(&mut brain, 4.0, &["="]);
        assert_eq!(brain.result(), Some(0.25));
    }

    #[test]
    fn test_divide_by_zero_is_infinity() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 5.0, &["➗"]);
        run(&mut brain, 0.0, &["="]);
        assert_eq!(brain.result(), Some(f64::INFINITY));
    }

    #[test]
    fn test_binary_without_accumulator_is_swallowed() {
        let mut brain = CalculatorBrain::new();
        brain.perform_operation("➕");
        assert!(!brain.is_pending());

        run(&mut brain, 6.0, &["✖️", "➕"]);
        let pending = brain.pending().unwrap();
        assert_eq!(pending.operation, BinaryOperation::Multiply);
    }

    #[test]
    fn test_last_binary_wins() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 2.0, &["✖️"]);
        run(&mut brain, 3.0, &["➕"]);
        let pending = brain.pending().unwrap();
        assert_eq!(pending.operation, BinaryOperation::Add);
        assert_eq!(pending.first_operand, 3.0);

        run(&mut brain, 4.0, &["="]);
        assert_eq!(brain.result(), Some(7.0));
    }

    #[test]
    fn test_chained_after_resolution() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 2.0, &["➕"]);
        run(&mut brain, 3.0, &["=", "✖️"]);
        run(&mut brain, 4.0, &["="]);
        assert_eq!(brain.result(), Some(20.0));
    }

    // ===== Equals =====

    #[test]
    fn test_equals_on_fresh_brain() {
        let mut brain = CalculatorBrain::new();
        brain.perform_operation("=");
        assert_eq!(brain.result(), None);
        assert!(!brain.is_pending());
    }

    #[test]
    fn test_equals_twice_is_stable() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 4.0, &["➕"]);
        run(&mut brain, 5.0, &["="]);
        brain.perform_operation("=");
        assert_eq!(brain.result(), Some(9.0));
    }

    #[test]
    fn test_equals_without_second_operand_keeps_pending() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 4.0, &["➕", "="]);
        assert_eq!(brain.result(), None);
        assert!(brain.is_pending());
    }

    #[test]
    fn test_equals_without_pending_keeps_accumulator() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 12.0, &["="]);
        assert_eq!(brain.result(), Some(12.0));
    }

    // ===== Unknown symbols =====

    #[test]
    fn test_unknown_symbol_is_noop() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 3.0, &["➕"]);
        let before = brain.clone();
        brain.perform_operation("??");
        brain.perform_operation("");
        assert_eq!(brain, before);
    }

    // ===== Serialization =====

    #[test]
    fn test_snapshot_json() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 4.0, &["✖️"]);
        let json = serde_json::to_value(&brain).unwrap();
        assert_eq!(json["accumulator"], serde_json::Value::Null);
        assert_eq!(json["pending"]["operation"], "Multiply");
        assert_eq!(json["pending"]["first_operand"], 4.0);
    }

    #[test]
    fn test_snapshot_keeps_infinite_accumulator() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 5.0, &["➗"]);
        run(&mut brain, 0.0, &["="]);
        let json = serde_json::to_string(&brain).unwrap();
        assert_eq!(json, r#"{"accumulator":"inf","pending":null}"#);

        let back: CalculatorBrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back.result(), Some(f64::INFINITY));
        assert_eq!(back, brain);
    }

    #[test]
    fn test_snapshot_round_trips_nan_operand() {
        let mut brain = CalculatorBrain::new();
        run(&mut brain, 1.0, &["±", "√", "➕"]);
        let json = serde_json::to_string(&brain).unwrap();
        assert!(json.contains(r#""first_operand":"NaN""#));

        let back: CalculatorBrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back.result(), None);
        let pending = back.pending().unwrap();
        assert_eq!(pending.operation, BinaryOperation::Add);
        assert!(pending.first_operand.is_nan());
    }
}
