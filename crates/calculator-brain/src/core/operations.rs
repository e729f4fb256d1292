//! Operation registry: the fixed symbol table driving the brain
//!
//! Every button symbol maps to exactly one [`Operation`]. The table is plain
//! data; the brain matches on the variant instead of calling stored closures.

use serde::{Deserialize, Serialize};
use std::f64::consts;

/// Single-operand functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperation {
    /// Square root (√)
    SquareRoot,
    /// Cosine in radians (cos)
    Cosine,
    /// Sign change (±)
    Negate,
}

impl UnaryOperation {
    /// Returns the button symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::SquareRoot => "√",
            Self::Cosine => "cos",
            Self::Negate => "±",
        }
    }

    /// Applies the function. Domain errors surface as NaN.
    #[must_use]
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            Self::SquareRoot => operand.sqrt(),
            Self::Cosine => operand.cos(),
            Self::Negate => -operand,
        }
    }
}

/// Two-operand functions, applied as `first op second`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperation {
    /// Multiplication (✖️)
    Multiply,
    /// Division (➗)
    Divide,
    /// Subtraction (➖)
    Subtract,
    /// Addition (➕)
    Add,
}

impl BinaryOperation {
    /// Returns the button symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Multiply => "✖️",
            Self::Divide => "➗",
            Self::Subtract => "➖",
            Self::Add => "➕",
        }
    }

    /// Applies the function. Division by zero yields an infinity or NaN.
    #[must_use]
    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            Self::Multiply => first * second,
            Self::Divide => first / second,
            Self::Subtract => first - second,
            Self::Add => first + second,
        }
    }
}

/// A registry entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Fixed value replacing the accumulator
    Constant(f64),
    /// Function of the accumulator
    Unary(UnaryOperation),
    /// Function deferred until the second operand arrives
    Binary(BinaryOperation),
    /// Resolves the pending binary operation
    Equals,
}

/// Symbol table in keypad order
const REGISTRY: &[(&str, Operation)] = &[
    ("π", Operation::Constant(consts::PI)),
    ("e", Operation::Constant(consts::E)),
    ("√", Operation::Unary(UnaryOperation::SquareRoot)),
    ("cos", Operation::Unary(UnaryOperation::Cosine)),
    ("±", Operation::Unary(UnaryOperation::Negate)),
    ("✖️", Operation::Binary(BinaryOperation::Multiply)),
    ("➗", Operation::Binary(BinaryOperation::Divide)),
    ("➖", Operation::Binary(BinaryOperation::Subtract)),
    ("➕", Operation::Binary(BinaryOperation::Add)),
    ("=", Operation::Equals),
];

impl Operation {
    /// Looks up the operation registered for `symbol`
    #[must_use]
    pub fn lookup(symbol: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(key, _)| *key == symbol)
            .map(|(_, op)| *op)
    }

    /// Iterates over every registered symbol
    pub fn symbols() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(key, _)| *key)
    }

    /// Returns true if `symbol` is registered
    #[must_use]
    pub fn is_registered(symbol: &str) -> bool {
        Self::lookup(symbol).is_some()
    }
}
