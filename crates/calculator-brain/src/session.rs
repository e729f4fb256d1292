//! Keypad session: display text and digit entry in front of the brain
//!
//! Digits accumulate as text until an operation button is pressed, at which
//! point the text becomes the brain's operand. After each operation the
//! display shows the brain's result when it has one.

use crate::core::{CalcError, CalcResult, CalculatorBrain};
use crate::keypad::{ButtonKind, Keypad};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Display text shown before anything is pressed
pub const INITIAL_DISPLAY: &str = "0";

/// A calculator as seen from its buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSession {
    brain: CalculatorBrain,
    display: String,
    typing: bool,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Creates a session with a fresh brain
    #[must_use]
    pub fn new() -> Self {
        Self {
            brain: CalculatorBrain::new(),
            display: INITIAL_DISPLAY.to_string(),
            typing: false,
        }
    }

    /// Types a digit or decimal point.
    ///
    /// The first digit after an operation replaces the display; later ones
    /// append to it.
    pub fn touch_digit(&mut self, digit: char) {
        if self.typing {
            self.display.push(digit);
        } else {
            self.display = digit.to_string();
            self.typing = true;
        }
        trace!(display = %self.display, "digit");
    }

    /// Commits any typed number, then forwards `symbol` to the brain.
    ///
    /// Typed text that is not a number is discarded and `symbol` is not
    /// performed; the display falls back to the brain's result.
    pub fn perform_operation(&mut self, symbol: &str) -> CalcResult<()> {
        if self.typing {
            self.typing = false;
            match self.display_value() {
                Ok(operand) => self.brain.set_operand(operand),
                Err(err) => {
                    debug!(display = %self.display, "discarding invalid entry");
                    self.restore_display();
                    return Err(err);
                }
            }
        }

        self.brain.perform_operation(symbol);

        if let Some(result) = self.brain.result() {
            self.set_display_value(result);
        }
        Ok(())
    }

    /// Presses the keypad button labelled `label`
    pub fn press(&mut self, label: &str) -> CalcResult<()> {
        let button = Keypad::new()
            .find(label)
            .copied()
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;

        match button.kind {
            ButtonKind::Digit(ch) => {
                self.touch_digit(ch);
                Ok(())
            }
            ButtonKind::Operation => self.perform_operation(button.label),
        }
    }

    /// Parses the display text as a number
    pub fn display_value(&self) -> CalcResult<f64> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidNumber(self.display.clone()))
    }

    fn set_display_value(&mut self, value: f64) {
        self.display = format_value(value);
    }

    fn restore_display(&mut self) {
        match self.brain.result() {
            Some(result) => self.set_display_value(result),
            None => self.display = INITIAL_DISPLAY.to_string(),
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns true while digits are being typed
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Returns the underlying brain
    #[must_use]
    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }
}

/// Formats a value for the display
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}
