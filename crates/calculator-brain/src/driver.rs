//! Calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against any front end that can press buttons and report its display.

use crate::core::CalcResult;
use crate::session::CalculatorSession;

/// Button-level interface to a calculator front end
pub trait CalculatorDriver {
    /// Presses a keypad button by label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Returns the display text
    fn display(&self) -> String;

    /// Returns the brain's current result
    fn result(&self) -> Option<f64>;

    /// Discards all state
    fn reset(&mut self);

    /// Presses each label in turn
    fn press_all(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }
}

impl CalculatorDriver for CalculatorSession {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        CalculatorSession::press(self, label)
    }

    fn display(&self) -> String {
        CalculatorSession::display(self).to_string()
    }

    fn result(&self) -> Option<f64> {
        self.brain().result()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

// ===== Shared scenario checks =====

/// Verifies one deferred computation per binary operation
pub fn verify_binary_operations<D: CalculatorDriver>(driver: &mut D) {
    let cases = [("✖️", 20.0), ("➗", 0.8), ("➖", -1.0), ("➕", 9.0)];
    for (symbol, expected) in cases {
        driver.reset();
        driver.press_all(&["4", symbol, "5", "="]).unwrap();
        assert_eq!(driver.result(), Some(expected), "4 {symbol} 5");
    }
}

/// Verifies constants and unary operations
pub fn verify_unary_and_constants<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press("π").unwrap();
    let pi = driver.result().unwrap();
    assert!((pi - 3.14159265358979).abs() < 1e-12);

    driver.reset();
    driver.press_all(&["9", "√"]).unwrap();
    assert_eq!(driver.display(), "3");

    driver.press("±").unwrap();
    assert_eq!(driver.display(), "-3");
}

/// Verifies IEEE special values reach the display
pub fn verify_special_values<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&["5", "➗", "0", "="]).unwrap();
    assert_eq!(driver.result(), Some(f64::INFINITY));
    assert_eq!(driver.display(), "inf");
}

/// Verifies requests with missing state are ignored
pub fn verify_ignored_requests<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press("=").unwrap();
    assert_eq!(driver.result(), None);

    driver.press_all(&["➕", "cos"]).unwrap();
    assert_eq!(driver.result(), None);

    assert!(driver.press("??").is_err());
    assert_eq!(driver.result(), None);
}
