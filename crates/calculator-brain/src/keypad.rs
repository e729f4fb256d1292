//! Keypad layout
//!
//! The fixed set of buttons a front end offers. Digit buttons feed the
//! session's typing buffer; operation buttons carry a registry symbol.
//!
//! ```text
//! [ π ] [ e ] [ √ ] [ cos ]
//! [ 7 ] [ 8 ] [ 9 ] [ ➗ ]
//! [ 4 ] [ 5 ] [ 6 ] [ ✖️ ]
//! [ 1 ] [ 2 ] [ 3 ] [ ➖ ]
//! [ ± ] [ 0 ] [ . ] [ ➕ ]
//! [           =           ]
//! ```

use crate::core::Operation;
use std::fmt;

/// What pressing a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Types a character into the display (`0`-`9` or `.`)
    Digit(char),
    /// Sends the label to the brain
    Operation,
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button, also the symbol sent to the brain
    pub label: &'static str,
    /// The action this button performs
    pub kind: ButtonKind,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub const fn digit(label: &'static str, ch: char) -> Self {
        Self {
            label,
            kind: ButtonKind::Digit(ch),
        }
    }

    /// Creates an operation button
    #[must_use]
    pub const fn operation(label: &'static str) -> Self {
        Self {
            label,
            kind: ButtonKind::Operation,
        }
    }

    /// Returns true for digit and decimal point buttons
    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self.kind, ButtonKind::Digit(_))
    }
}

const LAYOUT: &[&[KeypadButton]] = &[
    &[
        KeypadButton::operation("π"),
        KeypadButton::operation("e"),
        KeypadButton::operation("√"),
        KeypadButton::operation("cos"),
    ],
    &[
        KeypadButton::digit("7", '7'),
        KeypadButton::digit("8", '8'),
        KeypadButton::digit("9", '9'),
        KeypadButton::operation("➗"),
    ],
    &[
        KeypadButton::digit("4", '4'),
        KeypadButton::digit("5", '5'),
        KeypadButton::digit("6", '6'),
        KeypadButton::operation("✖️"),
    ],
    &[
        KeypadButton::digit("1", '1'),
        KeypadButton::digit("2", '2'),
        KeypadButton::digit("3", '3'),
        KeypadButton::operation("➖"),
    ],
    &[
        KeypadButton::operation("±"),
        KeypadButton::digit("0", '0'),
        KeypadButton::digit(".", '.'),
        KeypadButton::operation("➕"),
    ],
    &[KeypadButton::operation("=")],
];

/// The standard keypad. Rows may differ in length.
#[derive(Debug, Clone, Copy)]
pub struct Keypad {
    rows: &'static [&'static [KeypadButton]],
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: LAYOUT }
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.label == label)
    }

    /// Returns an iterator over all buttons in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, button)| ((r, c), button))
        })
    }

    /// Returns true if every operation button is in the brain's registry
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.buttons()
            .filter(|b| !b.is_digit())
            .all(|b| Operation::is_registered(b.label))
    }
}

impl fmt::Display for Keypad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows {
            let cells: Vec<String> = row.iter().map(|b| format!("[ {} ]", b.label)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
