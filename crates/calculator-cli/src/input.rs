//! Command-line tokens to keypad labels
//!
//! Terminals make the keypad's symbols awkward to type, so plain ASCII
//! aliases are accepted. Numbers are typed one key at a time; a leading
//! `-` becomes a trailing `±`.

/// ASCII spellings of operation buttons
const ALIASES: &[(&str, &str)] = &[
    ("*", "✖️"),
    ("x", "✖️"),
    ("/", "➗"),
    ("-", "➖"),
    ("+", "➕"),
    ("sqrt", "√"),
    ("pi", "π"),
    ("neg", "±"),
];

/// Resolves an alias to its keypad label
#[must_use]
pub fn resolve_alias(token: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, label)| *label)
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn type_number(number: &str) -> Vec<String> {
    number.chars().map(String::from).collect()
}

/// Expands one token into the keypad labels it stands for
#[must_use]
pub fn expand_token(token: &str) -> Vec<String> {
    if let Some(label) = resolve_alias(token) {
        return vec![label.to_string()];
    }
    match token.strip_prefix('-') {
        Some(magnitude) if is_number(magnitude) => {
            let mut labels = type_number(magnitude);
            labels.push("±".to_string());
            labels
        }
        _ if is_number(token) => type_number(token),
        _ => vec![token.to_string()],
    }
}

/// Expands a sequence of tokens into keypad labels
pub fn expand_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    tokens.into_iter().flat_map(expand_token).collect()
}
