//! Symbol extraction from dependency expressions.
//!
//! Dependency expressions are boolean expressions over capability symbols,
//! e.g. `"zlib and os-linux"` or `"x11 || !(wayland and egl)"`. The bridge
//! only needs the referenced symbol names, not the boolean structure, so the
//! extractor tokenizes the expression and returns symbols in
//! first-appearance order with duplicates removed.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MulticheckError, Result};

/// Symbols start with an alphanumeric or underscore and may contain dots,
/// plus signs, and hyphens (`os-linux`, `libavcodec.58`, `gtk+`).
static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.+-]*").unwrap());

/// Lowercase word operators, never treated as symbols.
const WORD_OPERATORS: &[&str] = &["and", "or", "not"];

/// Extract the capability symbols referenced by a dependency expression.
///
/// Returns symbols in first-appearance order, deduplicated. Boolean
/// structure (`and`/`or`/`not`, `&&`/`||`/`!`, parentheses) is validated
/// only as far as tokenization requires: unknown characters and unbalanced
/// parentheses are rejected.
pub fn symbols_list(expression: &str) -> Result<Vec<String>> {
    let mut symbols: Vec<String> = Vec::new();
    let mut depth: usize = 0;
    let mut rest = expression;

    let err = |message: String| MulticheckError::ExpressionError {
        expression: expression.to_string(),
        message,
    };

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix(|c: char| c.is_whitespace()) {
            rest = stripped;
            continue;
        }

        if let Some(stripped) = rest.strip_prefix("&&").or_else(|| rest.strip_prefix("||")) {
            rest = stripped;
            continue;
        }

        if let Some(stripped) = rest.strip_prefix('!') {
            rest = stripped;
            continue;
        }

        if let Some(stripped) = rest.strip_prefix('(') {
            depth += 1;
            rest = stripped;
            continue;
        }

        if let Some(stripped) = rest.strip_prefix(')') {
            depth = depth
                .checked_sub(1)
                .ok_or_else(|| err("unbalanced parenthesis".to_string()))?;
            rest = stripped;
            continue;
        }

        match SYMBOL_RE.find(rest) {
            Some(m) => {
                let word = m.as_str();
                if !WORD_OPERATORS.contains(&word) && !symbols.iter().any(|s| s == word) {
                    symbols.push(word.to_string());
                }
                rest = &rest[m.end()..];
            }
            None => {
                let offending = rest.chars().next().unwrap_or('?');
                return Err(err(format!("unexpected character '{}'", offending)));
            }
        }
    }

    if depth != 0 {
        return Err(err("unbalanced parenthesis".to_string()));
    }

    tracing::trace!(expression, ?symbols, "extracted dependency symbols");
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_expression_yields_no_symbols() {
        assert!(symbols_list("").unwrap().is_empty());
        assert!(symbols_list("   ").unwrap().is_empty());
    }

    #[test]
    fn single_symbol() {
        assert_eq!(symbols_list("zlib").unwrap(), vec!["zlib"]);
    }

    #[test]
    fn hyphenated_symbol_is_one_token() {
        assert_eq!(symbols_list("os-linux").unwrap(), vec!["os-linux"]);
    }

    #[test]
    fn word_operators_are_not_symbols() {
        assert_eq!(
            symbols_list("bar and os-linux").unwrap(),
            vec!["bar", "os-linux"]
        );
    }

    #[test]
    fn punctuation_operators_are_not_symbols() {
        assert_eq!(
            symbols_list("x11 || !(wayland && egl)").unwrap(),
            vec!["x11", "wayland", "egl"]
        );
    }

    #[test]
    fn duplicates_removed_keeping_first_occurrence() {
        assert_eq!(
            symbols_list("a or (b and a) or c").unwrap(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn dotted_and_plus_symbols() {
        assert_eq!(
            symbols_list("libavcodec.58 and gtk+").unwrap(),
            vec!["libavcodec.58", "gtk+"]
        );
    }

    #[test]
    fn order_follows_first_appearance() {
        assert_eq!(
            symbols_list("egl and x11 and drm").unwrap(),
            vec!["egl", "x11", "drm"]
        );
    }

    #[test]
    fn unexpected_character_is_rejected() {
        let err = symbols_list("a & b").unwrap_err();
        assert!(err.to_string().contains("unexpected character"));
    }

    #[test]
    fn unbalanced_open_paren_is_rejected() {
        let err = symbols_list("a and (b").unwrap_err();
        assert!(err.to_string().contains("unbalanced parenthesis"));
    }

    #[test]
    fn unbalanced_close_paren_is_rejected() {
        let err = symbols_list("a) and b").unwrap_err();
        assert!(err.to_string().contains("unbalanced parenthesis"));
    }
}
