//! Internal helpers for input validation and normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation logic so every write path enforces the same invariants.

use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

/// Trim and NFC-normalize a required text field.
pub(crate) fn normalize_required(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(format!("{label} is required")));
    }
    Ok(trimmed.nfc().collect())
}

/// Trim and NFC-normalize an optional text field; blank values become `None`.
pub(crate) fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.nfc().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(
            normalize_required("   ", "name"),
            Err(EngineError::InvalidInput("name is required".to_string()))
        );
    }

    #[test]
    fn required_composes_unicode() {
        // "e" followed by a combining acute accent.
        let name = normalize_required(" Rene\u{301} ", "name").unwrap();
        assert_eq!(name, "Ren\u{e9}");
    }

    #[test]
    fn optional_drops_blank() {
        assert_eq!(normalize_optional(Some("  ")), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some(" Dinner ")), Some("Dinner".to_string()));
    }
}
