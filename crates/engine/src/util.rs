//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize the
//! trimming rules so every service rejects blank input the same way.

use crate::{EngineError, MoneyCents, ResultEngine};

pub(crate) const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than zero.";
pub(crate) const AMOUNT_TOO_LARGE: &str = "Amount is too large.";

/// Largest amount a single transaction or loan may carry: one billion units.
/// Keeps every stored total far from the `i64` limit.
pub(crate) const MAX_AMOUNT: MoneyCents = MoneyCents::new(100_000_000_000);

pub(crate) fn ensure_positive(amount: MoneyCents) -> ResultEngine<()> {
    if !amount.is_positive() {
        return Err(EngineError::validation(AMOUNT_NOT_POSITIVE));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::validation(AMOUNT_TOO_LARGE));
    }
    Ok(())
}

/// Trim `value` and fail with `message` when nothing is left.
pub(crate) fn normalize_required_text(value: &str, message: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation(message));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_is_trimmed() {
        assert_eq!(
            normalize_required_text("  Salary ", "Category is required.").unwrap(),
            "Salary"
        );
        assert_eq!(
            normalize_required_text(" \t ", "Category is required."),
            Err(EngineError::Validation("Category is required.".to_string()))
        );
    }

    #[test]
    fn blank_optional_text_is_none() {
        assert_eq!(normalize_optional_text(Some("   ")), None);
        assert_eq!(normalize_optional_text(None), None);
        assert_eq!(
            normalize_optional_text(Some(" Cash ")),
            Some("Cash".to_string())
        );
    }

    #[test]
    fn zero_and_negative_amounts_fail() {
        assert!(ensure_positive(MoneyCents::new(1)).is_ok());
        for cents in [0, -1, -100_000] {
            assert_eq!(
                ensure_positive(MoneyCents::new(cents)),
                Err(EngineError::Validation(AMOUNT_NOT_POSITIVE.to_string()))
            );
        }
    }

    #[test]
    fn amounts_above_the_cap_fail() {
        assert!(ensure_positive(MAX_AMOUNT).is_ok());
        for cents in [MAX_AMOUNT.cents() + 1, i64::MAX / 2 + 1, i64::MAX] {
            assert_eq!(
                ensure_positive(MoneyCents::new(cents)),
                Err(EngineError::Validation(AMOUNT_TOO_LARGE.to_string()))
            );
        }
    }
}
