//! Raw field-value normalization.
//!
//! Every field read from a case record passes through here before any
//! composition logic sees it. Absence is resolved once, into an explicit
//! sentinel, so the paragraph composers never handle raw nulls.

use serde_json::Value;

/// Sentinel substituted for missing or invalid field values.
pub const UNKNOWN: &str = "unknown";

/// A field value after normalization: trimmed non-empty text, or missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Known(String),
    Missing,
}

impl Normalized {
    /// Normalizes a raw JSON field value.
    ///
    /// Absent keys, JSON null, whitespace-only text, and the textual
    /// `"nan"` (any casing) all normalize to `Missing`; everything else is
    /// coerced to text and trimmed. Total and idempotent: this never fails,
    /// and re-normalizing already-normalized text is a no-op.
    pub fn from_raw(raw: Option<&Value>) -> Self {
        let Some(value) = raw else {
            return Normalized::Missing;
        };
        let text = match value {
            Value::Null => return Normalized::Missing,
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return Normalized::Missing;
        }
        Normalized::Known(trimmed.to_owned())
    }

    /// The normalized text, if the value was present.
    pub fn known(&self) -> Option<&str> {
        match self {
            Normalized::Known(text) => Some(text),
            Normalized::Missing => None,
        }
    }

    /// The normalized text, or the given fallback when missing.
    pub fn known_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.known().unwrap_or(fallback)
    }

    /// The normalized text, or the `unknown` sentinel when missing.
    pub fn or_unknown(&self) -> &str {
        self.known_or(UNKNOWN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_surrounding_whitespace() {
        let value = json!("  Hypertension  ");
        assert_eq!(
            Normalized::from_raw(Some(&value)),
            Normalized::Known("Hypertension".into())
        );
    }

    #[test]
    fn absent_null_empty_and_nan_are_missing() {
        assert_eq!(Normalized::from_raw(None), Normalized::Missing);
        assert_eq!(Normalized::from_raw(Some(&Value::Null)), Normalized::Missing);
        assert_eq!(Normalized::from_raw(Some(&json!("   "))), Normalized::Missing);
        assert_eq!(Normalized::from_raw(Some(&json!("NaN"))), Normalized::Missing);
        assert_eq!(Normalized::from_raw(Some(&json!("nan"))), Normalized::Missing);
    }

    #[test]
    fn numbers_coerce_to_text() {
        assert_eq!(
            Normalized::from_raw(Some(&json!(80))),
            Normalized::Known("80".into())
        );
    }

    #[test]
    fn renormalizing_is_a_noop() {
        let once = Normalized::from_raw(Some(&json!(" DrugA ")));
        let text = Value::String(once.or_unknown().to_owned());
        assert_eq!(Normalized::from_raw(Some(&text)), once);
    }

    #[test]
    fn literal_unknown_text_stays_known() {
        // "unknown" as data is preserved verbatim; only absence maps to
        // the sentinel.
        let value = json!("unknown");
        assert_eq!(
            Normalized::from_raw(Some(&value)),
            Normalized::Known("unknown".into())
        );
    }

    #[test]
    fn fallback_applies_only_when_missing() {
        assert_eq!(Normalized::Missing.known_or("an unknown indication"), "an unknown indication");
        assert_eq!(Normalized::Known("fever".into()).or_unknown(), "fever");
        assert_eq!(Normalized::Missing.or_unknown(), UNKNOWN);
    }
}
