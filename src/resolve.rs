//! Raw token value classification and numeric parsing.
//!
//! Every raw string value is one of exactly three shapes:
//! - Reference: `{color.primitive.white}` pointing at another token
//! - RGBA literal: `rgba(26, 115, 232, 0.4)`
//! - Hex/opaque literal: `#1A73E8` (leading `#` optional)
//!
//! Classification never fails hard. A malformed value returns `None` and the
//! emitter substitutes its platform black constant, matching the observed
//! behavior of the generators this replaces. Callers should treat the
//! fallbacks as a known weak point, not a correctness guarantee.

use regex::Regex;
use std::sync::OnceLock;

/// A classified raw token value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A `{category.subcategory.name}` reference. `category` and `name` are
    /// the second and third dot segments, uncased; the emitter applies
    /// platform casing.
    Reference { category: String, name: String },
    /// An `rgba(r, g, b, a)` literal with integer channels and float alpha.
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Anything else: a hex color with the leading `#` stripped.
    Hex(String),
}

/// Classify a raw token value into one of the three documented shapes.
///
/// Returns `None` for a reference with fewer than three segments or an
/// `rgba(...)` string the capture regex rejects; the caller emits its
/// platform black fallback in that case.
pub fn classify(raw: &str) -> Option<RawValue> {
    let raw = raw.trim();
    if let Some(stripped) = raw.strip_prefix('{') {
        let body = stripped.strip_suffix('}').unwrap_or(stripped);
        let parts: Vec<&str> = body.split('.').collect();
        if parts.len() >= 3 {
            return Some(RawValue::Reference {
                category: parts[1].to_string(),
                name: parts[2].to_string(),
            });
        }
        return None;
    }
    if raw.starts_with("rgba") {
        return parse_rgba(raw);
    }
    Some(RawValue::Hex(raw.trim_start_matches('#').to_string()))
}

/// The fixed `rgba(r, g, b, a)` capture regex, compiled once and reused for
/// every classified value.
fn rgba_regex() -> &'static Regex {
    static RGBA: OnceLock<Regex> = OnceLock::new();
    RGBA.get_or_init(|| {
        Regex::new(r"rgba\((\d+),\s*(\d+),\s*(\d+),\s*([\d.]+)\)").expect("rgba pattern")
    })
}

/// Parse an `rgba(r, g, b, a)` string via the fixed capture regex.
fn parse_rgba(raw: &str) -> Option<RawValue> {
    let caps = rgba_regex().captures(raw)?;
    let r = caps[1].parse().ok()?;
    let g = caps[2].parse().ok()?;
    let b = caps[3].parse().ok()?;
    let a = caps[4].parse().ok()?;
    Some(RawValue::Rgba { r, g, b, a })
}

/// Parse a pixel-suffixed value (`"16px"` → `16.0`).
///
/// The trailing `px` is stripped before parsing. Parse failure yields `0.0`,
/// never an error.
pub fn px_value(raw: &str) -> f64 {
    raw.trim().trim_end_matches("px").trim().parse().unwrap_or(0.0)
}

/// True if the raw value carries a `px` suffix (used when classifying
/// open-ended component properties as numeric constants).
pub fn is_px_value(raw: &str) -> bool {
    raw.trim().ends_with("px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_reference() {
        assert_eq!(
            classify("{color.primitive.white}"),
            Some(RawValue::Reference {
                category: "primitive".to_string(),
                name: "white".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_reference_extra_segments() {
        // Segments past the third are ignored.
        assert_eq!(
            classify("{color.semantic.surface.background}"),
            Some(RawValue::Reference {
                category: "semantic".to_string(),
                name: "surface".to_string(),
            })
        );
    }

    #[test]
    fn test_classify_short_reference_falls_back() {
        assert_eq!(classify("{color.primary}"), None);
        assert_eq!(classify("{color}"), None);
    }

    #[test]
    fn test_classify_rgba() {
        assert_eq!(
            classify("rgba(26, 115, 232, 0.4)"),
            Some(RawValue::Rgba { r: 26, g: 115, b: 232, a: 0.4 })
        );
        // Whitespace after commas is optional.
        assert_eq!(
            classify("rgba(0,0,0,1)"),
            Some(RawValue::Rgba { r: 0, g: 0, b: 0, a: 1.0 })
        );
    }

    #[test]
    fn test_classify_rgba_repeated_values() {
        // The capture regex is a shared compiled instance; repeated
        // classification stays consistent across many values.
        for i in 0..=255u32 {
            assert_eq!(
                classify(&format!("rgba({}, 0, 0, 1)", i)),
                Some(RawValue::Rgba { r: i as u8, g: 0, b: 0, a: 1.0 })
            );
        }
    }

    #[test]
    fn test_classify_malformed_rgba_falls_back() {
        // Missing alpha channel: the regex requires four groups.
        assert_eq!(classify("rgba(10,20,30)"), None);
        assert_eq!(classify("rgba()"), None);
        // Channel out of u8 range.
        assert_eq!(classify("rgba(300, 0, 0, 1)"), None);
    }

    #[test]
    fn test_classify_hex() {
        assert_eq!(classify("#1A73E8"), Some(RawValue::Hex("1A73E8".to_string())));
        assert_eq!(classify("1A73E8"), Some(RawValue::Hex("1A73E8".to_string())));
    }

    #[test]
    fn test_px_value() {
        assert_eq!(px_value("12px"), 12.0);
        assert_eq!(px_value("0.5px"), 0.5);
        assert_eq!(px_value("16"), 16.0);
        assert_eq!(px_value("-0.2px"), -0.2);
    }

    #[test]
    fn test_px_value_fallback() {
        assert_eq!(px_value("abc"), 0.0);
        assert_eq!(px_value(""), 0.0);
    }

    #[test]
    fn test_is_px_value() {
        assert!(is_px_value("16px"));
        assert!(!is_px_value("low"));
        assert!(!is_px_value("{spacing.scale.md}"));
    }
}
