//! Identifier casing for generated source.
//!
//! Token keys use kebab-case or snake_case; generated identifiers use
//! camelCase (constants) or PascalCase (namespaces). Mapping is pure and
//! deterministic with no collision detection: two distinct keys that map to
//! the same identifier (e.g. `brand-blue` and `brand_blue`) both emit, and
//! the later declaration shadows the earlier one in generated source.

/// Convert a kebab/snake-case token key to camelCase.
///
/// The first segment is lowercased; subsequent segments get their first
/// character uppercased with the remainder left as-is.
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split(['-', '_']).filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&part.to_lowercase());
        } else {
            out.push_str(&capitalize(part));
        }
    }
    out
}

/// Convert a token key to PascalCase (camelCase with the first character
/// uppercased). Used for namespace/type identifiers.
pub fn pascal_case(key: &str) -> String {
    capitalize(&camel_case(key))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_kebab() {
        assert_eq!(camel_case("brand-blue"), "brandBlue");
        assert_eq!(camel_case("gray-50"), "gray50");
        assert_eq!(camel_case("on-primary-container"), "onPrimaryContainer");
    }

    #[test]
    fn test_camel_case_snake() {
        assert_eq!(camel_case("brand_blue"), "brandBlue");
        assert_eq!(camel_case("letter_spacing_tight"), "letterSpacingTight");
    }

    #[test]
    fn test_camel_case_single_segment() {
        assert_eq!(camel_case("primary"), "primary");
        assert_eq!(camel_case("H1"), "h1");
    }

    #[test]
    fn test_camel_case_empty_segments_skipped() {
        assert_eq!(camel_case("--double"), "double");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("chat-bubble"), "ChatBubble");
        assert_eq!(pascal_case("primitive"), "Primitive");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        assert_eq!(camel_case("status-bar"), camel_case("status-bar"));
        // Distinct keys may collide; the mapper does not detect this.
        assert_eq!(camel_case("brand-blue"), camel_case("brand_blue"));
    }
}
