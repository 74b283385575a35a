//! Data models for the design token specification.
//!
//! The token spec is a single JSON document with a required `tokens` object
//! and an optional `components` object. Every category below `tokens` is
//! individually optional: a missing category means "emit nothing for that
//! block", never a decode failure.
//!
//! All maps are `BTreeMap` so iteration order is lexicographic on the source
//! key. Emitters rely on this for deterministic, diff-stable output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat name → token mapping (e.g. the primitive color palette).
pub type TokenMap = BTreeMap<String, TokenValue>;

/// Root document of a token specification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenSpec {
    pub tokens: Tokens,
    /// Custom component blocks: component name → property name → raw value.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub components: Option<BTreeMap<String, BTreeMap<String, String>>>,
}

/// The token categories. Each is optional; absence is not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Tokens {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<ColorTokens>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub typography: Option<TypographyTokens>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub spacing: Option<SpacingTokens>,
    #[serde(rename = "borderRadius", skip_serializing_if = "Option::is_none", default)]
    pub border_radius: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub shadow: Option<BTreeMap<String, ShadowToken>>,
}

/// A leaf token. An absent `value` is valid and skipped during emission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TokenValue {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub value: Option<String>,
}

impl TokenValue {
    pub fn new(value: &str) -> Self {
        Self { value: Some(value.to_string()) }
    }
}

/// Color tokens: a flat primitive palette plus nested semantic categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ColorTokens {
    #[serde(default)]
    pub primitive: TokenMap,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub semantic: Option<SemanticColors>,
}

/// Semantic color categories. Raw values are hex strings, `rgba(...)`
/// strings, or brace-delimited references like `{color.primitive.white}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SemanticColors {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub surface: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interactive: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub button: Option<TokenMap>,
}

/// Typography tokens. Weight values are numeric strings ("400".."700");
/// size keys carry a semantic-role prefix (`h*`, `body-*`, `label-*`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TypographyTokens {
    #[serde(rename = "fontFamily", skip_serializing_if = "Option::is_none", default)]
    pub font_family: Option<TokenMap>,
    #[serde(rename = "fontWeight", skip_serializing_if = "Option::is_none", default)]
    pub font_weight: Option<TokenMap>,
    #[serde(rename = "fontSize", skip_serializing_if = "Option::is_none", default)]
    pub font_size: Option<TokenMap>,
    #[serde(rename = "letterSpacing", skip_serializing_if = "Option::is_none", default)]
    pub letter_spacing: Option<TokenMap>,
}

/// Spacing tokens: a flat scale plus component-specific overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SpacingTokens {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scale: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub component: Option<TokenMap>,
}

/// A shadow definition. Absent sub-fields take the emitter defaults:
/// color `rgba(0,0,0,0.08)`, offsetX `0px`, offsetY `2px`, blur `8px`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShadowToken {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    #[serde(rename = "offsetX", skip_serializing_if = "Option::is_none", default)]
    pub offset_x: Option<String>,
    #[serde(rename = "offsetY", skip_serializing_if = "Option::is_none", default)]
    pub offset_y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blur: Option<String>,
}
