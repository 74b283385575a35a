//! Platform emitters for generated token source.
//!
//! Each emitter is a pure function from a parsed [`TokenSpec`] to one output
//! document in the target platform's source syntax. Emitters never fail: the
//! only fatal error in the pipeline is the JSON decode step, and every
//! malformed value encountered during emission degrades to a documented
//! default (platform black for colors, `0` for pixel values).
//!
//! # Supported Platforms
//!
//! - **Swift** ([`SwiftEmitter`]): SwiftUI `enum` namespaces, `Color`/`CGFloat`
//! - **Kotlin** ([`KotlinEmitter`]): Compose `object` namespaces, `Color`/`.dp`/`.sp`
//!
//! # Example
//!
//! ```
//! use tokgen::emit::{EmitOptions, Emitter, SwiftEmitter};
//! use tokgen::parser::parse_spec;
//!
//! let spec = parse_spec(r#"{"tokens":{}}"#).unwrap();
//! let options = EmitOptions::new("2025-01-01 00:00:00");
//! let source = SwiftEmitter::new().generate(&spec, &options);
//! assert!(source.contains("enum DesignTokens"));
//! ```

pub mod kotlin;
pub mod swift;

pub use kotlin::*;
pub use swift::*;

use crate::schema::TokenSpec;

/// Options shared by all emitters.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Pre-formatted header timestamp. Injected by the caller so the emitter
    /// itself stays deterministic: identical spec + options give
    /// byte-identical output.
    pub generated_at: String,
}

impl EmitOptions {
    pub fn new(generated_at: &str) -> Self {
        Self { generated_at: generated_at.to_string() }
    }
}

/// Trait for platform emitter implementations.
pub trait Emitter {
    /// Generate the output document for a token spec.
    fn generate(&self, spec: &TokenSpec, options: &EmitOptions) -> String;

    /// Get the platform name for this emitter.
    fn platform_name(&self) -> &'static str;

    /// Get the output file extension for this platform.
    fn extension(&self) -> &'static str;

    /// Default output file name (`DesignTokens.<ext>`).
    fn default_file_name(&self) -> String {
        format!("DesignTokens.{}", self.extension())
    }
}

/// Font weight classes shared by both platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WeightClass {
    Regular,
    Medium,
    SemiBold,
    Bold,
}

/// Map a numeric weight string to its weight class.
/// Unknown values map to Regular, never an error or omission.
pub(crate) fn weight_class(raw: &str) -> WeightClass {
    match raw.trim() {
        "500" => WeightClass::Medium,
        "600" => WeightClass::SemiBold,
        "700" => WeightClass::Bold,
        _ => WeightClass::Regular,
    }
}

/// Fixed per-component corner radii. These are emitter-side constants and are
/// never read from the input spec.
pub(crate) const COMPONENT_RADII: [(&str, f64); 4] =
    [("button", 36.0), ("card", 20.0), ("menu", 20.0), ("modal", 16.0)];

/// Format a pixel value without a trailing `.0` for whole numbers.
pub(crate) fn fmt_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
