//! Android/Jetpack Compose emitter.
//!
//! Mirrors the Swift emitter with Compose surface syntax: nested `object`
//! namespaces with `val` constants, colors as ARGB `Color(0xAARRGGBB)`
//! literals, sizes as `.dp`/`.sp` values.
//!
//! # Output Format
//!
//! ```text
//! // DesignTokens.kt
//! // Generated by tokgen on 2025-01-01 00:00:00. Do not edit by hand.
//!
//! package designsystem
//!
//! import androidx.compose.ui.graphics.Color
//! import androidx.compose.ui.text.font.FontWeight as ComposeFontWeight
//! import androidx.compose.ui.unit.dp
//! import androidx.compose.ui.unit.sp
//!
//! object DesignTokens {
//!
//!     object Primitive {
//!         val brandBlue = Color(0xFF1A73E8)
//!     }
//!     ...
//! }
//!
//! typealias DT = DesignTokens
//! ```

use crate::emit::{
    fmt_px, weight_class, EmitOptions, Emitter, WeightClass, COMPONENT_RADII,
};
use crate::naming::{camel_case, pascal_case};
use crate::resolve::{classify, is_px_value, px_value, RawValue};
use crate::schema::{ShadowToken, TokenMap, TokenSpec};
use std::fmt::Write;

/// Platform black fallback for unresolvable color values.
const FALLBACK_COLOR: &str = "Color.Black";

/// Jetpack Compose emitter.
#[derive(Debug, Default)]
pub struct KotlinEmitter;

impl KotlinEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a raw color value to a Compose `Color` expression.
    fn color_expr(&self, raw: &str) -> String {
        match classify(raw) {
            Some(RawValue::Reference { category, name }) => {
                format!("{}.{}", pascal_case(&category), camel_case(&name))
            }
            Some(RawValue::Rgba { r, g, b, a }) => {
                // Alpha scaled to 0-255 and premultiplied into the leading byte.
                let alpha = (a * 255.0).round() as u8;
                format!("Color(0x{:02X}{:02X}{:02X}{:02X})", alpha, r, g, b)
            }
            Some(RawValue::Hex(hex)) => {
                let hex = hex.to_uppercase();
                if hex.len() == 6 {
                    format!("Color(0xFF{})", hex)
                } else {
                    format!("Color(0x{})", hex)
                }
            }
            None => FALLBACK_COLOR.to_string(),
        }
    }

    /// Emit one color block: `object <Name> { val ... }`.
    /// Entries without a value are skipped.
    fn emit_color_block(&self, out: &mut String, name: &str, map: &TokenMap) {
        let _ = writeln!(out, "    object {} {{", name);
        for (key, token) in map {
            if let Some(raw) = &token.value {
                let _ = writeln!(out, "        val {} = {}", camel_case(key), self.color_expr(raw));
            }
        }
        out.push_str("    }\n\n");
    }

    /// Emit a block of dimension constants from pixel-string values.
    /// `unit` is `.dp` for lengths or `.sp` for text metrics.
    fn emit_px_block(&self, out: &mut String, indent: &str, name: &str, map: &TokenMap, unit: &str) {
        let _ = writeln!(out, "{}object {} {{", indent, name);
        for (key, token) in map {
            if let Some(raw) = &token.value {
                let _ = writeln!(
                    out,
                    "{}    val {} = {}{}",
                    indent,
                    camel_case(key),
                    fmt_px(px_value(raw)),
                    unit
                );
            }
        }
        let _ = writeln!(out, "{}}}", indent);
    }

    fn emit_typography(&self, out: &mut String, spec: &TokenSpec) {
        let Some(typography) = &spec.tokens.typography else {
            return;
        };

        if let Some(family) = &typography.font_family {
            out.push_str("    object FontFamily {\n");
            for (key, token) in family {
                if let Some(raw) = &token.value {
                    let _ = writeln!(out, "        val {} = \"{}\"", camel_case(key), raw);
                }
            }
            out.push_str("    }\n\n");
        }

        if let Some(weights) = &typography.font_weight {
            out.push_str("    object FontWeight {\n");
            for (key, token) in weights {
                if let Some(raw) = &token.value {
                    let weight = match weight_class(raw) {
                        WeightClass::Regular => "Normal",
                        WeightClass::Medium => "Medium",
                        WeightClass::SemiBold => "SemiBold",
                        WeightClass::Bold => "Bold",
                    };
                    let _ = writeln!(
                        out,
                        "        val {} = ComposeFontWeight.{}",
                        camel_case(key),
                        weight
                    );
                }
            }
            out.push_str("    }\n\n");
        }

        if let Some(sizes) = &typography.font_size {
            out.push_str("    object FontSize {\n");
            self.emit_size_role(out, "Heading", sizes, |k| {
                k.starts_with('h').then(|| k.to_string())
            });
            self.emit_size_role(out, "Body", sizes, |k| {
                k.strip_prefix("body-").map(|s| s.to_string())
            });
            self.emit_size_role(out, "Label", sizes, |k| {
                k.strip_prefix("label-").map(|s| s.to_string())
            });
            out.push_str("    }\n\n");
        }

        if let Some(spacing) = &typography.letter_spacing {
            self.emit_px_block(out, "    ", "LetterSpacing", spacing, ".sp");
            out.push('\n');
        }
    }

    /// Emit one font-size role block with `.sp` values.
    fn emit_size_role(
        &self,
        out: &mut String,
        name: &str,
        sizes: &TokenMap,
        role_key: impl Fn(&str) -> Option<String>,
    ) {
        let _ = writeln!(out, "        object {} {{", name);
        for (key, token) in sizes {
            let (Some(emitted), Some(raw)) = (role_key(key), &token.value) else {
                continue;
            };
            let _ = writeln!(
                out,
                "            val {} = {}.sp",
                camel_case(&emitted),
                fmt_px(px_value(raw))
            );
        }
        out.push_str("        }\n");
    }

    fn emit_spacing(&self, out: &mut String, spec: &TokenSpec) {
        let Some(spacing) = &spec.tokens.spacing else {
            return;
        };
        out.push_str("    object Spacing {\n");
        if let Some(scale) = &spacing.scale {
            for (key, token) in scale {
                if let Some(raw) = &token.value {
                    let _ = writeln!(
                        out,
                        "        val {} = {}.dp",
                        camel_case(key),
                        fmt_px(px_value(raw))
                    );
                }
            }
        }
        if let Some(component) = &spacing.component {
            self.emit_px_block(out, "        ", "Component", component, ".dp");
        }
        out.push_str("    }\n\n");
    }

    /// The Radius block is always emitted: the Component constants are fixed
    /// emitter-side values, never read from the input spec.
    fn emit_radius(&self, out: &mut String, spec: &TokenSpec) {
        out.push_str("    object Radius {\n");
        if let Some(radius) = &spec.tokens.border_radius {
            for (key, token) in radius {
                // "component" is reserved for the fixed block below.
                if key == "component" {
                    continue;
                }
                if let Some(raw) = &token.value {
                    let _ = writeln!(
                        out,
                        "        val {} = {}.dp",
                        camel_case(key),
                        fmt_px(px_value(raw))
                    );
                }
            }
        }
        out.push_str("        object Component {\n");
        for (name, value) in COMPONENT_RADII {
            let _ = writeln!(out, "            val {} = {}.dp", name, fmt_px(value));
        }
        out.push_str("        }\n    }\n\n");
    }

    fn emit_shadows(&self, out: &mut String, spec: &TokenSpec) {
        let Some(shadows) = &spec.tokens.shadow else {
            return;
        };
        out.push_str("    object Shadows {\n");
        for (key, shadow) in shadows {
            self.emit_shadow(out, key, shadow);
        }
        out.push_str("    }\n\n");
    }

    fn emit_shadow(&self, out: &mut String, key: &str, shadow: &ShadowToken) {
        let color = shadow.color.as_deref().unwrap_or("rgba(0, 0, 0, 0.08)");
        let offset_x = shadow.offset_x.as_deref().unwrap_or("0px");
        let offset_y = shadow.offset_y.as_deref().unwrap_or("2px");
        let blur = shadow.blur.as_deref().unwrap_or("8px");

        let _ = writeln!(out, "        object {} {{", pascal_case(key));
        let _ = writeln!(out, "            val color = {}", self.color_expr(color));
        let _ = writeln!(out, "            val offsetX = {}.dp", fmt_px(px_value(offset_x)));
        let _ = writeln!(out, "            val offsetY = {}.dp", fmt_px(px_value(offset_y)));
        let _ = writeln!(out, "            val blurRadius = {}.dp", fmt_px(px_value(blur)));
        out.push_str("        }\n");
    }

    fn emit_components(&self, out: &mut String, spec: &TokenSpec) {
        let Some(components) = &spec.components else {
            return;
        };
        for (name, properties) in components {
            let _ = writeln!(out, "    object {} {{", pascal_case(name));
            for (key, raw) in properties {
                let ident = camel_case(key);
                if is_px_value(raw) {
                    let _ = writeln!(out, "        val {} = {}.dp", ident, fmt_px(px_value(raw)));
                } else if raw.starts_with('{') {
                    let _ = writeln!(out, "        val {} = {}", ident, self.color_expr(raw));
                } else {
                    let _ = writeln!(out, "        val {} = \"{}\"", ident, raw);
                }
            }
            out.push_str("    }\n\n");
        }
    }
}

impl Emitter for KotlinEmitter {
    fn generate(&self, spec: &TokenSpec, options: &EmitOptions) -> String {
        let mut out = String::new();
        out.push_str("// DesignTokens.kt\n");
        let _ = writeln!(
            out,
            "// Generated by tokgen on {}. Do not edit by hand.",
            options.generated_at
        );
        out.push_str("\npackage designsystem\n\n");
        out.push_str("import androidx.compose.ui.graphics.Color\n");
        out.push_str("import androidx.compose.ui.text.font.FontWeight as ComposeFontWeight\n");
        out.push_str("import androidx.compose.ui.unit.dp\n");
        out.push_str("import androidx.compose.ui.unit.sp\n\n");
        out.push_str("object DesignTokens {\n\n");

        if let Some(color) = &spec.tokens.color {
            self.emit_color_block(&mut out, "Primitive", &color.primitive);
            if let Some(semantic) = &color.semantic {
                if let Some(surface) = &semantic.surface {
                    self.emit_color_block(&mut out, "Surface", surface);
                }
                if let Some(text) = &semantic.text {
                    self.emit_color_block(&mut out, "Text", text);
                }
                if let Some(interactive) = &semantic.interactive {
                    self.emit_color_block(&mut out, "Interactive", interactive);
                }
                if let Some(status) = &semantic.status {
                    self.emit_color_block(&mut out, "Status", status);
                }
                if let Some(button) = &semantic.button {
                    self.emit_color_block(&mut out, "Button", button);
                }
            }
        }

        self.emit_typography(&mut out, spec);
        self.emit_spacing(&mut out, spec);
        self.emit_radius(&mut out, spec);
        self.emit_shadows(&mut out, spec);
        self.emit_components(&mut out, spec);

        out.push_str("}\n\n");
        out.push_str("typealias DT = DesignTokens\n");
        out
    }

    fn platform_name(&self) -> &'static str {
        "kotlin"
    }

    fn extension(&self) -> &'static str {
        "kt"
    }
}
