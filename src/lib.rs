//! Tokgen - cross-platform design token generation
//!
//! This library provides functionality to:
//! - Parse a JSON design token specification into a typed model
//! - Resolve token references and inline color encodings
//! - Emit platform source modules (SwiftUI, Jetpack Compose)

pub mod cli;
pub mod emit;
pub mod naming;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod schema;
