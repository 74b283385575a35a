//! JSON decoding for token specification documents.
//!
//! Decoding is the only fatal step in the pipeline: a document that does not
//! match the [`TokenSpec`] shape aborts generation with no partial output.
//! Everything downstream degrades to documented defaults instead of failing.

use crate::schema::TokenSpec;
use std::io::Read;
use thiserror::Error;

/// Error type for spec decoding failures.
#[derive(Debug, Error)]
#[error("invalid token spec: {0}")]
pub struct ParseError(#[from] serde_json::Error);

/// Parse a UTF-8 JSON string into a [`TokenSpec`].
///
/// Returns `Err(ParseError)` if the document is not valid JSON or does not
/// match the expected shape (missing `tokens` key, type mismatch on a value).
/// Missing nested categories are fine; they decode to `None`.
pub fn parse_spec(input: &str) -> Result<TokenSpec, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a token spec from a reader (e.g. an open file).
pub fn parse_spec_reader<R: Read>(reader: R) -> Result<TokenSpec, ParseError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_spec() {
        let spec = parse_spec(r#"{"tokens":{}}"#).unwrap();
        assert!(spec.tokens.color.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_spec("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid token spec"));
    }

    #[test]
    fn test_parse_rejects_missing_tokens() {
        assert!(parse_spec("{}").is_err());
    }

    #[test]
    fn test_parse_rejects_type_mismatch() {
        // primitive must be a map of objects, not a bare string
        assert!(parse_spec(r#"{"tokens":{"color":{"primitive":"blue"}}}"#).is_err());
    }

    #[test]
    fn test_parse_reader() {
        let json = r#"{"tokens":{"spacing":{"scale":{"md":{"value":"16px"}}}}}"#;
        let spec = parse_spec_reader(json.as_bytes()).unwrap();
        assert!(spec.tokens.spacing.is_some());
    }
}
