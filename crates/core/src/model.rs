//! Opaque model weights.
//!
//! The weight file is fetched once at startup and handed to the external
//! inference module on every prediction. Its shape is defined entirely by
//! that module; this crate only checks that the document is valid JSON so a
//! missing or truncated file fails loudly at startup instead of flowing
//! downstream as an empty model.

use std::fmt;

/// A JSON weight document, parsed but never interpreted.
///
/// The raw text is kept alongside the parsed value so the exact document the
/// server sent can be handed to the JS side unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelWeights {
    value: serde_json::Value,
    raw: String,
}

#[derive(Debug)]
pub enum ModelError {
    /// The weight document was not valid JSON.
    InvalidJson(serde_json::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidJson(e) => write!(f, "weight file is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidJson(e) => Some(e),
        }
    }
}

impl ModelWeights {
    pub fn from_json_str(raw: &str) -> Result<Self, ModelError> {
        let value = serde_json::from_str(raw).map_err(ModelError::InvalidJson)?;
        Ok(Self {
            value,
            raw: raw.to_string(),
        })
    }

    /// The document exactly as fetched.
    pub fn raw_json(&self) -> &str {
        &self.raw
    }

    /// The parsed value. Carried for diagnostics only; never interpreted.
    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_parses_and_keeps_raw_text() {
        let raw = r#"{"W0": [0.1, 0.2], "b0": [0.0]}"#;
        let m = ModelWeights::from_json_str(raw).unwrap();
        assert_eq!(m.raw_json(), raw);
        assert!(m.value().get("W0").is_some());
    }

    #[test]
    fn malformed_json_is_an_error_not_an_empty_model() {
        for raw in ["", "{", "not json", r#"{"W0": [1,]}"#] {
            assert!(ModelWeights::from_json_str(raw).is_err(), "raw = {raw:?}");
        }
    }

    #[test]
    fn any_json_shape_is_accepted_unvalidated() {
        // The schema belongs to the inference module; a bare scalar is fine.
        assert!(ModelWeights::from_json_str("42").is_ok());
        assert!(ModelWeights::from_json_str("[]").is_ok());
        assert!(ModelWeights::from_json_str("null").is_ok());
    }
}
