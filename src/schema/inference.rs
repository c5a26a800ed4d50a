//! Type inference from observed field values

use super::types::TypeTag;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

/// ISO 8601 date-time, e.g. 2024-03-27T12:00:00Z or 2024-03-26T14:30:00+02:00
static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?$")
        .expect("timestamp pattern is valid")
});

/// Type inferrer with configuration options
#[derive(Debug, Clone)]
pub struct TypeInferrer {
    /// Reclassify ISO 8601 strings as timestamps
    detect_timestamps: bool,
    /// Reclassify "true"/"false" strings as booleans
    detect_boolean_strings: bool,
}

impl Default for TypeInferrer {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInferrer {
    /// Create a new type inferrer with default settings
    pub fn new() -> Self {
        Self {
            detect_timestamps: true,
            detect_boolean_strings: true,
        }
    }

    /// Enable/disable timestamp detection
    #[must_use]
    pub fn with_timestamp_detection(mut self, enabled: bool) -> Self {
        self.detect_timestamps = enabled;
        self
    }

    /// Enable/disable boolean-string detection
    #[must_use]
    pub fn with_boolean_string_detection(mut self, enabled: bool) -> Self {
        self.detect_boolean_strings = enabled;
        self
    }

    /// Infer the best-fit type for one field from its value list.
    ///
    /// `None` entries stand for records where the field was absent; they are
    /// treated like explicit nulls and ignored here. Nulls only influence
    /// optionality, which the generator tracks separately.
    pub fn infer(&self, values: &[Option<&Value>]) -> TypeTag {
        let mut kinds: HashSet<TypeTag> = HashSet::new();

        for value in values.iter().flatten() {
            if let Some(kind) = self.classify(value) {
                kinds.insert(kind);
            }
        }

        TypeTag::from_kinds(&kinds)
    }

    /// Classify a single value into a primitive kind, or None for null
    fn classify(&self, value: &Value) -> Option<TypeTag> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(TypeTag::Boolean),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Some(TypeTag::Integer)
                } else {
                    Some(TypeTag::Float)
                }
            }
            Value::String(s) => Some(self.classify_string(s)),
            // Nested shapes pass through as opaque strings rather than
            // failing the field
            Value::Array(_) | Value::Object(_) => Some(TypeTag::String),
        }
    }

    /// Classify a string value, applying boolean and timestamp refinements
    fn classify_string(&self, s: &str) -> TypeTag {
        if self.detect_boolean_strings && is_boolean_literal(s) {
            return TypeTag::Boolean;
        }
        if self.detect_timestamps && is_timestamp(s) {
            return TypeTag::Timestamp;
        }
        TypeTag::String
    }
}

/// Infer a field type with default settings (convenience function)
pub fn infer_type(values: &[Option<&Value>]) -> TypeTag {
    TypeInferrer::new().infer(values)
}

/// Case-insensitive match against the literal tokens "true" and "false"
fn is_boolean_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// ISO 8601 date-time check
fn is_timestamp(s: &str) -> bool {
    TIMESTAMP_PATTERN.is_match(s)
}
