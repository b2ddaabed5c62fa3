//! Generic description documents.
//!
//! Documents are self-describing metadata attached to resources and
//! operations, carried as [`serde_json::Value`]: the tagged union of object,
//! array, scalar, and null that the projection decodes with explicit
//! presence-and-kind checks instead of failing on irregular shapes.

use crate::keys;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// Returns true when `key` is present on `document` with a defined value.
///
/// `null` counts as undefined, matching the source model where a key can be
/// listed without carrying a value. Non-object documents define nothing.
pub fn has_defined(document: &Value, key: &str) -> bool {
    matches!(document.get(key), Some(value) if !value.is_null())
}

/// Errors from [`parse_document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Text was neither valid JSON nor valid YAML.
    #[error("document is not valid JSON or YAML: {0}")]
    Parse(String),
}

/// Parses a description document from JSON or YAML text.
///
/// JSON is attempted first, then YAML, so documents can be authored in either
/// form.
pub fn parse_document(text: &str) -> Result<Value, DocumentError> {
    serde_json::from_str::<Value>(text)
        .or_else(|_| serde_yaml::from_str::<Value>(text))
        .map_err(|error| DocumentError::Parse(error.to_string()))
}

/// Declared type tag of an attribute or parameter description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Boolean,
    Int,
    Long,
    Double,
    BigDecimal,
    BigInteger,
    String,
    Bytes,
    /// A value resolved at runtime; projected like a string.
    Expression,
    List,
    Object,
    Property,
    Undefined,
}

/// Unrecognized type tag. Callers treat this as "no declared kind" and fall
/// back to an opaque projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized model type tag")]
pub struct UnknownKindError;

impl FromStr for ModelKind {
    type Err = UnknownKindError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "boolean" => Ok(Self::Boolean),
            "int" => Ok(Self::Int),
            "long" => Ok(Self::Long),
            "double" => Ok(Self::Double),
            "big-decimal" | "big_decimal" | "bigdecimal" => Ok(Self::BigDecimal),
            "big-integer" | "big_integer" | "biginteger" => Ok(Self::BigInteger),
            "string" => Ok(Self::String),
            "bytes" => Ok(Self::Bytes),
            "expression" => Ok(Self::Expression),
            "list" => Ok(Self::List),
            "object" => Ok(Self::Object),
            "property" => Ok(Self::Property),
            "undefined" => Ok(Self::Undefined),
            _ => Err(UnknownKindError),
        }
    }
}

impl ModelKind {
    /// Reads the declared kind from a description node's `type` tag, absent
    /// when the tag is missing, not a string, or unrecognized.
    pub fn of(node: &Value) -> Option<Self> {
        node.get(keys::TYPE)
            .and_then(Value::as_str)
            .and_then(|tag| tag.parse().ok())
    }
}
