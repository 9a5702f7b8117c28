//! Error types for schema construction and value access.

/// Error returned when a schema node cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Integer widths are limited to 8, 16, 32 and 64 bits.
    #[error("unsupported integer width: {bits} bits (expected 8, 16, 32 or 64)")]
    UnsupportedBitWidth { bits: u32 },

    /// Float widths are limited to the IEEE-754 binary32 and binary64 formats.
    #[error("unsupported float width: {bits} bits (expected 32 or 64)")]
    UnsupportedFloatWidth { bits: u32 },

    /// Two dictionary fields share the same wire index.
    #[error("duplicate wire index {index} for fields '{first}' and '{second}'")]
    DuplicateIndex {
        index: u32,
        first: String,
        second: String,
    },

    /// Two dictionary fields share the same name.
    #[error("duplicate field name '{name}'")]
    DuplicateName { name: String },
}

/// Error returned by the typed accessors on [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("type mismatch: expected {expected}, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}
