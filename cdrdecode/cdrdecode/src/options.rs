//! Limits applied while decoding untrusted input.

pub const DEFAULT_MAX_SEQUENCE_SIZE: usize = 1024;
pub const DEFAULT_MAX_STRING_SIZE: usize = 1024;

/// Caller-supplied decode limits.
///
/// Size limits are checked against a length prefix before anything
/// proportional to it is allocated or consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum element count of any single sequence.
    pub max_sequence_size: usize,
    /// Maximum length prefix (terminator included) of any single string.
    pub max_string_size: usize,
    /// Fail with [`DecodeError::UnknownEnumValue`](crate::DecodeError::UnknownEnumValue)
    /// instead of producing [`Value::Null`](cdrdecode_core::Value::Null) for unmapped enum values.
    pub strict_enums: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_sequence_size: DEFAULT_MAX_SEQUENCE_SIZE,
            max_string_size: DEFAULT_MAX_STRING_SIZE,
            strict_enums: false,
        }
    }
}

impl DecodeOptions {
    pub fn with_max_sequence_size(mut self, max: usize) -> Self {
        self.max_sequence_size = max;
        self
    }

    pub fn with_max_string_size(mut self, max: usize) -> Self {
        self.max_string_size = max;
        self
    }

    pub fn with_strict_enums(mut self, strict: bool) -> Self {
        self.strict_enums = strict;
        self
    }
}
