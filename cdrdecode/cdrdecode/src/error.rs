//! Error type for CDR decoding.

/// Error returned by the cursor, the decode engine and the message entry points.
///
/// Every variant is fatal to the decode call that produced it; no partial
/// value is returned.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Fewer bytes remain than a read (or alignment padding) requires.
    #[error("out of bounds at offset {offset}: requested {requested} bytes, {remaining} remaining")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// A sequence length (prefixed or fixed) exceeds `max_sequence_size`.
    #[error("sequence length {len} exceeds max_sequence_size {max}")]
    SequenceTooLong { len: usize, max: usize },

    /// A string length prefix exceeds `max_string_size`.
    #[error("string length {len} exceeds max_string_size {max}")]
    StringTooLong { len: usize, max: usize },

    /// A boolean byte other than 0 or 1.
    #[error("invalid boolean value {value} at offset {offset}")]
    InvalidBoolean { value: u8, offset: usize },

    /// String bytes are not valid UTF-8.
    #[error("malformed UTF-8 text: {0}")]
    MalformedText(#[from] std::str::Utf8Error),

    /// An enum value with no mapped member, reported only with `strict_enums`.
    #[error("enum value {value} has no mapped member")]
    UnknownEnumValue { value: u32 },

    /// The base64 text input could not be transcoded to bytes.
    #[cfg(feature = "base64")]
    #[error("invalid base64 input: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
