//! Top-level entry points: header, re-anchoring, then the body.

use bytes::Bytes;
use cdrdecode_core::{FieldType, Value};

use crate::{
    cursor::CdrCursor,
    decode::decode_field,
    error::DecodeError,
    header::{CdrHeader, decode_header},
    options::DecodeOptions,
};

/// Accepted message inputs.
#[derive(Debug, Clone)]
pub enum CdrInput<'a> {
    /// Raw CDR bytes, header included.
    Bytes(Bytes),
    /// Borrowed raw CDR bytes; copied once when the cursor is built.
    Slice(&'a [u8]),
    /// Base64 text (standard alphabet, padded) of the raw CDR bytes.
    #[cfg(feature = "base64")]
    Base64(&'a str),
}

impl CdrInput<'_> {
    pub fn into_bytes(self) -> Result<Bytes, DecodeError> {
        match self {
            CdrInput::Bytes(bytes) => Ok(bytes),
            CdrInput::Slice(data) => Ok(Bytes::copy_from_slice(data)),
            #[cfg(feature = "base64")]
            CdrInput::Base64(text) => {
                use base64::Engine as _;
                let raw = base64::engine::general_purpose::STANDARD.decode(text)?;
                Ok(Bytes::from(raw))
            }
        }
    }
}

impl From<Bytes> for CdrInput<'_> {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for CdrInput<'_> {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(value))
    }
}

impl<'a> From<&'a [u8]> for CdrInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Slice(value)
    }
}

/// A decoded message: the encapsulation header and the body value.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMessage {
    pub header: CdrHeader,
    pub payload: Value,
}

/// Decode the encapsulation header, then `body_schema` from the bytes after it.
///
/// Body alignment is computed relative to the first byte after the header.
/// The header's representation identifier is reported but never changes how
/// the body is read: the body is always decoded little-endian.
pub fn decode_message<'a>(
    input: impl Into<CdrInput<'a>>,
    body_schema: &FieldType,
    options: &DecodeOptions,
) -> Result<DecodedMessage, DecodeError> {
    let mut cursor = CdrCursor::new(input.into().into_bytes()?);
    let header = decode_header(&mut cursor)?;

    let representation = header.representation();
    tracing::debug!(
        %representation,
        options = header.representation_options,
        payload_len = cursor.remaining(),
        "decoded encapsulation header"
    );
    if representation.is_little_endian() == Some(false) {
        tracing::warn!(
            %representation,
            "big-endian representation announced, body is decoded as little-endian"
        );
    }

    let mut body = cursor.remaining_as_new_cursor();
    let payload = decode_field(&mut body, body_schema, options)?;
    Ok(DecodedMessage { header, payload })
}

pub fn decode_bytes(
    data: &[u8],
    body_schema: &FieldType,
    options: &DecodeOptions,
) -> Result<DecodedMessage, DecodeError> {
    decode_message(data, body_schema, options)
}

#[cfg(feature = "base64")]
pub fn decode_base64(
    text: &str,
    body_schema: &FieldType,
    options: &DecodeOptions,
) -> Result<DecodedMessage, DecodeError> {
    decode_message(CdrInput::Base64(text), body_schema, options)
}
