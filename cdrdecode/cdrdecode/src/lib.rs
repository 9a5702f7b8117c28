//! Schema-driven decoder for CDR-encoded DDS / ROS 2 messages.
//!
//! Key components:
//! - [`CdrCursor`]: alignment-aware, zero-copy read cursor
//! - [`decode_field`]: recursive decoder walking a [`FieldType`] over a cursor
//! - [`decode_header`]: the 4-byte encapsulation header
//! - [`decode_message`]: header, re-anchoring at the payload, then the body
//!
//! ```
//! use cdrdecode::{BitWidth, DecodeOptions, DictionaryField, FieldType, decode_bytes};
//!
//! let schema = FieldType::dictionary([
//!     DictionaryField::new("sec", 0, FieldType::Int(BitWidth::W32)),
//!     DictionaryField::new("nanosec", 1, FieldType::big_uint(BitWidth::W32)),
//! ])?;
//! let data = [0x00, 0x01, 0x00, 0x00, 7, 0, 0, 0, 42, 0, 0, 0];
//! let msg = decode_bytes(&data, &schema, &DecodeOptions::default())?;
//! assert_eq!(msg.payload.get("sec").and_then(|v| v.try_i64().ok().flatten()), Some(7));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cursor;
mod decode;
mod error;
mod header;
mod message;
mod message_decoder;
mod options;

pub use cdrdecode_core::{
    BitWidth, DictionaryDef, DictionaryField, EnumMapping, FieldType, FloatWidth, Record,
    RepresentationIdentifier, SchemaError, SequenceDef, UintRepr, Value, ValueTypeError,
    format_field_type,
};
pub use cursor::CdrCursor;
pub use decode::{
    decode_boolean, decode_dictionary, decode_enum, decode_field, decode_float, decode_int,
    decode_sequence, decode_string, decode_string_bytes, decode_uint,
};
pub use error::DecodeError;
pub use header::{CdrHeader, ENCAPSULATION_HEADER_SIZE, decode_header};
#[cfg(feature = "base64")]
pub use message::decode_base64;
pub use message::{CdrInput, DecodedMessage, decode_bytes, decode_message};
pub use message_decoder::CdrMessageDecoder;
pub use options::{DEFAULT_MAX_SEQUENCE_SIZE, DEFAULT_MAX_STRING_SIZE, DecodeOptions};
