//! Recursive schema-driven decoding of a CDR body.
//!
//! | Schema node   | Wire layout                                             |
//! |---------------|---------------------------------------------------------|
//! | `Int`/`Uint`  | aligned to its width, least-significant byte first      |
//! | `Float`       | aligned to its width, little-endian IEEE-754            |
//! | `Boolean`     | one byte, 0 or 1                                        |
//! | `String`      | aligned u32 length (terminator included), bytes, `\0`   |
//! | `StringBytes` | same as `String`, bytes returned as-is                  |
//! | `Enum`        | aligned u32                                             |
//! | `Sequence`    | aligned u32 count unless the size is fixed, then items  |
//! | `Dictionary`  | fields back to back in wire-index order                 |

use std::sync::Arc;

use bytes::Bytes;
use cdrdecode_core::{
    BitWidth, DictionaryDef, EnumMapping, FieldType, FloatWidth, Record, SequenceDef, UintRepr,
    Value,
};

use crate::{cursor::CdrCursor, error::DecodeError, options::DecodeOptions};

/// Decode one value of type `ty` from `cursor`.
pub fn decode_field(
    cursor: &mut CdrCursor,
    ty: &FieldType,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    Ok(match ty {
        FieldType::Int(width) => Value::Int(decode_int(cursor, *width)?),
        FieldType::Uint { width, repr } => decode_uint(cursor, *width, *repr)?,
        FieldType::Float(width) => decode_float(cursor, *width)?,
        FieldType::Boolean => Value::Bool(decode_boolean(cursor)?),
        FieldType::String => Value::String(decode_string(cursor, options)?),
        FieldType::StringBytes => Value::Bytes(decode_string_bytes(cursor, options)?),
        FieldType::Enum(mapping) => decode_enum(cursor, mapping, options)?,
        FieldType::Sequence(seq) => Value::List(decode_sequence(cursor, seq, options)?),
        FieldType::Dictionary(dict) => Value::Record(decode_dictionary(cursor, dict, options)?),
    })
}

/// Align to `width` and assemble its bytes least-significant first.
pub(crate) fn read_unsigned(cursor: &mut CdrCursor, width: BitWidth) -> Result<u64, DecodeError> {
    let len = width.byte_len();
    cursor.align(len)?;
    let bytes = cursor.consume(len)?;
    Ok(bytes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, b)| acc | (u64::from(*b) << (8 * i))))
}

fn read_length_prefix(cursor: &mut CdrCursor) -> Result<usize, DecodeError> {
    let len = read_unsigned(cursor, BitWidth::W32)?;
    Ok(usize::try_from(len).unwrap_or(usize::MAX))
}

/// Decode an `int` field.
///
/// The bytes are assembled exactly like an unsigned value: there is no sign
/// extension, so an `int32` holding `-1` on the wire decodes to `4294967295`.
/// Only 64-bit values can come out negative, by reinterpreting the bit pattern.
pub fn decode_int(cursor: &mut CdrCursor, width: BitWidth) -> Result<i64, DecodeError> {
    read_unsigned(cursor, width).map(|v| v as i64)
}

/// Decode a `uint` field into the representation the schema asks for.
///
/// [`UintRepr::Number`] accumulates into an `f64`, which is exact only up to
/// 2^53; larger 64-bit values are rounded.
pub fn decode_uint(
    cursor: &mut CdrCursor,
    width: BitWidth,
    repr: UintRepr,
) -> Result<Value, DecodeError> {
    match repr {
        UintRepr::BigInt => read_unsigned(cursor, width).map(Value::Uint),
        UintRepr::Number => {
            let len = width.byte_len();
            cursor.align(len)?;
            let bytes = cursor.consume(len)?;
            let value = bytes
                .iter()
                .rev()
                .fold(0f64, |acc, b| acc * 256.0 + f64::from(*b));
            Ok(Value::Number(value))
        }
    }
}

pub fn decode_float(cursor: &mut CdrCursor, width: FloatWidth) -> Result<Value, DecodeError> {
    cursor.align(width.byte_len())?;
    Ok(match width {
        FloatWidth::F32 => Value::F32(f32::from_le_bytes(cursor.consume_as_word()?)),
        FloatWidth::F64 => Value::F64(f64::from_le_bytes(cursor.consume_as_word()?)),
    })
}

pub fn decode_boolean(cursor: &mut CdrCursor) -> Result<bool, DecodeError> {
    let offset = cursor.offset();
    match cursor.consume_u8()? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DecodeError::InvalidBoolean { value, offset }),
    }
}

/// Read a length-prefixed, null-terminated string body without the terminator.
fn read_terminated(cursor: &mut CdrCursor, max: usize) -> Result<Bytes, DecodeError> {
    let len = read_length_prefix(cursor)?;
    if len > max {
        return Err(DecodeError::StringTooLong { len, max });
    }
    tracing::trace!(len, offset = cursor.offset(), "string length prefix");
    if len == 0 {
        return Ok(Bytes::new());
    }
    let data = cursor.consume(len - 1)?;
    cursor.consume(1)?;
    Ok(data)
}

pub fn decode_string(
    cursor: &mut CdrCursor,
    options: &DecodeOptions,
) -> Result<Arc<str>, DecodeError> {
    let data = read_terminated(cursor, options.max_string_size)?;
    let text = std::str::from_utf8(&data)?;
    Ok(Arc::from(text))
}

/// Same wire layout as [`decode_string`], but the bytes are returned unchecked.
pub fn decode_string_bytes(
    cursor: &mut CdrCursor,
    options: &DecodeOptions,
) -> Result<Bytes, DecodeError> {
    read_terminated(cursor, options.max_string_size)
}

pub fn decode_enum(
    cursor: &mut CdrCursor,
    mapping: &EnumMapping,
    options: &DecodeOptions,
) -> Result<Value, DecodeError> {
    let raw = read_unsigned(cursor, BitWidth::W32)? as u32;
    match mapping.get(raw) {
        Some(name) => Ok(Value::Enum(Arc::clone(name))),
        None if options.strict_enums => Err(DecodeError::UnknownEnumValue { value: raw }),
        None => Ok(Value::Null),
    }
}

pub fn decode_sequence(
    cursor: &mut CdrCursor,
    seq: &SequenceDef,
    options: &DecodeOptions,
) -> Result<Vec<Value>, DecodeError> {
    let len = match seq.fixed_size {
        Some(n) => n,
        None => read_length_prefix(cursor)?,
    };
    let max = options.max_sequence_size;
    if len > max {
        return Err(DecodeError::SequenceTooLong { len, max });
    }
    tracing::trace!(
        len,
        fixed = seq.fixed_size.is_some(),
        offset = cursor.offset(),
        "sequence length"
    );

    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(decode_field(cursor, &seq.item, options)?);
    }
    Ok(out)
}

/// Decode every field of `dict` in wire-index order.
pub fn decode_dictionary(
    cursor: &mut CdrCursor,
    dict: &DictionaryDef,
    options: &DecodeOptions,
) -> Result<Record, DecodeError> {
    let mut record = Record::with_capacity(dict.len());
    for field in dict.fields() {
        let value = decode_field(cursor, &field.ty, options)?;
        record.push(Arc::clone(&field.name), value);
    }
    Ok(record)
}
