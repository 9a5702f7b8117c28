//! The 4-byte encapsulation header preceding every CDR payload.

use cdrdecode_core::{BitWidth, RepresentationIdentifier};

use crate::{cursor::CdrCursor, decode::read_unsigned, error::DecodeError};

/// Size of the encapsulation header in bytes.
pub const ENCAPSULATION_HEADER_SIZE: usize = 4;

/// Raw encapsulation header fields.
///
/// Both fields are read as little-endian `u16`, so a `CDR_LE` payload
/// (`00 01` on the wire) reports `representation_identifier == 0x0100`.
/// Use [`representation`](Self::representation) for the interpreted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CdrHeader {
    pub representation_identifier: u16,
    pub representation_options: u16,
}

impl CdrHeader {
    pub fn representation(&self) -> RepresentationIdentifier {
        RepresentationIdentifier::from_bytes(self.representation_identifier.to_le_bytes())
    }
}

/// Read the two consecutive `u16` header fields. Both are naturally aligned,
/// so no padding is involved.
pub fn decode_header(cursor: &mut CdrCursor) -> Result<CdrHeader, DecodeError> {
    let representation_identifier = read_unsigned(cursor, BitWidth::W16)? as u16;
    let representation_options = read_unsigned(cursor, BitWidth::W16)? as u16;
    Ok(CdrHeader {
        representation_identifier,
        representation_options,
    })
}
