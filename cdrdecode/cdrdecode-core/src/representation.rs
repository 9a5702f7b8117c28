use std::fmt;

/// Encapsulation representation identifiers defined by OMG DDS-XTypes (7.6.3.1.2).
///
/// The identifier occupies the first two bytes of a serialized payload and is
/// stored big-endian, independent of the payload's own byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepresentationIdentifier {
    /// Plain CDR, big-endian (`0x0000`)
    CdrBe,
    /// Plain CDR, little-endian (`0x0001`)
    CdrLe,
    /// Parameter-list CDR, big-endian (`0x0002`)
    PlCdrBe,
    /// Parameter-list CDR, little-endian (`0x0003`)
    PlCdrLe,
    /// XML (`0x0004`)
    Xml,
    /// XCDR2 plain, big-endian (`0x0010`)
    Cdr2Be,
    /// XCDR2 plain, little-endian (`0x0011`)
    Cdr2Le,
    /// XCDR2 parameter-list, big-endian (`0x0012`)
    PlCdr2Be,
    /// XCDR2 parameter-list, little-endian (`0x0013`)
    PlCdr2Le,
    /// XCDR2 delimited, big-endian (`0x0014`)
    DCdr2Be,
    /// XCDR2 delimited, little-endian (`0x0015`)
    DCdr2Le,
    /// Unknown/vendor identifier
    Unknown(u16),
}

impl RepresentationIdentifier {
    /// Interpret the two identifier bytes exactly as they appear on the wire.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::from(u16::from_be_bytes(bytes))
    }

    pub fn value(self) -> u16 {
        match self {
            Self::CdrBe => 0x0000,
            Self::CdrLe => 0x0001,
            Self::PlCdrBe => 0x0002,
            Self::PlCdrLe => 0x0003,
            Self::Xml => 0x0004,
            Self::Cdr2Be => 0x0010,
            Self::Cdr2Le => 0x0011,
            Self::PlCdr2Be => 0x0012,
            Self::PlCdr2Le => 0x0013,
            Self::DCdr2Be => 0x0014,
            Self::DCdr2Le => 0x0015,
            Self::Unknown(v) => v,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CdrBe => "CDR_BE",
            Self::CdrLe => "CDR_LE",
            Self::PlCdrBe => "PL_CDR_BE",
            Self::PlCdrLe => "PL_CDR_LE",
            Self::Xml => "XML",
            Self::Cdr2Be => "CDR2_BE",
            Self::Cdr2Le => "CDR2_LE",
            Self::PlCdr2Be => "PL_CDR2_BE",
            Self::PlCdr2Le => "PL_CDR2_LE",
            Self::DCdr2Be => "D_CDR2_BE",
            Self::DCdr2Le => "D_CDR2_LE",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// `Some(true)` for little-endian variants, `None` where byte order does not apply.
    pub fn is_little_endian(self) -> Option<bool> {
        match self {
            Self::CdrLe | Self::PlCdrLe | Self::Cdr2Le | Self::PlCdr2Le | Self::DCdr2Le => {
                Some(true)
            }
            Self::CdrBe | Self::PlCdrBe | Self::Cdr2Be | Self::PlCdr2Be | Self::DCdr2Be => {
                Some(false)
            }
            Self::Xml | Self::Unknown(_) => None,
        }
    }

    pub fn is_cdr2(self) -> bool {
        matches!(
            self,
            Self::Cdr2Be
                | Self::Cdr2Le
                | Self::PlCdr2Be
                | Self::PlCdr2Le
                | Self::DCdr2Be
                | Self::DCdr2Le
        )
    }
}

impl From<u16> for RepresentationIdentifier {
    fn from(value: u16) -> Self {
        match value {
            0x0000 => Self::CdrBe,
            0x0001 => Self::CdrLe,
            0x0002 => Self::PlCdrBe,
            0x0003 => Self::PlCdrLe,
            0x0004 => Self::Xml,
            0x0010 => Self::Cdr2Be,
            0x0011 => Self::Cdr2Le,
            0x0012 => Self::PlCdr2Be,
            0x0013 => Self::PlCdr2Le,
            0x0014 => Self::DCdr2Be,
            0x0015 => Self::DCdr2Le,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for RepresentationIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(v) => write!(f, "UNKNOWN(0x{v:04x})"),
            known => f.write_str(known.as_str()),
        }
    }
}
