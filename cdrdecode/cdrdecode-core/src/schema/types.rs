use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::error::SchemaError;

/// Width of an integer field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitWidth {
    W8,
    W16,
    W32,
    W64,
}

impl BitWidth {
    pub fn from_bits(bits: u32) -> Result<Self, SchemaError> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            _ => Err(SchemaError::UnsupportedBitWidth { bits }),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Number of bytes on the wire, which is also the alignment boundary.
    pub fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Width of an IEEE-754 float field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    pub fn from_bits(bits: u32) -> Result<Self, SchemaError> {
        match bits {
            32 => Ok(Self::F32),
            64 => Ok(Self::F64),
            _ => Err(SchemaError::UnsupportedFloatWidth { bits }),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::F32 => 32,
            Self::F64 => 64,
        }
    }

    pub fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }
}

/// Representation chosen by the schema author for decoded unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UintRepr {
    /// Accumulated into an `f64`. Values above 2^53 silently lose precision.
    #[default]
    Number,
    /// Accumulated exactly into a `u64`.
    BigInt,
}

/// Integer → symbol mapping for an enum field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumMapping {
    members: BTreeMap<u32, Arc<str>>,
}

impl EnumMapping {
    pub fn new<S: Into<Arc<str>>>(members: impl IntoIterator<Item = (u32, S)>) -> Self {
        Self {
            members: members
                .into_iter()
                .map(|(value, name)| (value, name.into()))
                .collect(),
        }
    }

    /// Build a mapping whose members are numbered from 0 in iteration order.
    pub fn from_variants<S: Into<Arc<str>>>(variants: impl IntoIterator<Item = S>) -> Self {
        Self::new((0u32..).zip(variants))
    }

    pub fn get(&self, value: u32) -> Option<&Arc<str>> {
        self.members.get(&value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.members.iter().map(|(value, name)| (*value, name.as_ref()))
    }
}

/// A homogeneous sequence, either length-prefixed or of a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDef {
    pub item: Box<FieldType>,
    /// `Some(n)` means the element count is fixed by convention and no
    /// length prefix is present on the wire.
    pub fixed_size: Option<usize>,
}

/// A named dictionary member carrying its wire index.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryField {
    pub name: Arc<str>,
    pub index: u32,
    pub ty: FieldType,
}

impl DictionaryField {
    pub fn new(name: impl Into<Arc<str>>, index: u32, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            index,
            ty,
        }
    }
}

/// A struct-like record. Fields are kept sorted by wire index, so iteration
/// order is decode order no matter how the fields were authored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictionaryDef {
    fields: Vec<DictionaryField>,
}

impl DictionaryDef {
    pub fn new(fields: impl IntoIterator<Item = DictionaryField>) -> Result<Self, SchemaError> {
        let mut fields: Vec<DictionaryField> = fields.into_iter().collect();

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateName {
                    name: field.name.to_string(),
                });
            }
        }

        fields.sort_by_key(|f| f.index);
        if let Some(pair) = fields.windows(2).find(|w| w[0].index == w[1].index) {
            return Err(SchemaError::DuplicateIndex {
                index: pair[0].index,
                first: pair[0].name.to_string(),
                second: pair[1].name.to_string(),
            });
        }

        Ok(Self { fields })
    }

    /// Fields in wire order.
    pub fn fields(&self) -> &[DictionaryField] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&DictionaryField> {
        self.fields.iter().find(|f| f.name.as_ref() == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A schema node. The closed set of field kinds the decoder understands.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Int(BitWidth),
    Uint { width: BitWidth, repr: UintRepr },
    Float(FloatWidth),
    Boolean,
    /// UTF-8 text, null-terminated on the wire.
    String,
    /// Null-terminated on the wire, returned as raw bytes.
    StringBytes,
    Enum(EnumMapping),
    Sequence(SequenceDef),
    Dictionary(DictionaryDef),
}

impl FieldType {
    pub fn uint(width: BitWidth) -> Self {
        Self::Uint {
            width,
            repr: UintRepr::Number,
        }
    }

    pub fn big_uint(width: BitWidth) -> Self {
        Self::Uint {
            width,
            repr: UintRepr::BigInt,
        }
    }

    pub fn sequence(item: FieldType) -> Self {
        Self::Sequence(SequenceDef {
            item: Box::new(item),
            fixed_size: None,
        })
    }

    pub fn fixed_sequence(item: FieldType, size: usize) -> Self {
        Self::Sequence(SequenceDef {
            item: Box::new(item),
            fixed_size: Some(size),
        })
    }

    pub fn dictionary(
        fields: impl IntoIterator<Item = DictionaryField>,
    ) -> Result<Self, SchemaError> {
        DictionaryDef::new(fields).map(Self::Dictionary)
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Sequence(_) | Self::Dictionary(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(BitWidth::W8) => "int8",
            Self::Int(BitWidth::W16) => "int16",
            Self::Int(BitWidth::W32) => "int32",
            Self::Int(BitWidth::W64) => "int64",
            Self::Uint {
                width: BitWidth::W8,
                ..
            } => "uint8",
            Self::Uint {
                width: BitWidth::W16,
                ..
            } => "uint16",
            Self::Uint {
                width: BitWidth::W32,
                ..
            } => "uint32",
            Self::Uint {
                width: BitWidth::W64,
                ..
            } => "uint64",
            Self::Float(FloatWidth::F32) => "float32",
            Self::Float(FloatWidth::F64) => "float64",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::StringBytes => "string_bytes",
            Self::Enum(_) => "enum",
            Self::Sequence(_) => "sequence",
            Self::Dictionary(_) => "dictionary",
        }
    }

    /// Nesting depth of this node; primitives count as 1.
    ///
    /// The decoder recurses once per level, so callers accepting untrusted
    /// schemas can bound stack usage by checking this up front.
    pub fn depth(&self) -> usize {
        match self {
            Self::Sequence(seq) => 1 + seq.item.depth(),
            Self::Dictionary(dict) => {
                1 + dict.fields().iter().map(|f| f.ty.depth()).max().unwrap_or(0)
            }
            _ => 1,
        }
    }
}

impl From<DictionaryDef> for FieldType {
    fn from(value: DictionaryDef) -> Self {
        Self::Dictionary(value)
    }
}

impl From<SequenceDef> for FieldType {
    fn from(value: SequenceDef) -> Self {
        Self::Sequence(value)
    }
}

impl From<EnumMapping> for FieldType {
    fn from(value: EnumMapping) -> Self {
        Self::Enum(value)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = super::format_field_type(self)?;
        f.write_str(&text)
    }
}
