//! Decoded values produced by walking a schema over a CDR body.

use std::sync::Arc;

use bytes::Bytes;

use crate::{
    error::ValueTypeError,
    schema::{FieldType, FloatWidth, UintRepr},
};

/// Value produced by the decoder.
/// The variant is fully determined by the schema node that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An enum value with no mapped member.
    Null,
    Bool(bool),
    /// `int` fields. Bytes are assembled without sign extension, so widths
    /// below 64 bits are never negative.
    Int(i64),
    /// `uint` fields with [`UintRepr::BigInt`].
    Uint(u64),
    /// `uint` fields with [`UintRepr::Number`].
    Number(f64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Bytes),
    Enum(Arc<str>),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Value::Int(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Int")),
        }
    }

    pub fn try_u64(&self) -> Result<Option<u64>, ValueTypeError> {
        match self {
            Value::Uint(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Uint")),
        }
    }

    /// Numeric view of `Number`, `F32` and `F64` values.
    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::Number(v) | Value::F64(v) => Ok(Some(*v)),
            Value::F32(v) => Ok(Some(f64::from(*v))),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Number")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::String(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_enum(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::Enum(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Enum")),
        }
    }

    pub fn try_list(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::List(v) => Ok(Some(v.as_slice())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("List")),
        }
    }

    pub fn try_record(&self) -> Result<Option<&Record>, ValueTypeError> {
        match self {
            Value::Record(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Record")),
        }
    }

    /// Look up a record field by name. `None` for non-records and missing names.
    pub fn get(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(record) => record.get(name),
            _ => None,
        }
    }

    /// Whether this value has the shape `ty` decodes to.
    pub fn conforms_to(&self, ty: &FieldType) -> bool {
        match (self, ty) {
            (Value::Int(_), FieldType::Int(_)) => true,
            (
                Value::Uint(_),
                FieldType::Uint {
                    repr: UintRepr::BigInt,
                    ..
                },
            ) => true,
            (
                Value::Number(_),
                FieldType::Uint {
                    repr: UintRepr::Number,
                    ..
                },
            ) => true,
            (Value::F32(_), FieldType::Float(FloatWidth::F32)) => true,
            (Value::F64(_), FieldType::Float(FloatWidth::F64)) => true,
            (Value::Bool(_), FieldType::Boolean) => true,
            (Value::String(_), FieldType::String) => true,
            (Value::Bytes(_), FieldType::StringBytes) => true,
            (Value::Null, FieldType::Enum(_)) => true,
            (Value::Enum(name), FieldType::Enum(mapping)) => {
                mapping.iter().any(|(_, member)| member == name.as_ref())
            }
            (Value::List(items), FieldType::Sequence(seq)) => {
                seq.fixed_size.is_none_or(|n| n == items.len())
                    && items.iter().all(|item| item.conforms_to(&seq.item))
            }
            (Value::Record(record), FieldType::Dictionary(dict)) => {
                record.len() == dict.len()
                    && record
                        .iter()
                        .zip(dict.fields())
                        .all(|((name, value), field)| {
                            *name == field.name && value.conforms_to(&field.ty)
                        })
            }
            _ => false,
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Uint(_) => "Uint",
            Value::Number(_) => "Number",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Enum(_) => "Enum",
            Value::List(_) => "List",
            Value::Record(_) => "Record",
        }
    }
}

/// A decoded dictionary: field values keyed by name, kept in wire order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(Vec<(Arc<str>, Value)>);

impl Record {
    pub fn new(fields: Vec<(Arc<str>, Value)>) -> Self {
        Self(fields)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, name: Arc<str>, value: Value) {
        self.0.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(field, _)| field.as_ref() == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &Value)> {
        self.0.iter().map(|(name, value)| (name, value))
    }

    /// Field names in wire order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_ref())
    }
}

impl From<Record> for Vec<(Arc<str>, Value)> {
    fn from(value: Record) -> Self {
        value.0
    }
}
