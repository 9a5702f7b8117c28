//! Decoder-independent core types for `cdrdecode`.
//!
//! This crate provides the schema type model ([`FieldType`]) describing a CDR
//! body, the [`Value`] representation a decoded body is turned into, and the
//! [`RepresentationIdentifier`] carried by the encapsulation header.

mod error;
mod representation;
mod schema;
mod value;

pub use error::{SchemaError, ValueTypeError};
pub use representation::RepresentationIdentifier;
pub use schema::{
    BitWidth, DictionaryDef, DictionaryField, EnumMapping, FieldType, FloatWidth, SequenceDef,
    UintRepr, format_field_type,
};
pub use value::{Record, Value};
