//! Schema type model: the closed set of field kinds a CDR body is described with.

mod format;
mod types;

pub use format::format_field_type;
pub use types::{
    BitWidth, DictionaryDef, DictionaryField, EnumMapping, FieldType, FloatWidth, SequenceDef,
    UintRepr,
};
