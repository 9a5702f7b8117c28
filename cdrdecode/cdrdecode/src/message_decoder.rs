use cdrdecode_core::FieldType;

use crate::{
    error::DecodeError,
    message::{CdrInput, DecodedMessage, decode_message},
    options::DecodeOptions,
};

/// Decoder bound to one body schema, built once and reused for every message
/// of that type.
#[derive(Debug, Clone)]
pub struct CdrMessageDecoder {
    schema: FieldType,
    options: DecodeOptions,
}

impl CdrMessageDecoder {
    pub fn new(schema: FieldType) -> Self {
        Self {
            schema,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema(&self) -> &FieldType {
        &self.schema
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a single message payload.
    pub fn decode<'a>(&self, input: impl Into<CdrInput<'a>>) -> Result<DecodedMessage, DecodeError> {
        decode_message(input, &self.schema, &self.options)
    }
}
