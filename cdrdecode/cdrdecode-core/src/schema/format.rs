use std::fmt::{Error, Result, Write as _};

use super::{FieldType, UintRepr};

/// Format a schema in a readable style:
/// scalar nodes are rendered in one line, compound nodes are pretty-printed.
/// Dictionary fields are listed in wire order together with their index.
pub fn format_field_type(ty: &FieldType) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_block(ty, None, 0, &mut out)?;
    Ok(out)
}

fn is_inline(ty: &FieldType) -> bool {
    ty.is_primitive() && !matches!(ty, FieldType::Enum(_))
}

fn repr_name(repr: UintRepr) -> &'static str {
    match repr {
        UintRepr::Number => "number",
        UintRepr::BigInt => "bigint",
    }
}

fn format_block(ty: &FieldType, index: Option<u32>, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    writeln!(out, "{pad}type: {}", ty.type_name())?;
    if let Some(index) = index {
        writeln!(out, "{pad}index: {index}")?;
    }

    match ty {
        FieldType::Uint { repr, .. } => {
            writeln!(out, "{pad}repr: {}", repr_name(*repr))?;
        }
        FieldType::Enum(mapping) => {
            writeln!(out, "{pad}members:")?;
            for (value, name) in mapping.iter() {
                writeln!(out, "{pad}    {value}: {name}")?;
            }
        }
        FieldType::Sequence(seq) => {
            format_labeled("item", &seq.item, None, indent, out)?;
            if let Some(size) = seq.fixed_size {
                writeln!(out, "{pad}size: {size}")?;
            }
        }
        FieldType::Dictionary(dict) => {
            writeln!(out, "{pad}fields:")?;
            for field in dict.fields() {
                format_labeled(&field.name, &field.ty, Some(field.index), indent + 4, out)?;
            }
        }
        _ => {}
    }

    Ok(())
}

fn format_labeled(
    label: &str,
    ty: &FieldType,
    index: Option<u32>,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    if is_inline(ty) {
        write!(out, "{pad}{label}: {{ type: {}", ty.type_name())?;
        if let FieldType::Uint { repr, .. } = ty {
            write!(out, ", repr: {}", repr_name(*repr))?;
        }
        if let Some(index) = index {
            write!(out, ", index: {index}")?;
        }
        writeln!(out, " }}")?;
    } else {
        writeln!(out, "{pad}{label}:")?;
        format_block(ty, index, indent + 4, out)?;
    }
    Ok(())
}
