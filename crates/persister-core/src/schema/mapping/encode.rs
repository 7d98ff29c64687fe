use super::qualify;
use crate::{
    schema::{MemberKind, TypeDescriptor},
    stmt::{Row, Value, ValueRecord},
    EncodeError, Error, Result,
};

/// Flattens an instance's value record into a row aligned with the descriptor's columns.
///
/// The record holds one value per declared member: primitives as themselves, nested
/// objects as [`Value::Record`] and nested lists as [`Value::List`] of records. Every
/// failure names the qualified path of the offending member.
pub fn encode(descriptor: &TypeDescriptor, record: ValueRecord) -> Result<Row> {
    let mut row = Row::with_capacity(descriptor.width());
    encode_record(descriptor, record, None, &mut row)?;
    debug_assert_eq!(row.len(), descriptor.width());
    Ok(row)
}

fn encode_record(
    descriptor: &TypeDescriptor,
    record: ValueRecord,
    prefix: Option<&str>,
    row: &mut Row,
) -> Result<()> {
    if record.len() > descriptor.members().len() {
        return Err(Error::encode(
            EncodeError::SizeMismatch,
            format!(
                "{}: expected {} values, found {}",
                prefix.unwrap_or(descriptor.name()),
                descriptor.members().len(),
                record.len()
            ),
        ));
    }

    let mut values = record.into_iter();

    for member in descriptor.members() {
        let path = qualify(prefix, &member.name);
        let value = values.next().unwrap_or_default();

        if value.is_null() {
            return Err(Error::encode(EncodeError::MissingValue, path));
        }

        match &member.kind {
            MemberKind::Primitive(primitive) => {
                if !value.is_a(primitive.ty) {
                    return Err(type_mismatch(&path, primitive.ty, &value));
                }

                verify_storable(&path, &value)?;
                row.push(value);
            }
            MemberKind::Nested(target) => {
                let nested = into_record(&path, value)?;
                encode_record(target, nested, Some(&path), row)?;
            }
            MemberKind::NestedList { target, size } => {
                let items = match value {
                    Value::List(items) => items,
                    other => return Err(type_mismatch(&path, "a list", &other)),
                };

                if items.len() != *size {
                    return Err(Error::encode(
                        EncodeError::SizeMismatch,
                        format!("{path}: expected {size} elements, found {}", items.len()),
                    ));
                }

                for (index, item) in items.into_iter().enumerate() {
                    let path = format!("{path}_{index}");

                    if item.is_null() {
                        return Err(Error::encode(EncodeError::MissingValue, path));
                    }

                    let nested = into_record(&path, item)?;
                    encode_record(target, nested, Some(&path), row)?;
                }
            }
        }
    }

    Ok(())
}

fn into_record(path: &str, value: Value) -> Result<ValueRecord> {
    match value {
        Value::Record(record) => Ok(record),
        other => Err(type_mismatch(path, "a record", &other)),
    }
}

/// Rejects primitives that no SQL literal can hold: non-finite floats, and text containing
/// NUL, which SQL parsers treat as the end of the statement.
fn verify_storable(path: &str, value: &Value) -> Result<()> {
    let storable = match value {
        Value::F32(v) => v.is_finite(),
        Value::F64(v) => v.is_finite(),
        Value::String(v) => !v.contains('\0'),
        _ => true,
    };

    if storable {
        Ok(())
    } else {
        Err(Error::encode(
            EncodeError::TypeMismatch,
            format!("{path}: {value:?} cannot be stored"),
        ))
    }
}

fn type_mismatch(path: &str, expected: impl std::fmt::Display, found: &Value) -> Error {
    Error::encode(
        EncodeError::TypeMismatch,
        format!("{path}: expected {expected}, found {}", found.kind_name()),
    )
}
