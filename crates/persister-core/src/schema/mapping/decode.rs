use crate::{
    schema::{db::FlatColumn, MemberKind, TypeDescriptor},
    stmt::{Row, Value, ValueRecord},
    DecodeError, Error, Result,
};

/// Rebuilds an instance's value record from a row.
///
/// A cursor walks the row in column order while the members are visited in declaration
/// order; nested members consume their columns from the same cursor. Each value is
/// converted to its member's declared type (see [`Value::coerce`]), so rows straight from a
/// driver decode the same as rows produced by [`encode`](super::encode).
pub fn decode(descriptor: &TypeDescriptor, row: Row) -> Result<ValueRecord> {
    if row.len() != descriptor.width() {
        return Err(arity_mismatch(descriptor, row.len()));
    }

    let len = row.len();
    let mut cursor = descriptor.columns().iter().zip(row);
    let record = decode_record(descriptor, &mut cursor, descriptor, len)?;

    if cursor.next().is_some() {
        return Err(arity_mismatch(descriptor, len));
    }

    Ok(record)
}

fn decode_record<'a>(
    descriptor: &TypeDescriptor,
    cursor: &mut impl Iterator<Item = (&'a FlatColumn, Value)>,
    root: &TypeDescriptor,
    len: usize,
) -> Result<ValueRecord> {
    let mut fields = Vec::with_capacity(descriptor.members().len());

    for member in descriptor.members() {
        let value = match &member.kind {
            MemberKind::Primitive(primitive) => {
                let Some((column, value)) = cursor.next() else {
                    return Err(arity_mismatch(root, len));
                };

                let found = value.kind_name();
                match value.coerce(primitive.ty) {
                    Some(value) => value,
                    None => {
                        return Err(Error::decode(
                            DecodeError::TypeMismatch,
                            format!(
                                "{}: expected {}, found {found}",
                                column.name, primitive.ty
                            ),
                        ))
                    }
                }
            }
            MemberKind::Nested(target) => decode_record(target, cursor, root, len)?.into(),
            MemberKind::NestedList { target, size } => {
                let items = (0..*size)
                    .map(|_| decode_record(target, cursor, root, len).map(Value::from))
                    .collect::<Result<Vec<_>>>()?;
                Value::List(items)
            }
        };

        fields.push(value);
    }

    Ok(ValueRecord::from_vec(fields))
}

fn arity_mismatch(descriptor: &TypeDescriptor, found: usize) -> Error {
    Error::decode(
        DecodeError::ArityMismatch,
        format!(
            "{}: expected {} values, found {found}",
            descriptor.name(),
            descriptor.width()
        ),
    )
}
