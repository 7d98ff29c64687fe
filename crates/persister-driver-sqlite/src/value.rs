use persister_core::{stmt::Value, Result};
use rusqlite::types::ValueRef;

/// Converts a SQLite value to its storage-class value.
///
/// The row decoder narrows it to the declared member type afterwards.
pub(crate) fn from_sql(value: ValueRef<'_>) -> Result<Value> {
    Ok(match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(value) => Value::I64(value),
        ValueRef::Real(value) => Value::F64(value),
        ValueRef::Text(value) => Value::String(String::from_utf8(value.to_vec())?),
        ValueRef::Blob(value) => Value::Bytes(value.to_vec()),
    })
}
