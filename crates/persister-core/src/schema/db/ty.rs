use crate::stmt;

use std::fmt;

/// Database storage classes.
///
/// `db::Type` is how a column is stored; [`stmt::Type`] is how the persister sees the value.
/// Each dialect spells the storage classes its own way when generating DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Integers and booleans
    Integer,

    /// Floating point numbers
    Real,

    /// UTF-8 text
    Text,

    /// Raw bytes
    Blob,
}

impl Type {
    /// Maps an application-level type to its storage class.
    ///
    /// Returns `None` for types no supported database can store losslessly. Unsigned 64-bit
    /// integers exceed the signed 64-bit integer columns every dialect provides.
    pub fn from_app(ty: stmt::Type) -> Option<Type> {
        match ty {
            stmt::Type::Bool
            | stmt::Type::I8
            | stmt::Type::I16
            | stmt::Type::I32
            | stmt::Type::I64
            | stmt::Type::U8
            | stmt::Type::U16
            | stmt::Type::U32 => Some(Type::Integer),
            stmt::Type::U64 => None,
            stmt::Type::F32 | stmt::Type::F64 => Some(Type::Real),
            stmt::Type::String => Some(Type::Text),
            stmt::Type::Bytes => Some(Type::Blob),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Type::Integer => "INTEGER",
            Type::Real => "REAL",
            Type::Text => "TEXT",
            Type::Blob => "BLOB",
        })
    }
}
