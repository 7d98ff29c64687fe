use super::Model;
use crate::stmt;

use std::fmt;

/// A persisted member of a type declaration.
#[derive(Debug, Clone)]
pub struct Field {
    /// The member name. Becomes the column name, or the column prefix for embedded members.
    pub name: String,

    /// Primitive, embedded or embedded list
    pub ty: FieldTy,

    /// Number of values the member holds. One for primitives and single embedded members,
    /// the fixed element count for embedded lists.
    pub size: usize,
}

#[derive(Clone, Copy)]
pub enum FieldTy {
    /// A single primitive value
    Primitive(stmt::Type),

    /// A nested object, declared by the given function
    Embedded(fn() -> Model),

    /// A fixed-size list of nested objects
    EmbeddedList(fn() -> Model),
}

impl Field {
    pub fn primitive(name: impl Into<String>, ty: stmt::Type) -> Field {
        Field {
            name: name.into(),
            ty: FieldTy::Primitive(ty),
            size: 1,
        }
    }

    pub fn embedded(name: impl Into<String>, target: fn() -> Model) -> Field {
        Field {
            name: name.into(),
            ty: FieldTy::Embedded(target),
            size: 1,
        }
    }

    /// A list of exactly `size` nested objects. The size is validated when the declaration
    /// is resolved.
    pub fn embedded_list(name: impl Into<String>, target: fn() -> Model, size: usize) -> Field {
        Field {
            name: name.into(),
            ty: FieldTy::EmbeddedList(target),
            size,
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::Embedded(target) => fmt.debug_tuple("Embedded").field(&target().name).finish(),
            Self::EmbeddedList(target) => fmt
                .debug_tuple("EmbeddedList")
                .field(&target().name)
                .finish(),
        }
    }
}
