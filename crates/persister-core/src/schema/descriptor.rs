use super::db;
use crate::stmt;

use std::{any::TypeId, fmt, sync::Arc};

/// The resolved, cached structure of a persisted type.
///
/// Built once per type by the [`Registry`](super::Registry) and shared from then on. Holds
/// the ordered member tree and the flattened table derived from it.
pub struct TypeDescriptor {
    pub(super) type_id: TypeId,
    pub(super) name: String,
    pub(super) members: Vec<MemberDescriptor>,
    pub(super) table: db::Table,
}

#[derive(Debug)]
pub struct MemberDescriptor {
    /// The member name
    pub name: String,

    pub kind: MemberKind,
}

#[derive(Debug)]
pub enum MemberKind {
    /// A single primitive value
    Primitive(PrimitiveMember),

    /// A nested object
    Nested(Arc<TypeDescriptor>),

    /// A fixed-size list of nested objects, flattened into `size` column groups
    NestedList {
        target: Arc<TypeDescriptor>,
        size: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimitiveMember {
    /// The member type, from the persister's point of view.
    pub ty: stmt::Type,

    /// How the database stores it
    pub storage_ty: db::Type,
}

impl TypeDescriptor {
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    pub fn table(&self) -> &db::Table {
        &self.table
    }

    /// The flattened columns. The first one is the identifier.
    pub fn columns(&self) -> &[db::FlatColumn] {
        &self.table.columns
    }

    pub fn primary_key(&self) -> &db::FlatColumn {
        self.table.primary_key()
    }

    /// Number of flattened columns, and so the length of every encoded row.
    pub fn width(&self) -> usize {
        self.table.width()
    }
}

impl MemberDescriptor {
    /// Number of values the member holds: the list size, otherwise one.
    pub fn size(&self) -> usize {
        match self.kind {
            MemberKind::NestedList { size, .. } => size,
            _ => 1,
        }
    }

    /// Number of flattened columns the member expands to.
    pub fn width(&self) -> usize {
        match &self.kind {
            MemberKind::Primitive(_) => 1,
            MemberKind::Nested(target) => target.width(),
            MemberKind::NestedList { target, size } => target.width() * size,
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("table", &self.table.name)
            .finish()
    }
}
