use super::Type;
use crate::stmt;

/// One column of a flattened type.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatColumn {
    /// Qualified column name, e.g. `ps_1_s1` for member `s1` of the second element of
    /// list `ps`.
    pub name: String,

    /// The column type, from the persister's point of view.
    pub ty: stmt::Type,

    /// The database storage type of the column.
    pub storage_ty: Type,
}
