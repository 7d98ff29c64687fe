use persister_core::schema::db::{self, FlatColumn};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,
    pub primary_key: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &FlatColumn, primary_key: bool) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.storage_ty,
            primary_key,
        }
    }
}
