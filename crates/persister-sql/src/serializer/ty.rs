use super::{Flavor, ToSql};

use persister_core::schema::db;

/// A column's storage type, spelled for the target database.
pub(super) struct ColumnType {
    pub(super) ty: db::Type,
    pub(super) primary_key: bool,
}

impl ToSql for ColumnType {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        if let (db::Type::Text, true, Some(len)) = (
            self.ty,
            self.primary_key,
            f.serializer.varchar_primary_key,
        ) {
            f.dst.push_str(&format!("VARCHAR({len})"));
            return;
        }

        fmt!(
            f,
            match (f.serializer.flavor, self.ty) {
                (Flavor::Sqlite, db::Type::Integer) => "INTEGER",
                (_, db::Type::Integer) => "BIGINT",
                (Flavor::Sqlite, db::Type::Real) => "REAL",
                (Flavor::Postgresql, db::Type::Real) => "DOUBLE PRECISION",
                (Flavor::Mysql, db::Type::Real) => "DOUBLE",
                (_, db::Type::Text) => "TEXT",
                (Flavor::Postgresql, db::Type::Blob) => "BYTEA",
                (_, db::Type::Blob) => "BLOB",
            }
        );
    }
}
