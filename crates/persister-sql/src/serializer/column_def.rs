use super::{ty::ColumnType, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);
        let ty = ColumnType {
            ty: self.ty,
            primary_key: self.primary_key,
        };
        let constraint = self.primary_key.then_some(" PRIMARY KEY");

        fmt!(f, name " " ty constraint)
    }
}
