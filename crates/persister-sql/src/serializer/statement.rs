use super::{Comma, Ident, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let name = Ident(&self.name);
        let columns = Comma(&self.columns);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);

        fmt!(f, "DELETE FROM " table self.filter.as_ref());
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);
        let columns = Comma(self.columns.iter().map(Ident));
        let rows = Comma(self.rows.iter().map(RowValues));

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES " rows);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);
        let projection = match self.projection {
            stmt::Projection::All => "*",
            stmt::Projection::Count => "COUNT(*)",
        };

        fmt!(f, "SELECT " projection " FROM " table self.filter.as_ref());
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);
        let filter = &self.filter;

        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let column = Ident(&self.column);
        let value = &self.value;

        fmt!(f, column " = " value);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let column = Ident(&self.column);
        let value = &self.value;

        fmt!(f, " WHERE " column " = " value);
    }
}

struct RowValues<'a>(&'a stmt::Row);

impl ToSql for RowValues<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let values = Comma(self.0.iter());

        fmt!(f, "(" values ")");
    }
}
