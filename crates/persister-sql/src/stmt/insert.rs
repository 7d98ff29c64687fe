use super::*;

use persister_core::schema::db::Table;

#[derive(Debug, Clone)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Column names, in table order
    pub columns: Vec<String>,

    /// One row per inserted record, aligned with `columns`
    pub rows: Vec<Row>,
}

impl Statement {
    pub fn insert(table: &Table, rows: Vec<Row>) -> Self {
        debug_assert!(!rows.is_empty(), "INSERT requires at least one row");
        debug_assert!(rows.iter().all(|row| row.len() == table.width()));

        Insert {
            table: table.name.clone(),
            columns: table.columns.iter().map(|column| column.name.clone()).collect(),
            rows,
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
