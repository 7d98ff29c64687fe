use super::*;

use persister_core::schema::db::Table;

#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,
    pub projection: Projection,
    pub filter: Option<Filter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `*`: every column, in table order
    All,

    /// `COUNT(*)`
    Count,
}

impl Statement {
    /// `SELECT *` of the rows whose identifier equals `key`.
    pub fn select_by_key(table: &Table, key: impl Into<Value>) -> Self {
        Select {
            table: table.name.clone(),
            projection: Projection::All,
            filter: Some(Filter::eq(&table.primary_key().name, key)),
        }
        .into()
    }

    pub fn select_all(table: &Table) -> Self {
        Select {
            table: table.name.clone(),
            projection: Projection::All,
            filter: None,
        }
        .into()
    }

    /// Counts the rows whose identifier equals `key`.
    pub fn count_by_key(table: &Table, key: impl Into<Value>) -> Self {
        Select {
            table: table.name.clone(),
            projection: Projection::Count,
            filter: Some(Filter::eq(&table.primary_key().name, key)),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
