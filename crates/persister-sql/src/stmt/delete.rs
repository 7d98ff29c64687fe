use super::*;

use persister_core::schema::db::Table;

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,

    /// Without a filter every row is deleted.
    pub filter: Option<Filter>,
}

impl Statement {
    pub fn delete_by_key(table: &Table, key: impl Into<Value>) -> Self {
        Delete {
            table: table.name.clone(),
            filter: Some(Filter::eq(&table.primary_key().name, key)),
        }
        .into()
    }

    pub fn delete_all(table: &Table) -> Self {
        Delete {
            table: table.name.clone(),
            filter: None,
        }
        .into()
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
