mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Projection, Select};

mod update;
pub use update::{Assignment, Update};

pub use persister_core::stmt::*;

/// A statement against the table of one persisted type.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Returns `true` if executing the statement yields rows.
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Name of the table the statement targets.
    pub fn table_name(&self) -> &str {
        match self {
            Statement::CreateTable(stmt) => &stmt.name,
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }
}
