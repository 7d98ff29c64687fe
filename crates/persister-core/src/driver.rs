mod capability;
pub use capability::{Capability, Dialect};

use crate::stmt::Row;

/// Runs SQL text against an already-open database connection.
///
/// The persister never opens, configures or closes connections itself; it receives an
/// executor and hands it fully serialized statements. Driver failures should be converted
/// with [`Error::execution`](crate::Error::execution) and are propagated as is.
pub trait StatementExecutor {
    /// Describes the database behind the executor, which picks the SQL dialect.
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    /// Execute a statement that returns no rows.
    fn execute(&mut self, sql: &str) -> crate::Result<()>;

    /// Execute a query and collect its rows.
    ///
    /// Values should be returned in their storage class (`I64`, `F64`, `String`, `Bytes`
    /// or `Null`); the row decoder converts them to the declared member types.
    fn query(&mut self, sql: &str) -> crate::Result<Vec<Row>>;
}

impl<T: StatementExecutor + ?Sized> StatementExecutor for Box<T> {
    fn capability(&self) -> &'static Capability {
        (**self).capability()
    }

    fn execute(&mut self, sql: &str) -> crate::Result<()> {
        (**self).execute(sql)
    }

    fn query(&mut self, sql: &str) -> crate::Result<Vec<Row>> {
        (**self).query(sql)
    }
}
