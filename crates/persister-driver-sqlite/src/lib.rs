mod value;

use persister_core::{
    bail,
    driver::{Capability, StatementExecutor},
    stmt::Row,
    Error, Result,
};
use rusqlite::Connection;
use std::path::Path;
use url::Url;

/// A statement executor backed by a SQLite connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: Connection,
}

impl Sqlite {
    /// Open a SQLite database from a connection URL.
    ///
    /// `sqlite::memory:` opens an in-memory database, `sqlite:<path>` a file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::execution)?;

        if url.scheme() != "sqlite" {
            bail!("connection URL does not have a `sqlite` scheme; url={url_str}");
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::execution)?;
        Ok(Self { connection })
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::execution)?;
        Ok(Self { connection })
    }
}

impl StatementExecutor for Sqlite {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        let count = self
            .connection
            .execute(sql, [])
            .map_err(Error::execution)?;

        log::trace!("sqlite execute; rows_affected={count}");
        Ok(())
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        let mut stmt = self.connection.prepare(sql).map_err(Error::execution)?;
        let width = stmt.column_count();
        let mut rows = stmt.query([]).map_err(Error::execution)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::execution)? {
            let mut values = Row::with_capacity(width);

            for index in 0..width {
                let value = row.get_ref(index).map_err(Error::execution)?;
                values.push(value::from_sql(value)?);
            }

            ret.push(values);
        }

        log::trace!("sqlite query; rows={}", ret.len());
        Ok(ret)
    }
}
