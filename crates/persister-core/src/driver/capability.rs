/// SQL dialects the serializer knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    Postgresql,
    Mysql,
}

#[derive(Debug)]
pub struct Capability {
    /// Quoting, literal and type-name conventions of the database.
    pub dialect: Dialect,

    /// When `Some`, a text primary key must be declared as `VARCHAR(n)` because the
    /// database cannot index unbounded text.
    pub varchar_primary_key: Option<u64>,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        dialect: Dialect::Sqlite,
        varchar_primary_key: None,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        dialect: Dialect::Postgresql,
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        dialect: Dialect::Mysql,

        // TEXT columns cannot be part of a key without a prefix length.
        varchar_primary_key: Some(255),
    };
}
