#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use persister_core::driver::{Capability, Dialect};

/// Serialize a statement to a SQL string
///
/// Values are written inline as literals, so the output can be handed to any executor that
/// accepts plain SQL text.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,

    /// Declared length of a text primary key, when the database cannot key on `TEXT`.
    varchar_primary_key: Option<u64>,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// A serializer for the database the capability describes.
    pub fn new(capability: &Capability) -> Serializer {
        Serializer {
            flavor: match capability.dialect {
                Dialect::Sqlite => Flavor::Sqlite,
                Dialect::Postgresql => Flavor::Postgresql,
                Dialect::Mysql => Flavor::Mysql,
            },
            varchar_primary_key: capability.varchar_primary_key,
        }
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
