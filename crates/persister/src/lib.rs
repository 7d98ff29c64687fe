pub mod db;
pub use db::{Builder, ChangeListener, Persister};

mod model;
pub use model::{EmbedList, Model};

pub mod stmt;
pub use stmt::Primitive;

pub use persister_core::{
    schema::{self, Registry, TypeDescriptor},
    DecodeError, DescriptorError, EncodeError, Error, Result,
};

pub use persister_core::driver::{self, StatementExecutor};

pub use persister_macros::{Model, Primitive};

#[cfg(feature = "sqlite")]
pub use persister_driver_sqlite::Sqlite;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{EmbedList, Error, Model, Primitive, Result};
    pub use persister_core::{
        schema::app,
        stmt::{Type, Value, ValueRecord},
    };
    pub use std::{string::String, vec::Vec};
}
