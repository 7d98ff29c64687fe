pub mod driver;
pub use driver::StatementExecutor;

mod error;
pub use error::{DecodeError, DescriptorError, EncodeError, Error, IntoError};

pub mod schema;
pub use schema::{Registry, TypeDescriptor};

pub mod stmt;

/// A Result type alias that uses the persister's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
