//! The flat, database-level view of a persisted type.

mod column;
pub use column::FlatColumn;

mod table;
pub use table::Table;

mod ty;
pub use ty::Type;
