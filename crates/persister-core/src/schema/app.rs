//! Unresolved type declarations, as produced by `#[derive(Model)]` or written by hand.

mod field;
pub use field::{Field, FieldTy};

mod model;
pub use model::Model;
