mod primitive;
pub use primitive::Primitive;

pub use persister_core::stmt::*;
