use crate::Result;

use persister_core::stmt;

/// A Rust type stored in a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;

    fn load(value: stmt::Value) -> Result<Self>;

    fn to_value(&self) -> stmt::Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$variant;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> stmt::Value {
                    stmt::Value::$variant(*self)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Primitive for String {
    const TYPE: stmt::Type = stmt::Type::String;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE: stmt::Type = stmt::Type::Bytes;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }
}
