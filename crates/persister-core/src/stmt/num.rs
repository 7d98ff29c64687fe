use super::{Type, Value};
use crate::{Error, Result};

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty), )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Other numeric variants convert when the value fits.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => match other.clone().coerce(Type::$variant) {
                            Some(Value::$variant(v)) => Ok(v),
                            _ => Err(Error::type_conversion(other, stringify!($ty))),
                        },
                    }
                }
            }
        )*
    };
}

impl_num! {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}
