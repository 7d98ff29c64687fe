use super::{Type, ValueRecord};
use crate::{Error, Result};

/// A dynamically typed value.
///
/// Primitive variants appear in flat [`Row`](super::Row)s. `Record` and `List` only appear
/// in the structured [`ValueRecord`] an instance produces before it is flattened.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point number
    F32(f32),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Null value
    #[default]
    Null,

    /// The members of a nested object
    Record(ValueRecord),

    /// The elements of a fixed-size nested list
    List(Vec<Value>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        ValueRecord::from_vec(fields).into()
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Null => "Null",
            Self::Record(_) => "Record",
            Self::List(_) => "List",
        }
    }

    /// Returns the primitive type of the value, if it has one.
    pub fn ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Bytes(_) => Type::Bytes,
            Self::Null | Self::Record(_) | Self::List(_) => return None,
        })
    }

    /// Returns `true` if the value is exactly of type `ty`.
    pub fn is_a(&self, ty: Type) -> bool {
        self.ty() == Some(ty)
    }

    /// Converts the value into type `ty`, as read from a database column.
    ///
    /// Drivers hand back storage classes (`I64`, `F64`, `String`, `Bytes`). Integers narrow
    /// with a range check, `0`/`1` become booleans and integers widen to floats. Values
    /// already of type `ty` pass unchanged. Returns `None` when no lossless reading exists,
    /// including for `Null`.
    pub fn coerce(self, ty: Type) -> Option<Value> {
        if self.is_a(ty) {
            return Some(self);
        }

        match ty {
            Type::Bool => match self.as_i128()? {
                0 => Some(Value::Bool(false)),
                1 => Some(Value::Bool(true)),
                _ => None,
            },
            Type::I8 => i8::try_from(self.as_i128()?).ok().map(Value::I8),
            Type::I16 => i16::try_from(self.as_i128()?).ok().map(Value::I16),
            Type::I32 => i32::try_from(self.as_i128()?).ok().map(Value::I32),
            Type::I64 => i64::try_from(self.as_i128()?).ok().map(Value::I64),
            Type::U8 => u8::try_from(self.as_i128()?).ok().map(Value::U8),
            Type::U16 => u16::try_from(self.as_i128()?).ok().map(Value::U16),
            Type::U32 => u32::try_from(self.as_i128()?).ok().map(Value::U32),
            Type::U64 => u64::try_from(self.as_i128()?).ok().map(Value::U64),
            Type::F32 => match self {
                Value::F64(v) => Some(Value::F32(v as f32)),
                other => other.as_i128().map(|v| Value::F32(v as f32)),
            },
            Type::F64 => match self {
                Value::F32(v) => Some(Value::F64(f64::from(v))),
                other => other.as_i128().map(|v| Value::F64(v as f64)),
            },
            Type::String | Type::Bytes => None,
        }
    }

    fn as_i128(&self) -> Option<i128> {
        Some(match *self {
            Self::I8(v) => v.into(),
            Self::I16(v) => v.into(),
            Self::I32(v) => v.into(),
            Self::I64(v) => v.into(),
            Self::U8(v) => v.into(),
            Self::U16(v) => v.into(),
            Self::U32(v) => v.into(),
            Self::U64(v) => v.into(),
            _ => return None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn into_record(self) -> Result<ValueRecord> {
        match self {
            Self::Record(record) => Ok(record),
            _ => Err(Error::type_conversion(self, "Record")),
        }
    }

    pub fn into_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(Error::type_conversion(self, "List")),
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<ValueRecord> for Value {
    fn from(value: ValueRecord) -> Self {
        Self::Record(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            other => match other.clone().coerce(Type::Bool) {
                Some(Value::Bool(v)) => Ok(v),
                _ => Err(Error::type_conversion(other, "bool")),
            },
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}
