use super::{Flavor, ToSql};

use crate::stmt;

use std::fmt::Write;

impl ToSql for &stmt::Value {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        use stmt::Value::*;

        // Writing to a `String` never fails
        let _ = match self {
            Bool(true) => write!(f.dst, "1"),
            Bool(false) => write!(f.dst, "0"),
            I8(v) => write!(f.dst, "{v}"),
            I16(v) => write!(f.dst, "{v}"),
            I32(v) => write!(f.dst, "{v}"),
            I64(v) => write!(f.dst, "{v}"),
            U8(v) => write!(f.dst, "{v}"),
            U16(v) => write!(f.dst, "{v}"),
            U32(v) => write!(f.dst, "{v}"),
            U64(v) => write!(f.dst, "{v}"),
            // `Debug` always keeps a decimal point or exponent, so the literal stays REAL
            F32(v) => write!(f.dst, "{v:?}"),
            F64(v) => write!(f.dst, "{v:?}"),
            String(v) => {
                string_literal(v, f);
                Ok(())
            }
            Bytes(v) => {
                bytes_literal(v, f);
                Ok(())
            }
            Null => write!(f.dst, "NULL"),
            Record(_) | List(_) => {
                panic!("nested values have no SQL literal; flatten the row first; value={self:?}")
            }
        };
    }
}

fn string_literal(s: &str, f: &mut super::Formatter<'_>) {
    let mysql = f.serializer.is_mysql();

    f.dst.push('\'');
    for c in s.chars() {
        match c {
            '\'' => f.dst.push_str("''"),
            '\\' if mysql => f.dst.push_str("\\\\"),
            c => f.dst.push(c),
        }
    }
    f.dst.push('\'');
}

fn bytes_literal(bytes: &[u8], f: &mut super::Formatter<'_>) {
    let mut hex = std::string::String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(hex, "{byte:02x}");
    }

    match f.serializer.flavor {
        Flavor::Postgresql => {
            let _ = write!(f.dst, "'\\x{hex}'::bytea");
        }
        Flavor::Sqlite | Flavor::Mysql => {
            let _ = write!(f.dst, "X'{hex}'");
        }
    }
}
