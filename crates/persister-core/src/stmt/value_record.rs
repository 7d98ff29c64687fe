use super::Value;
use crate::Result;

use std::ops;

/// One value per declared member of a type, in declaration order.
///
/// Nested objects are `Value::Record`, fixed-size lists are `Value::List` of records.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    pub fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    /// Takes the value at `index`, leaving `Null` in its place.
    ///
    /// An out-of-range index yields `Null`, which the caller's conversion then rejects.
    pub fn take(&mut self, index: usize) -> Value {
        self.fields
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Fails unless the record holds exactly `len` values.
    pub fn expect_len(&self, len: usize, type_name: &str) -> Result<()> {
        if self.fields.len() == len {
            Ok(())
        } else {
            Err(crate::err!(
                "{type_name}: expected {len} values, found {}",
                self.fields.len()
            ))
        }
    }
}

impl ops::Deref for ValueRecord {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.fields[..]
    }
}

impl ops::DerefMut for ValueRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields[..]
    }
}

impl<'a> IntoIterator for &'a ValueRecord {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<Vec<Value>> for ValueRecord {
    fn from(fields: Vec<Value>) -> Self {
        Self { fields }
    }
}
