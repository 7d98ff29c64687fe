use crate::Result;
use persister_core::{
    schema::app,
    stmt::{Value, ValueRecord},
};

/// A type that can be persisted.
///
/// Usually implemented with `#[derive(Model)]`. The three functions must agree on member
/// order: `schema` declares the members, `to_record` produces one value per member and
/// `load` consumes them in the same order.
pub trait Model: Sized + 'static {
    /// The type's declaration: name, table and ordered members.
    fn schema() -> app::Model;

    /// Construct an instance from a decoded record, one value per member.
    fn load(record: ValueRecord) -> Result<Self>;

    /// The instance's values, one per member, in declaration order.
    fn to_record(&self) -> ValueRecord;
}

/// A collection usable as a fixed-size embedded list (`#[embed(size = N)]`).
pub trait EmbedList: Sized {
    /// The embedded model
    type Item: Model;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

impl<T: Model> EmbedList for Vec<T> {
    type Item = T;

    fn load(value: Value) -> Result<Self> {
        value
            .into_list()?
            .into_iter()
            .map(|item| T::load(item.into_record()?))
            .collect()
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(|item| item.to_record().into()).collect())
    }
}

