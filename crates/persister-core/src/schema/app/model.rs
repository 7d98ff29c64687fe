use super::Field;

use std::any::TypeId;

/// The declaration of a persisted type: its identity, name and ordered members.
///
/// Member order is significant. It fixes the column order of the flattened table and the
/// argument order the type's constructor receives.
#[derive(Debug, Clone)]
pub struct Model {
    /// Identifies the Rust type the declaration belongs to
    pub type_id: TypeId,

    /// Name of the type
    pub name: String,

    /// If the declaration specifies a table to map the type to, this is set.
    pub table_name: Option<String>,

    /// Persisted members, in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new<T: 'static>(name: impl Into<String>, fields: Vec<Field>) -> Model {
        Model {
            type_id: TypeId::of::<T>(),
            name: name.into(),
            table_name: None,
            fields,
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Model {
        self.table_name = Some(table_name.into());
        self
    }

    /// The table name: the declared one, otherwise the type's name.
    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or(&self.name)
    }
}
