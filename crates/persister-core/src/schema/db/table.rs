use super::FlatColumn;

/// The table a persisted type is stored in.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The flattened columns, in member declaration order. Never empty.
    pub columns: Vec<FlatColumn>,
}

impl Table {
    /// The identifier column. Always the first flattened column.
    pub fn primary_key(&self) -> &FlatColumn {
        &self.columns[0]
    }

    /// Every column except the identifier.
    pub fn value_columns(&self) -> &[FlatColumn] {
        &self.columns[1..]
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
