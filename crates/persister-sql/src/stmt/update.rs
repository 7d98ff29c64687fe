use super::*;

use persister_core::schema::db::Table;

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// `SET` clause. Never empty.
    pub assignments: Vec<Assignment>,

    pub filter: Filter,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Statement {
    /// Rewrites every non-identifier column of the row identified by `row[0]`.
    ///
    /// Returns `None` when the table has no column besides its identifier, as there is
    /// nothing to set.
    pub fn update_by_key(table: &Table, row: Row) -> Option<Self> {
        debug_assert_eq!(row.len(), table.width());

        let mut values = row.into_iter();
        let key = values.next()?;

        let assignments: Vec<_> = table
            .value_columns()
            .iter()
            .zip(values)
            .map(|(column, value)| Assignment {
                column: column.name.clone(),
                value,
            })
            .collect();

        if assignments.is_empty() {
            return None;
        }

        Some(
            Update {
                table: table.name.clone(),
                assignments,
                filter: Filter::eq(&table.primary_key().name, key),
            }
            .into(),
        )
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
