/// Notified after every successful write.
///
/// Writes are `persist`, `insert`, `insert_many`, `update`, `delete` and `clear`. The
/// listener receives the name of the table that changed.
pub trait ChangeListener: Send {
    fn on_change(&self, table: &str);
}

impl<F> ChangeListener for F
where
    F: Fn(&str) + Send,
{
    fn on_change(&self, table: &str) {
        self(table)
    }
}
