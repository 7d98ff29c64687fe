use std::sync::{Arc, Mutex};

/// The SQL text a [`Scripted`](crate::Scripted) executor received, oldest first.
#[derive(Clone, Default)]
pub struct ExecLog {
    statements: Arc<Mutex<Vec<String>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, sql: &str) {
        self.statements.lock().unwrap().push(sql.to_string());
    }

    pub fn len(&self) -> usize {
        self.statements.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.statements.lock().unwrap().clear();
    }

    /// Remove and return the oldest statement.
    #[track_caller]
    pub fn pop(&self) -> String {
        let mut statements = self.statements.lock().unwrap();
        assert!(!statements.is_empty(), "no statements in log");
        statements.remove(0)
    }
}

impl std::fmt::Debug for ExecLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let statements = self.statements.lock().unwrap();
        f.debug_list().entries(statements.iter()).finish()
    }
}
