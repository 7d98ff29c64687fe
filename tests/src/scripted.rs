use crate::ExecLog;

use persister::driver::Capability;
use persister_core::{err, stmt::Row, Result, StatementExecutor};

use std::collections::VecDeque;

/// An executor that records every statement and answers queries with canned rows.
///
/// Each query pops the next queued response; a query with nothing queued fails.
#[derive(Debug)]
pub struct Scripted {
    capability: &'static Capability,
    log: ExecLog,
    responses: VecDeque<Vec<Row>>,
}

impl Scripted {
    pub fn new() -> Scripted {
        Scripted::with_capability(&Capability::SQLITE)
    }

    pub fn with_capability(capability: &'static Capability) -> Scripted {
        Scripted {
            capability,
            log: ExecLog::default(),
            responses: VecDeque::new(),
        }
    }

    /// Handle to the statement log, usable after the executor moved into a persister.
    pub fn log(&self) -> ExecLog {
        self.log.clone()
    }

    /// Queue the rows the next query returns.
    pub fn respond(mut self, rows: Vec<Row>) -> Scripted {
        self.responses.push_back(rows);
        self
    }
}

impl Default for Scripted {
    fn default() -> Self {
        Scripted::new()
    }
}

impl StatementExecutor for Scripted {
    fn capability(&self) -> &'static Capability {
        self.capability
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        log::trace!("scripted execute; sql={sql}");
        self.log.push(sql);
        Ok(())
    }

    fn query(&mut self, sql: &str) -> Result<Vec<Row>> {
        log::trace!("scripted query; sql={sql}; queued={}", self.responses.len());
        self.log.push(sql);
        self.responses
            .pop_front()
            .ok_or_else(|| err!("no response queued"))
    }
}
