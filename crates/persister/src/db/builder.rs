use super::{ChangeListener, Persister};
use crate::{Model, Result};

use persister_core::{schema::app, Registry, StatementExecutor};
use persister_sql::Serializer;

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Declarations to resolve eagerly at `build` time
    models: Vec<app::Model>,

    /// Shared descriptor registry. A fresh one is created when unset.
    registry: Option<Arc<Registry>>,

    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Builder {
    /// Resolve `T`'s descriptor when the persister is built, so malformed declarations
    /// surface there instead of on first use.
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(T::schema());
        self
    }

    /// Share a descriptor registry between persisters.
    pub fn registry(&mut self, registry: Arc<Registry>) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn listener(&mut self, listener: impl ChangeListener + 'static) -> &mut Self {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn build(&mut self, executor: impl StatementExecutor + Send + 'static) -> Result<Persister> {
        let registry = self.registry.take().unwrap_or_default();

        for model in self.models.drain(..) {
            let descriptor = registry.build(model)?;
            log::debug!("registered {}", descriptor.name());
        }

        Ok(Persister {
            registry,
            serializer: Serializer::new(executor.capability()),
            executor: Box::new(executor),
            listeners: std::mem::take(&mut self.listeners),
        })
    }
}
