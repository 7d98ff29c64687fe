mod builder;
pub use builder::Builder;

mod listener;
pub use listener::ChangeListener;

use crate::{Model, Result};

use persister_core::{
    err,
    schema::{db, mapping, Registry, TypeDescriptor},
    stmt::{Row, Value},
    Error, StatementExecutor,
};
use persister_sql::{Serializer, Statement};

use std::{any::TypeId, sync::Arc};

/// Persists [`Model`] types through a statement executor.
///
/// Each operation resolves the type's descriptor (building it on first use), generates
/// the statement and hands the SQL text to the executor. Nothing is cached besides
/// descriptors; every call is a single round trip.
pub struct Persister {
    registry: Arc<Registry>,
    executor: Box<dyn StatementExecutor + Send>,
    serializer: Serializer,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Persister {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A persister with default settings.
    pub fn new(executor: impl StatementExecutor + Send + 'static) -> Persister {
        Persister {
            registry: Arc::new(Registry::new()),
            serializer: Serializer::new(executor.capability()),
            executor: Box::new(executor),
            listeners: vec![],
        }
    }

    /// Create the table for `T`.
    pub fn persist<T: Model>(&mut self) -> Result<()> {
        let descriptor = self.descriptor::<T>()?;
        self.execute(&Statement::create_table(descriptor.table()))?;
        self.notify(descriptor.table());
        Ok(())
    }

    /// Insert one instance.
    pub fn insert<T: Model>(&mut self, instance: &T) -> Result<()> {
        self.insert_many(std::slice::from_ref(instance))
    }

    /// Insert every instance with a single statement. Does nothing for an empty slice.
    pub fn insert_many<T: Model>(&mut self, instances: &[T]) -> Result<()> {
        if instances.is_empty() {
            return Ok(());
        }

        let descriptor = self.descriptor::<T>()?;
        let rows = instances
            .iter()
            .map(|instance| mapping::encode(&descriptor, instance.to_record()))
            .collect::<Result<Vec<_>>>()?;

        self.execute(&Statement::insert(descriptor.table(), rows))?;
        self.notify(descriptor.table());
        Ok(())
    }

    /// Load the instance with identifier `id`.
    ///
    /// Fails with a record-not-found error when no row matches and with an
    /// ambiguous-result error when more than one does.
    pub fn read<T: Model>(&mut self, id: impl Into<Value>) -> Result<T> {
        let descriptor = self.descriptor::<T>()?;
        let key = key_for(&descriptor, id.into())?;

        let mut rows = self.query(&Statement::select_by_key(descriptor.table(), key.clone()))?;

        match rows.len() {
            0 => Err(Error::record_not_found(format!(
                "table={} key={key:?}",
                descriptor.table().name
            ))),
            1 => load(&descriptor, rows.remove(0)),
            n => Err(Error::ambiguous_result(format!(
                "table={} key={key:?} rows={n}",
                descriptor.table().name
            ))),
        }
    }

    /// Load every stored instance, in the order the database returns them.
    pub fn read_all<T: Model>(&mut self) -> Result<Vec<T>> {
        let descriptor = self.descriptor::<T>()?;

        self.query(&Statement::select_all(descriptor.table()))?
            .into_iter()
            .map(|row| load(&descriptor, row))
            .collect()
    }

    /// Returns `true` if an instance with identifier `id` is stored.
    pub fn exists<T: Model>(&mut self, id: impl Into<Value>) -> Result<bool> {
        let descriptor = self.descriptor::<T>()?;
        let key = key_for(&descriptor, id.into())?;

        let rows = self.query(&Statement::count_by_key(descriptor.table(), key))?;
        let count = rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or_default();

        Ok(i64::try_from(count)? > 0)
    }

    /// Overwrite the stored instance sharing `instance`'s identifier.
    ///
    /// Types without columns besides the identifier have nothing to update.
    pub fn update<T: Model>(&mut self, instance: &T) -> Result<()> {
        let descriptor = self.descriptor::<T>()?;
        let row = mapping::encode(&descriptor, instance.to_record())?;

        if let Some(stmt) = Statement::update_by_key(descriptor.table(), row) {
            self.execute(&stmt)?;
            self.notify(descriptor.table());
        }

        Ok(())
    }

    /// Delete the instance with identifier `id`, if stored.
    pub fn delete<T: Model>(&mut self, id: impl Into<Value>) -> Result<()> {
        let descriptor = self.descriptor::<T>()?;
        let key = key_for(&descriptor, id.into())?;

        self.execute(&Statement::delete_by_key(descriptor.table(), key))?;
        self.notify(descriptor.table());
        Ok(())
    }

    /// Delete every stored instance of `T`.
    pub fn clear<T: Model>(&mut self) -> Result<()> {
        let descriptor = self.descriptor::<T>()?;

        self.execute(&Statement::delete_all(descriptor.table()))?;
        self.notify(descriptor.table());
        Ok(())
    }

    /// The `CREATE TABLE` statement [`persist`](Self::persist) would execute.
    pub fn create_table_statement<T: Model>(&self) -> Result<String> {
        let descriptor = self.descriptor::<T>()?;
        Ok(self
            .serializer
            .serialize(&Statement::create_table(descriptor.table())))
    }

    /// The `INSERT` statement [`insert`](Self::insert) would execute.
    pub fn insert_statement<T: Model>(&self, instance: &T) -> Result<String> {
        let descriptor = self.descriptor::<T>()?;
        let row = mapping::encode(&descriptor, instance.to_record())?;
        Ok(self
            .serializer
            .serialize(&Statement::insert(descriptor.table(), vec![row])))
    }

    /// The descriptor of `T`, built on first use.
    pub fn descriptor<T: Model>(&self) -> Result<Arc<TypeDescriptor>> {
        match self.registry.get(TypeId::of::<T>()) {
            Some(descriptor) => Ok(descriptor),
            None => self.registry.build(T::schema()),
        }
    }

    /// The flattened table of `T`.
    pub fn table<T: Model>(&self) -> Result<db::Table> {
        Ok(self.descriptor::<T>()?.table().clone())
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    fn execute(&mut self, stmt: &Statement) -> Result<()> {
        let sql = self.serializer.serialize(stmt);
        log::debug!("execute; table={} sql={sql}", stmt.table_name());

        self.executor
            .execute(&sql)
            .map_err(|err| err.context(err!("query: {sql}")))
    }

    fn query(&mut self, stmt: &Statement) -> Result<Vec<Row>> {
        debug_assert!(stmt.is_query());

        let sql = self.serializer.serialize(stmt);
        log::debug!("query; table={} sql={sql}", stmt.table_name());

        self.executor
            .query(&sql)
            .map_err(|err| err.context(err!("query: {sql}")))
    }

    fn notify(&self, table: &db::Table) {
        for listener in &self.listeners {
            listener.on_change(&table.name);
        }
    }
}

/// Converts a lookup identifier to the identifier column's type.
fn key_for(descriptor: &TypeDescriptor, id: Value) -> Result<Value> {
    let ty = descriptor.primary_key().ty;

    match id.clone().coerce(ty) {
        Some(key) => Ok(key),
        None => Err(Error::type_conversion(id, ty.rust_name())),
    }
}

fn load<T: Model>(descriptor: &TypeDescriptor, row: Row) -> Result<T> {
    T::load(mapping::decode(descriptor, row)?)
}

impl std::fmt::Debug for Persister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persister")
            .field("registry", &self.registry)
            .field("serializer", &self.serializer)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
