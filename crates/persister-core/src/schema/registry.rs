use super::{
    app, db, flatten::flatten, MemberDescriptor, MemberKind, PrimitiveMember, Result,
    TypeDescriptor,
};
use crate::{DescriptorError, Error};

use indexmap::{IndexMap, IndexSet};
use std::{
    any::TypeId,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Largest number of flattened columns a table may have. PostgreSQL caps tables at 1600
/// columns, the lowest limit among the supported dialects.
pub const MAX_COLUMNS: usize = 1600;

/// Builds and caches type descriptors.
///
/// Exactly one descriptor exists per Rust type for the lifetime of the registry. A build
/// runs under a single lock acquisition, so two threads resolving the same type cannot both
/// register a descriptor: the first one wins and every later lookup returns its `Arc`.
#[derive(Debug, Default)]
pub struct Registry {
    descriptors: Mutex<IndexMap<TypeId, Arc<TypeDescriptor>>>,
}

/// Used to track state during a build
struct Build<'a> {
    cache: &'a mut IndexMap<TypeId, Arc<TypeDescriptor>>,

    /// Types whose build is in progress, outermost first
    in_progress: Vec<(TypeId, String)>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Returns the cached descriptor for a type, if it was built already.
    pub fn get(&self, type_id: TypeId) -> Option<Arc<TypeDescriptor>> {
        self.lock().get(&type_id).cloned()
    }

    /// Resolves a declaration into a descriptor, building nested types on the way.
    ///
    /// Repeat calls for the same type return the cached descriptor without walking the
    /// declaration again.
    pub fn build(&self, model: app::Model) -> Result<Arc<TypeDescriptor>> {
        let mut cache = self.lock();

        Build {
            cache: &mut cache,
            in_progress: vec![],
        }
        .build(model)
    }

    /// Every cached descriptor, in build order. Nested types precede the types embedding
    /// them.
    pub fn descriptors(&self) -> Vec<Arc<TypeDescriptor>> {
        self.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<TypeId, Arc<TypeDescriptor>>> {
        // The map is only written after a descriptor is fully built, so a panic mid-build
        // leaves it consistent.
        self.descriptors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Build<'_> {
    fn build(&mut self, model: app::Model) -> Result<Arc<TypeDescriptor>> {
        if let Some(descriptor) = self.cache.get(&model.type_id) {
            return Ok(descriptor.clone());
        }

        if let Some(start) = self
            .in_progress
            .iter()
            .position(|(type_id, _)| *type_id == model.type_id)
        {
            let path = self.in_progress[start..]
                .iter()
                .map(|(_, name)| name.as_str())
                .chain([model.name.as_str()])
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::invalid_descriptor(DescriptorError::CyclicType, path));
        }

        if model.fields.is_empty() {
            return Err(Error::invalid_descriptor(
                DescriptorError::NoMembers,
                model.name,
            ));
        }

        self.in_progress.push((model.type_id, model.name.clone()));
        let members = model
            .fields
            .iter()
            .map(|field| self.build_member(&model, field))
            .collect::<Result<Vec<_>>>();
        self.in_progress.pop();
        let members = members?;

        verify_width(&model, &members)?;
        let columns = flatten(&members);
        verify_columns_are_unique(&model, &columns)?;

        let descriptor = Arc::new(TypeDescriptor {
            type_id: model.type_id,
            table: db::Table {
                name: model.table_name().to_string(),
                columns,
            },
            name: model.name,
            members,
        });

        log::debug!(
            "built descriptor {}; table={} columns={}",
            descriptor.name,
            descriptor.table.name,
            descriptor.width()
        );

        self.cache.insert(descriptor.type_id, descriptor.clone());
        Ok(descriptor)
    }

    fn build_member(&mut self, model: &app::Model, field: &app::Field) -> Result<MemberDescriptor> {
        let kind = match field.ty {
            app::FieldTy::Primitive(ty) => {
                verify_single(model, field)?;

                let Some(storage_ty) = db::Type::from_app(ty) else {
                    return Err(Error::invalid_descriptor(
                        DescriptorError::UnsupportedType,
                        format!(
                            "{}.{}: {ty} has no SQL storage type",
                            model.name, field.name
                        ),
                    ));
                };

                MemberKind::Primitive(PrimitiveMember { ty, storage_ty })
            }
            app::FieldTy::Embedded(target) => {
                verify_single(model, field)?;
                MemberKind::Nested(self.build(target())?)
            }
            app::FieldTy::EmbeddedList(target) => {
                if field.size < 1 {
                    return Err(Error::invalid_descriptor(
                        DescriptorError::InvalidSize,
                        format!(
                            "{}.{}: list size must be at least 1, found {}",
                            model.name, field.name, field.size
                        ),
                    ));
                }

                MemberKind::NestedList {
                    target: self.build(target())?,
                    size: field.size,
                }
            }
        };

        Ok(MemberDescriptor {
            name: field.name.clone(),
            kind,
        })
    }
}

fn verify_single(model: &app::Model, field: &app::Field) -> Result<()> {
    if field.size != 1 {
        return Err(Error::invalid_descriptor(
            DescriptorError::InvalidSize,
            format!(
                "{}.{}: single-valued member must have size 1, found {}",
                model.name, field.name, field.size
            ),
        ));
    }

    Ok(())
}

/// Sums member widths with checked arithmetic, so that list sizes which would overflow or
/// exceed [`MAX_COLUMNS`] fail before any column is flattened.
fn verify_width(model: &app::Model, members: &[MemberDescriptor]) -> Result<()> {
    let mut width = 0usize;

    for member in members {
        let member_width = match &member.kind {
            MemberKind::Primitive(_) => Some(1),
            MemberKind::Nested(target) => Some(target.width()),
            MemberKind::NestedList { target, size } => target.width().checked_mul(*size),
        };

        match member_width.and_then(|member_width| width.checked_add(member_width)) {
            Some(total) if total <= MAX_COLUMNS => width = total,
            _ => {
                return Err(Error::invalid_descriptor(
                    DescriptorError::InvalidSize,
                    format!(
                        "{}.{}: flattens to more than {MAX_COLUMNS} columns",
                        model.name, member.name
                    ),
                ))
            }
        }
    }

    Ok(())
}

fn verify_columns_are_unique(model: &app::Model, columns: &[db::FlatColumn]) -> Result<()> {
    let mut seen = IndexSet::with_capacity(columns.len());

    for column in columns {
        if !seen.insert(column.name.as_str()) {
            return Err(Error::invalid_descriptor(
                DescriptorError::DuplicateColumn,
                format!("{}: column `{}` appears twice", model.name, column.name),
            ));
        }
    }

    Ok(())
}
