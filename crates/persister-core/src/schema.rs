//! Type declarations, resolved descriptors and their flat table layout.

pub mod app;

pub mod db;

mod descriptor;
pub use descriptor::{MemberDescriptor, MemberKind, PrimitiveMember, TypeDescriptor};

mod flatten;

pub mod mapping;

mod registry;
pub use registry::{Registry, MAX_COLUMNS};

use crate::Result;
