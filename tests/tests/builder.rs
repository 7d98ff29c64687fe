use persister::{DescriptorError, Persister, Registry, Sqlite};
use std::sync::{Arc, Mutex};
use std_util::prelude::*;
use tests::models::{ComplexObject, NestedListObject, PersisterObject};

#[derive(Debug, persister::Model)]
struct Empty {}

#[derive(Debug, persister::Model)]
struct Big {
    id: i32,
    count: u64,
}

#[derive(Debug, persister::Model)]
struct Node {
    id: i32,

    #[embed(size = 1)]
    children: Vec<Node>,
}

#[derive(Debug, persister::Model)]
struct NoElements {
    id: i32,

    #[embed(size = 0)]
    ps: Vec<PersisterObject>,
}

fn build_with<T: persister::Model>() -> persister::Error {
    let mut builder = Persister::builder();
    builder.register::<T>();
    assert_err!(builder.build(Sqlite::in_memory().unwrap()))
}

#[test]
fn register_resolves_descriptors_eagerly() {
    let mut builder = Persister::builder();
    builder
        .register::<PersisterObject>()
        .register::<ComplexObject>();

    let db = tests::setup_with(&mut builder);

    // Embedded types are resolved along with their container
    assert_eq!(db.registry().len(), 2);
}

#[test]
fn type_without_members() {
    let err = build_with::<Empty>();
    assert_eq!(err.descriptor_error(), Some(DescriptorError::NoMembers));
}

#[test]
fn member_without_storage_type() {
    let err = build_with::<Big>();
    assert_eq!(err.descriptor_error(), Some(DescriptorError::UnsupportedType));
    assert!(err.to_string().contains("Big.count: u64"));
}

#[test]
fn self_containing_type() {
    let err = build_with::<Node>();
    assert_eq!(err.descriptor_error(), Some(DescriptorError::CyclicType));
    assert!(err.to_string().ends_with("Node -> Node"));
}

#[test]
fn list_without_elements() {
    let err = build_with::<NoElements>();
    assert_eq!(err.descriptor_error(), Some(DescriptorError::InvalidSize));
}

#[test]
fn malformed_types_fail_on_first_use_without_registration() {
    let mut db = tests::setup();

    let err = assert_err!(db.persist::<Node>());
    assert_eq!(err.descriptor_error(), Some(DescriptorError::CyclicType));

    // A failed build leaves the registry usable
    assert_ok!(db.persist::<PersisterObject>());
}

#[test]
fn registry_is_shared_between_persisters() {
    let registry = Arc::new(Registry::new());

    let mut first = tests::setup_with(Persister::builder().registry(registry.clone()));
    let second = tests::setup_with(Persister::builder().registry(registry.clone()));

    first.persist::<NestedListObject>().unwrap();

    // Built once, visible through both
    assert_eq!(registry.len(), 2);
    assert!(Arc::ptr_eq(
        &first.descriptor::<NestedListObject>().unwrap(),
        &second.descriptor::<NestedListObject>().unwrap(),
    ));
}

#[test]
fn listeners_hear_every_write() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));

    let mut builder = Persister::builder();
    builder.listener({
        let seen = seen.clone();
        move |table: &str| seen.lock().unwrap().push(table.to_string())
    });

    let mut db = tests::setup_with(&mut builder);
    let obj = PersisterObject::new(1, 1.0, 1, "a");

    db.persist::<PersisterObject>().unwrap();
    db.insert(&obj).unwrap();
    db.update(&obj).unwrap();
    db.read::<PersisterObject>(1).unwrap();
    db.delete::<PersisterObject>(1).unwrap();
    db.clear::<PersisterObject>().unwrap();

    // Reads are not changes
    assert_eq!(seen.lock().unwrap().len(), 5);
    assert!(seen.lock().unwrap().iter().all(|t| t == "PersisterObject"));
}

#[test]
fn listeners_are_not_told_about_failures() {
    let seen = Arc::new(Mutex::new(0));

    let mut builder = Persister::builder();
    builder.listener({
        let seen = seen.clone();
        move |_: &str| *seen.lock().unwrap() += 1
    });

    let mut db = tests::setup_with(&mut builder);

    // No table yet
    assert_err!(db.insert(&PersisterObject::new(1, 1.0, 1, "a")));
    assert_eq!(*seen.lock().unwrap(), 0);
}
