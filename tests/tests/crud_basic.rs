use pretty_assertions::assert_eq;
use tests::models::PersisterObject;

#[test]
fn insert_then_read() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();

    let obj = PersisterObject::new(9, 3.0, 6, "hallo");
    db.insert(&obj).unwrap();

    let read: PersisterObject = db.read(9).unwrap();
    assert_eq!(read, obj);
}

#[test]
fn read_all_returns_every_row() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();

    let objs = vec![
        PersisterObject::new(1, 0.5, 10, "one"),
        PersisterObject::new(2, -2.25, 20, "two"),
        PersisterObject::new(3, 1e21, 30, "it's three"),
    ];
    db.insert_many(&objs).unwrap();

    let mut all: Vec<PersisterObject> = db.read_all().unwrap();
    all.sort_by_key(|obj| obj.i1);
    assert_eq!(all, objs);
}

#[test]
fn read_all_on_empty_table() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();

    let all: Vec<PersisterObject> = db.read_all().unwrap();
    assert!(all.is_empty());
}

#[test]
fn insert_many_with_nothing_is_a_no_op() {
    let mut db = tests::setup();

    // The table does not exist; nothing may reach the database
    db.insert_many::<PersisterObject>(&[]).unwrap();
}

#[test]
fn exists() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();
    db.insert(&PersisterObject::new(4, 1.0, 2, "x")).unwrap();

    assert!(db.exists::<PersisterObject>(4).unwrap());
    assert!(!db.exists::<PersisterObject>(5).unwrap());
}

#[test]
fn update_overwrites_every_value_column() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();
    db.insert(&PersisterObject::new(9, 3.0, 6, "hallo")).unwrap();

    let changed = PersisterObject::new(9, 4.5, 7, "moin");
    db.update(&changed).unwrap();

    assert_eq!(db.read::<PersisterObject>(9).unwrap(), changed);
}

#[test]
fn update_of_missing_row_changes_nothing() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();

    db.update(&PersisterObject::new(9, 3.0, 6, "hallo")).unwrap();
    assert!(!db.exists::<PersisterObject>(9).unwrap());
}

#[test]
fn delete_removes_one_row() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();
    db.insert_many(&[
        PersisterObject::new(1, 1.0, 1, "a"),
        PersisterObject::new(2, 2.0, 2, "b"),
    ])
    .unwrap();

    db.delete::<PersisterObject>(1).unwrap();

    assert!(!db.exists::<PersisterObject>(1).unwrap());
    assert!(db.exists::<PersisterObject>(2).unwrap());

    // Deleting again is not an error
    db.delete::<PersisterObject>(1).unwrap();
}

#[test]
fn clear_removes_every_row() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();
    db.insert_many(&[
        PersisterObject::new(1, 1.0, 1, "a"),
        PersisterObject::new(2, 2.0, 2, "b"),
    ])
    .unwrap();

    db.clear::<PersisterObject>().unwrap();

    let all: Vec<PersisterObject> = db.read_all().unwrap();
    assert!(all.is_empty());
}

#[test]
fn lookup_identifier_is_converted_to_the_key_type() {
    let mut db = tests::setup();
    db.persist::<PersisterObject>().unwrap();
    db.insert(&PersisterObject::new(9, 3.0, 6, "hallo")).unwrap();

    // The key column is `i32`; other integer widths are accepted when in range
    assert_eq!(db.read::<PersisterObject>(9i64).unwrap().i1, 9);
    assert_eq!(db.read::<PersisterObject>(9u8).unwrap().i1, 9);
}
