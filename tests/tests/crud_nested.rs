use persister::EncodeError;
use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tests::models::{ComplexObject, NestedListObject, PersisterObject};

#[test]
fn embedded_object_round_trip() {
    let mut db = tests::setup();
    db.persist::<ComplexObject>().unwrap();

    let obj = ComplexObject {
        i1: 1,
        i3: 3,
        p1: PersisterObject::new(9, 3.0, 6, "hallo"),
    };
    db.insert(&obj).unwrap();

    assert_eq!(db.read::<ComplexObject>(1).unwrap(), obj);
}

#[test]
fn embedded_object_columns_are_prefixed() {
    let db = tests::setup();
    let table = db.table::<ComplexObject>().unwrap();

    let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["i1", "i3", "p1_i1", "p1_d2", "p1_i2", "p1_s1"]);
    assert_eq!(table.primary_key().name, "i1");
}

#[test]
fn embedded_list_round_trip() {
    let mut db = tests::setup();
    db.persist::<NestedListObject>().unwrap();

    let obj = NestedListObject {
        i1: 42,
        ps: vec![
            PersisterObject::new(1, 0.5, 2, "first"),
            PersisterObject::new(3, 1.5, 4, "second"),
        ],
    };
    db.insert(&obj).unwrap();

    assert_eq!(db.read::<NestedListObject>(42).unwrap(), obj);
}

#[test]
fn embedded_list_update() {
    let mut db = tests::setup();
    db.persist::<NestedListObject>().unwrap();

    let mut obj = NestedListObject {
        i1: 42,
        ps: vec![
            PersisterObject::new(1, 0.5, 2, "first"),
            PersisterObject::new(3, 1.5, 4, "second"),
        ],
    };
    db.insert(&obj).unwrap();

    obj.ps[1].s1 = "changed".to_string();
    db.update(&obj).unwrap();

    assert_eq!(db.read::<NestedListObject>(42).unwrap().ps[1].s1, "changed");
}

#[test]
fn embedded_list_columns_are_indexed() {
    let db = tests::setup();
    let table = db.table::<NestedListObject>().unwrap();

    assert_eq!(table.width(), 9);
    assert_eq!(table.columns[1].name, "ps_0_i1");
    assert_eq!(table.columns[8].name, "ps_1_s1");
}

#[derive(Debug, PartialEq, persister::Model)]
struct Wrapper {
    #[embed]
    inner: PersisterObject,

    note: String,
}

#[test]
fn nested_first_member_provides_the_identifier() {
    let mut db = tests::setup();
    db.persist::<Wrapper>().unwrap();

    let obj = Wrapper {
        inner: PersisterObject::new(5, 2.0, 1, "inner"),
        note: "outer".to_string(),
    };
    db.insert(&obj).unwrap();

    assert_eq!(db.table::<Wrapper>().unwrap().primary_key().name, "inner_i1");
    assert_eq!(db.read::<Wrapper>(5).unwrap(), obj);
}

#[derive(Debug, Clone, PartialEq, persister::Model)]
struct Leaf {
    a: i32,
    b: String,
}

#[derive(Debug, Clone, PartialEq, persister::Model)]
struct Mid {
    m: i64,

    #[embed(size = 2)]
    leaves: Vec<Leaf>,
}

#[derive(Debug, Clone, PartialEq, persister::Model)]
struct Top {
    id: i64,

    #[embed(size = 3)]
    mids: Vec<Mid>,

    #[embed]
    one: Mid,
}

fn mid(m: i64) -> Mid {
    let leaf = |a: i32| Leaf {
        a,
        b: format!("leaf {a}"),
    };

    Mid {
        m,
        leaves: vec![leaf(m as i32 * 10), leaf(m as i32 * 10 + 1)],
    }
}

#[test]
fn lists_nested_in_lists_round_trip() {
    let mut db = tests::setup();
    db.persist::<Top>().unwrap();

    let table = db.table::<Top>().unwrap();
    assert_eq!(table.width(), 21);
    assert_eq!(table.columns[7].name, "mids_1_leaves_0_a");
    assert_eq!(table.columns[20].name, "one_leaves_1_b");

    let mut top = Top {
        id: 1,
        mids: vec![mid(1), mid(2), mid(3)],
        one: mid(4),
    };
    db.insert(&top).unwrap();
    assert_eq!(db.read::<Top>(1).unwrap(), top);

    top.mids[2].leaves[1].b = "changed".to_string();
    db.update(&top).unwrap();
    assert_eq!(db.read::<Top>(1).unwrap(), top);
}

#[test]
fn inner_list_size_mismatch_names_the_element() {
    let mut db = tests::setup();
    db.persist::<Top>().unwrap();

    let mut top = Top {
        id: 1,
        mids: vec![mid(1), mid(2), mid(3)],
        one: mid(4),
    };
    top.mids[1].leaves.pop();

    let err = assert_err!(db.insert(&top));
    assert_eq!(err.encode_error(), Some(EncodeError::SizeMismatch));
    assert_eq!(
        err.to_string(),
        "encode failed: size mismatch: mids_1_leaves: expected 2 elements, found 1"
    );
    assert!(!db.exists::<Top>(1).unwrap());
}
