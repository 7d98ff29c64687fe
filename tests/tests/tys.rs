use persister::Persister;
use persister_core::stmt::{Row, Value};
use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tests::Scripted;

#[derive(Debug, Clone, PartialEq, persister::Model)]
struct Everything {
    id: i64,
    flag: bool,
    tiny: i8,
    small: i16,
    byte: u8,
    word: u16,
    wide: u32,
    ratio: f32,
    payload: Vec<u8>,
    text: String,
}

#[test]
fn every_primitive_round_trips() {
    let mut db = tests::setup();
    db.persist::<Everything>().unwrap();

    let obj = Everything {
        id: i64::MAX,
        flag: true,
        tiny: i8::MIN,
        small: -300,
        byte: u8::MAX,
        word: u16::MAX,
        wide: u32::MAX,
        ratio: 1.5,
        payload: vec![0xde, 0xad, 0x00, 0x01],
        text: "it's \"quoted\"".to_string(),
    };
    db.insert(&obj).unwrap();

    assert_eq!(db.read::<Everything>(i64::MAX).unwrap(), obj);
}

#[test]
fn false_and_empty_values() {
    let mut db = tests::setup();
    db.persist::<Everything>().unwrap();

    let obj = Everything {
        id: -1,
        flag: false,
        tiny: 0,
        small: 0,
        byte: 0,
        word: 0,
        wide: 0,
        ratio: -0.25,
        payload: vec![],
        text: String::new(),
    };
    db.insert(&obj).unwrap();

    assert_eq!(db.read::<Everything>(-1).unwrap(), obj);
}

#[derive(Debug, PartialEq, persister::Model)]
#[table = "tags"]
struct Tag {
    name: String,
    uses: i32,
}

#[test]
fn text_identifier_and_table_override() {
    let mut db = tests::setup();
    db.persist::<Tag>().unwrap();

    assert_eq!(db.table::<Tag>().unwrap().name, "tags");

    let tag = Tag {
        name: "rust".to_string(),
        uses: 3,
    };
    db.insert(&tag).unwrap();

    assert_eq!(db.read::<Tag>("rust").unwrap(), tag);
    assert!(!db.exists::<Tag>("go").unwrap());
}

#[derive(Debug, PartialEq, persister::Model)]
struct Marker {
    id: i32,
}

#[test]
fn key_only_type() {
    let mut db = tests::setup();
    db.persist::<Marker>().unwrap();
    db.insert(&Marker { id: 7 }).unwrap();

    // Nothing besides the identifier to overwrite
    db.update(&Marker { id: 7 }).unwrap();

    assert_eq!(db.read::<Marker>(7).unwrap(), Marker { id: 7 });
}

#[derive(Debug, PartialEq, persister::Model)]
struct Keyword {
    r#type: i32,
    r#match: String,
}

#[test]
fn raw_identifiers_name_columns_without_prefix() {
    let mut db = tests::setup();
    db.persist::<Keyword>().unwrap();

    let names: Vec<_> = db
        .table::<Keyword>()
        .unwrap()
        .columns
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(names, ["type", "match"]);

    let obj = Keyword {
        r#type: 1,
        r#match: "yes".to_string(),
    };
    db.insert(&obj).unwrap();
    assert_eq!(db.read::<Keyword>(1).unwrap(), obj);
}

#[derive(Debug, Clone, Copy, PartialEq, persister::Primitive)]
enum Color {
    Red,
    Green,
    r#Blue,
}

#[derive(Debug, PartialEq, persister::Model)]
struct Paint {
    id: i32,
    color: Color,
    accent: Color,
}

#[test]
fn enum_members_round_trip() {
    let mut db = tests::setup();
    db.persist::<Paint>().unwrap();

    let paint = Paint {
        id: 1,
        color: Color::Green,
        accent: Color::r#Blue,
    };
    db.insert(&paint).unwrap();
    assert_eq!(db.read::<Paint>(1).unwrap(), paint);

    let paint = Paint {
        id: 1,
        color: Color::Red,
        accent: Color::Red,
    };
    db.update(&paint).unwrap();
    assert_eq!(db.read::<Paint>(1).unwrap(), paint);
}

#[test]
fn enum_members_are_stored_by_variant_name() {
    let scripted = Scripted::new();
    let log = scripted.log();
    let mut db = Persister::new(scripted);

    db.persist::<Paint>().unwrap();
    db.insert(&Paint {
        id: 1,
        color: Color::Green,
        accent: Color::r#Blue,
    })
    .unwrap();

    assert_eq!(
        log.pop(),
        r#"CREATE TABLE "Paint" ("id" INTEGER PRIMARY KEY, "color" TEXT, "accent" TEXT);"#
    );
    assert_eq!(
        log.pop(),
        r#"INSERT INTO "Paint" ("id", "color", "accent") VALUES (1, 'Green', 'Blue');"#
    );
}

#[test]
fn unknown_variant_name_is_a_type_conversion() {
    let row = Row::from_vec(vec![Value::I64(1), Value::from("Green"), Value::from("Purple")]);
    let mut db = Persister::new(Scripted::new().respond(vec![row]));

    let err = assert_err!(db.read::<Paint>(1));
    assert!(err.is_type_conversion());
    assert!(err.to_string().contains("cannot convert String to Color"));
}
