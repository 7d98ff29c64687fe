use persister::{driver::Capability, Persister};
use persister_core::stmt::{Row, Value};
use pretty_assertions::assert_eq;
use tests::{
    models::{ComplexObject, PersisterObject},
    Scripted,
};

#[test]
fn create_table_statement() {
    let db = tests::setup();

    assert_eq!(
        db.create_table_statement::<ComplexObject>().unwrap(),
        r#"CREATE TABLE "ComplexObject" ("i1" INTEGER PRIMARY KEY, "i3" INTEGER, "p1_i1" INTEGER, "p1_d2" REAL, "p1_i2" INTEGER, "p1_s1" TEXT);"#
    );
}

#[test]
fn insert_statement() {
    let db = tests::setup();

    assert_eq!(
        db.insert_statement(&PersisterObject::new(9, 3.0, 6, "hallo"))
            .unwrap(),
        r#"INSERT INTO "PersisterObject" ("i1", "d2", "i2", "s1") VALUES (9, 3.0, 6, 'hallo');"#
    );
}

#[test]
fn statements_follow_the_executor_dialect() {
    let db = Persister::new(Scripted::with_capability(&Capability::MYSQL));

    assert_eq!(
        db.create_table_statement::<PersisterObject>().unwrap(),
        "CREATE TABLE `PersisterObject` (`i1` BIGINT PRIMARY KEY, `d2` DOUBLE, `i2` BIGINT, `s1` TEXT);"
    );
}

#[test]
fn each_operation_is_one_statement() {
    // Answers for `exists`, `read_all` and `read`, in that order
    let scripted = Scripted::new()
        .respond(vec![Row::from_vec(vec![Value::I64(0)])])
        .respond(vec![])
        .respond(vec![]);
    let log = scripted.log();
    let mut db = Persister::new(scripted);

    let obj = PersisterObject::new(9, 3.0, 6, "hallo");

    db.persist::<PersisterObject>().unwrap();
    db.insert_many(&[obj.clone(), PersisterObject::new(10, 0.5, 1, "b")])
        .unwrap();
    db.update(&obj).unwrap();
    db.exists::<PersisterObject>(9).unwrap();
    db.read_all::<PersisterObject>().unwrap();
    assert!(db.read::<PersisterObject>(9).unwrap_err().is_record_not_found());
    db.delete::<PersisterObject>(9).unwrap();
    db.clear::<PersisterObject>().unwrap();

    assert_eq!(log.len(), 8);
    assert_eq!(
        log.pop(),
        r#"CREATE TABLE "PersisterObject" ("i1" INTEGER PRIMARY KEY, "d2" REAL, "i2" INTEGER, "s1" TEXT);"#
    );
    assert_eq!(
        log.pop(),
        r#"INSERT INTO "PersisterObject" ("i1", "d2", "i2", "s1") VALUES (9, 3.0, 6, 'hallo'), (10, 0.5, 1, 'b');"#
    );
    assert_eq!(
        log.pop(),
        r#"UPDATE "PersisterObject" SET "d2" = 3.0, "i2" = 6, "s1" = 'hallo' WHERE "i1" = 9;"#
    );
    assert_eq!(
        log.pop(),
        r#"SELECT COUNT(*) FROM "PersisterObject" WHERE "i1" = 9;"#
    );
    assert_eq!(log.pop(), r#"SELECT * FROM "PersisterObject";"#);
    assert_eq!(
        log.pop(),
        r#"SELECT * FROM "PersisterObject" WHERE "i1" = 9;"#
    );
    assert_eq!(log.pop(), r#"DELETE FROM "PersisterObject" WHERE "i1" = 9;"#);
    assert_eq!(log.pop(), r#"DELETE FROM "PersisterObject";"#);
    assert!(log.is_empty());
}
