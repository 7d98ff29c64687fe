#[derive(Debug, PartialEq, persister::Model)]
struct Inner {
    id: i64,
    label: String,
}

#[derive(Debug, PartialEq, persister::Model)]
struct Outer {
    id: i64,

    #[embed]
    one: Inner,

    #[embed(size = 3)]
    many: Vec<Inner>,
}

fn main() {
    use persister::Model;

    let outer = Outer {
        id: 1,
        one: Inner { id: 2, label: "a".into() },
        many: vec![
            Inner { id: 3, label: "b".into() },
            Inner { id: 4, label: "c".into() },
            Inner { id: 5, label: "d".into() },
        ],
    };

    let loaded = Outer::load(outer.to_record()).unwrap();
    assert_eq!(loaded, outer);
}
