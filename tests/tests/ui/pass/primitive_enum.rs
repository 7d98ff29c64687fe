#[derive(Debug, Clone, Copy, PartialEq, persister::Primitive)]
enum Level {
    Low,
    High,
}

fn main() {
    use persister::Primitive;

    assert_eq!(Level::TYPE, persister::stmt::Type::String);

    let value = Level::High.to_value();
    assert_eq!(Level::load(value).unwrap(), Level::High);
    assert!(Level::load("Medium".into()).is_err());
}
