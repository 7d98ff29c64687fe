#[derive(persister::Model)]
#[table = "points"]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    use persister::Model;

    assert_eq!(Point::schema().table_name(), "points");
    assert_eq!(Point { x: 1, y: 2 }.to_record().len(), 2);
}
