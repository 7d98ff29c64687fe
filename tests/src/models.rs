//! Types shared by several test files.

#[derive(Debug, Clone, PartialEq, persister::Model)]
pub struct PersisterObject {
    pub i1: i32,
    pub d2: f64,
    pub i2: i32,
    pub s1: String,
}

impl PersisterObject {
    pub fn new(i1: i32, d2: f64, i2: i32, s1: &str) -> PersisterObject {
        PersisterObject {
            i1,
            d2,
            i2,
            s1: s1.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, persister::Model)]
pub struct ComplexObject {
    pub i1: i32,
    pub i3: i32,

    #[embed]
    pub p1: PersisterObject,
}

#[derive(Debug, Clone, PartialEq, persister::Model)]
pub struct NestedListObject {
    pub i1: i64,

    #[embed(size = 2)]
    pub ps: Vec<PersisterObject>,
}
