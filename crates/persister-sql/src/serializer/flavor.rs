use super::Serializer;

use persister_core::driver::Capability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(&Capability::SQLITE)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(&Capability::POSTGRESQL)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(&Capability::MYSQL)
    }

    pub(super) fn is_mysql(&self) -> bool {
        self.flavor == Flavor::Mysql
    }
}
