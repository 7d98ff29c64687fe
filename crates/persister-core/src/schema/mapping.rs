//! Converts between structured value records and flat rows.
//!
//! Both directions walk a descriptor's members in declaration order, recursing into nested
//! members the same way [`flatten`](super::flatten) does. Column `i` of a table therefore
//! always holds value `i` of an encoded row.

mod decode;
pub use decode::decode;

mod encode;
pub use encode::encode;

/// Joins a member name onto the path of the record containing it.
fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}_{name}"),
        None => name.to_string(),
    }
}
