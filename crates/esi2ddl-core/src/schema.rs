mod builder;
pub use builder::{Builder, PathParameter, PathParameters};

pub mod db;

pub mod name;

mod verify;

use crate::MappingIndex;

/// The result of one derivation run: the relational schema together with
/// the index mapping API operations to its tables.
#[derive(Debug, Clone)]
pub struct Schema {
    pub db: db::Schema,
    pub mapping: MappingIndex,
}
