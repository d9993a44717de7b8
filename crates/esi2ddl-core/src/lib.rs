pub mod document;
pub use document::{Document, Pointer};

pub mod driver;
pub use driver::{Driver, Row};

mod error;
pub use error::Error;

pub mod mapping;
pub use mapping::MappingIndex;

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses esi2ddl's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
