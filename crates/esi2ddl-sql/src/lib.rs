mod script;
pub use script::Script;

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
