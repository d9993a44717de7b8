use crate::{async_trait, schema::db::Schema};

use std::fmt::Debug;

/// Materializes a derived schema.
///
/// Implementations either render DDL text or execute it against a live
/// database. Timeouts, retries and connection handling belong to the
/// implementation; the derivation treats every call as a synchronous step
/// that either succeeds or aborts the run.
#[async_trait]
pub trait Driver: Debug + Send + Sync {
    /// Creates every table of the schema.
    async fn create_tables(&self, schema: &Schema) -> crate::Result<()>;

    /// Inserts one row into a table of the schema.
    async fn insert(&self, schema: &Schema, row: &Row) -> crate::Result<()>;
}

/// A row of text values addressed by column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Name of the target table
    pub table: String,

    /// Column name and value pairs, in insertion order. `None` is `NULL`.
    pub values: Vec<(String, Option<String>)>,
}

impl Row {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: vec![],
        }
    }

    pub fn value(mut self, column: impl Into<String>, value: Option<String>) -> Self {
        self.values.push((column.into(), value));
        self
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }
}
