use crate::{serializer::Inline, Serializer, Statement};

use esi2ddl_core::{async_trait, schema::db::Schema, Driver, Error, Result, Row};

use std::sync::{Mutex, PoisonError};

/// Renders every statement into a SQL script instead of executing it.
///
/// Values are written inline, so the script can be fed to `psql` as is.
#[derive(Debug, Default)]
pub struct Script {
    sql: Mutex<String>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// The script rendered so far.
    pub fn sql(&self) -> String {
        self.sql
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, stmt: &Statement) {
        let sql = Serializer::postgresql().pretty().serialize(stmt, &mut Inline);
        log::trace!("{sql}");

        let mut dst = self.sql.lock().unwrap_or_else(PoisonError::into_inner);
        dst.push_str(&sql);
        dst.push('\n');
    }
}

#[async_trait]
impl Driver for Script {
    async fn create_tables(&self, schema: &Schema) -> Result<()> {
        for stmt in Statement::create_schema(schema) {
            self.push(&stmt);
        }

        Ok(())
    }

    async fn insert(&self, schema: &Schema, row: &Row) -> Result<()> {
        let table = schema.table_by_name(&row.table).ok_or_else(|| {
            Error::invalid_schema(format!("no table named `{}`", row.table))
        })?;

        self.push(&Statement::insert(table, row)?);
        Ok(())
    }
}
