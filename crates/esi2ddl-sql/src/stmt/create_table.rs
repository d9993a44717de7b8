use super::{ColumnDef, Name, Statement};

use esi2ddl_core::schema::db::Table;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key columns; no clause is emitted when empty
    pub primary_key: Vec<String>,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: Name::table(table),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            primary_key: table
                .primary_key_columns()
                .map(|column| column.name.clone())
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
