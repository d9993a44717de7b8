use super::{Name, Statement};

use esi2ddl_core::{schema::db::Table, Error, Result, Row};

#[derive(Debug, Clone)]
pub struct Insert {
    /// Table being inserted into
    pub target: Name,

    /// Target columns, matching `values` one to one
    pub columns: Vec<String>,

    /// One record; `None` is `NULL`
    pub values: Vec<Option<String>>,
}

impl Statement {
    /// Builds an insert of `row` into `table`. Every column the row names
    /// must exist on the table.
    pub fn insert(table: &Table, row: &Row) -> Result<Self> {
        if row.table != table.name {
            return Err(Error::invalid_schema(format!(
                "row for table `{}` cannot be inserted into `{}`",
                row.table, table.name
            )));
        }

        let mut columns = Vec::with_capacity(row.values.len());
        let mut values = Vec::with_capacity(row.values.len());

        for (column, value) in &row.values {
            if !table.has_column(column) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` has no column `{column}`",
                    table.name
                )));
            }

            columns.push(column.clone());
            values.push(value.clone());
        }

        Ok(Insert {
            target: Name::table(table),
            columns,
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
