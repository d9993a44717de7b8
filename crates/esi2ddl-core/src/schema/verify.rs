use super::{
    db::{ColumnId, Table},
    name::{MAX_COLUMN_NAME_LEN, MAX_TABLE_NAME_LEN},
    Schema,
};
use crate::{mapping::MAPPING_TABLE, Error, Result};

use std::collections::{BTreeSet, HashSet};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_ids_populated());

        self.verify_table_names_are_unique()?;
        self.verify_column_names_are_unique()?;
        self.verify_identifier_lengths()?;
        self.verify_tables_match_mapping()?;
        Ok(())
    }

    fn verify_ids_populated(&self) -> bool {
        for (i, table) in self.schema.db.tables.iter().enumerate() {
            assert_eq!(table.id.0, i);

            for (j, column) in table.columns.iter().enumerate() {
                assert!(!column.id.is_placeholder());
                assert_eq!(
                    column.id,
                    ColumnId {
                        table: table.id,
                        index: j
                    }
                );
            }
        }

        true
    }

    fn verify_table_names_are_unique(&self) -> Result<()> {
        let mut names = HashSet::new();

        for table in &self.schema.db.tables {
            if table.name.is_empty() {
                return Err(Error::invalid_schema(format!(
                    "table {:?} has an empty name",
                    table.id
                )));
            }

            if !names.insert(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table name `{}`",
                    table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_column_names_are_unique(&self) -> Result<()> {
        for table in &self.schema.db.tables {
            let mut names = HashSet::new();

            for column in &table.columns {
                if !names.insert(&column.name) {
                    return Err(Error::invalid_schema(format!(
                        "duplicate column name `{}.{}`",
                        table.name, column.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_identifier_lengths(&self) -> Result<()> {
        for table in &self.schema.db.tables {
            if table.name.chars().count() > MAX_TABLE_NAME_LEN {
                return Err(Error::table_name_too_long(&table.name));
            }

            for column in &table.columns {
                if column.name.chars().count() > MAX_COLUMN_NAME_LEN {
                    return Err(Error::invalid_schema(format!(
                        "column name `{}.{}` exceeds {MAX_COLUMN_NAME_LEN} characters",
                        table.name, column.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Every derived table belongs to exactly one operation, and its columns
    /// are exactly the columns that operation's fields point at.
    fn verify_tables_match_mapping(&self) -> Result<()> {
        let mut mapped = HashSet::new();

        for (operation_id, operation) in &self.schema.mapping.operations {
            let Some(table) = self.schema.db.table_by_name(&operation.table) else {
                return Err(Error::invalid_schema(format!(
                    "operation `{operation_id}` maps to missing table `{}`",
                    operation.table
                )));
            };

            if !mapped.insert(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is mapped by more than one operation",
                    table.name
                )));
            }

            let fields: BTreeSet<&str> = operation.columns().collect();
            if fields != column_names(table) || fields.len() != operation.fields.len() {
                return Err(Error::invalid_schema(format!(
                    "columns of table `{}` do not match the fields of operation `{operation_id}`",
                    table.name
                )));
            }
        }

        for table in &self.schema.db.tables {
            if table.name != MAPPING_TABLE && !mapped.contains(&table.name) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is not mapped by any operation",
                    table.name
                )));
            }
        }

        Ok(())
    }
}

fn column_names(table: &Table) -> BTreeSet<&str> {
    table
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect()
}
