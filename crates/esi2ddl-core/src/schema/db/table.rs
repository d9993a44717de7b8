use super::{Column, ColumnId};

use std::fmt;

/// A database table
#[derive(Debug, Clone)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// Schema qualifier the table is created in
    pub schema: Option<String>,

    /// Human-readable description, emitted as a table comment.
    pub description: Option<String>,

    /// The table's columns, in insertion order
    pub columns: Vec<Column>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub fn new(id: TableId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            schema: None,
            description: None,
            columns: vec![],
        }
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_by_name(name).is_some()
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    /// Appends a column, assigning its identifier. Returns `None`, leaving
    /// the table untouched, when a column of the same name already exists.
    pub fn push_column(&mut self, mut column: Column) -> Option<ColumnId> {
        if self.has_column(&column.name) {
            return None;
        }

        column.id = ColumnId {
            table: self.id,
            index: self.columns.len(),
        };

        let id = column.id;
        self.columns.push(column);
        Some(id)
    }
}

impl TableId {
    pub(crate) fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
