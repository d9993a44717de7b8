use super::Error;

/// Error when the path-naming heuristic produces a table name over the
/// length budget.
///
/// The name is never truncated silently; the fix is a new abbreviation rule.
#[derive(Debug)]
pub(super) struct TableNameTooLong {
    name: Box<str>,
}

impl std::error::Error for TableNameTooLong {}

impl core::fmt::Display for TableNameTooLong {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "table name > {}: {}",
            crate::schema::name::MAX_TABLE_NAME_LEN,
            self.name
        )
    }
}

impl Error {
    /// Creates a table name overflow error.
    pub fn table_name_too_long(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TableNameTooLong(TableNameTooLong {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a table name overflow error.
    pub fn is_table_name_too_long(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::TableNameTooLong(_)))
    }
}
