use esi2ddl_core::schema::db::Table;

/// A possibly schema-qualified object name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    /// The table's name, qualified with its schema when one is set.
    pub fn table(table: &Table) -> Name {
        Name(table.schema.iter().chain([&table.name]).cloned().collect())
    }

    /// The name of `column`, qualified by its table.
    pub fn column(table: &Table, column: &str) -> Name {
        let mut name = Name::table(table);
        name.0.push(column.to_string());
        name
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}
