use super::Table;

#[derive(Debug, Default, Clone)]
pub struct Schema {
    /// Name of the schema, taken from the API document's `info` block
    pub name: String,

    /// Version of the API the schema was derived from
    pub version: String,

    pub tables: Vec<Table>,
}

impl Schema {
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
