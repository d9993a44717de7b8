mod flatten;

mod params;
pub use params::{PathParameter, PathParameters};

mod table;
use table::BuildTable;

use super::{
    db::{self, Table, TableId},
    name, Schema,
};
use crate::{document::Pointer, mapping::OperationMapping, Document, Error, MappingIndex, Result};

use serde_json::Value;
use std::time::Instant;

/// Derives a relational schema and its mapping index from an API document.
#[derive(Debug)]
pub struct Builder {
    /// If set, every table is created in this schema
    schema: Option<String>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    /// The API document being walked
    doc: &'a Document,

    /// Path parameters shared by all operations
    params: PathParameters,

    /// Tables as they are built
    tables: Vec<Table>,

    /// Operation to table mapping, filled alongside the tables
    mapping: MappingIndex,
}

impl Builder {
    pub fn new() -> Self {
        Self { schema: None }
    }

    pub fn schema(&mut self, name: impl Into<String>) -> &mut Self {
        self.schema = Some(name.into());
        self
    }

    /// Runs the derivation to completion. Any failure aborts the whole run;
    /// no partial schema is returned.
    pub fn build(&self, doc: &Document) -> Result<Schema> {
        let start = Instant::now();

        let info = Pointer::root().key("info");
        let version = doc
            .str(&info.key("version"))
            .ok_or_else(|| Error::invalid_document("missing `info.version`"))?;
        let description = doc.str(&info.key("description")).map(String::from);
        let name = doc
            .str(&info.key("title"))
            .or(description.as_deref())
            .unwrap_or_default()
            .to_string();

        let mut builder = BuildSchema {
            builder: self,
            doc,
            params: PathParameters::from_document(doc)?,
            tables: vec![],
            mapping: MappingIndex::new(description, version),
        };

        let paths = Pointer::root().key("paths");
        let Some(paths) = doc.map(&paths) else {
            return Err(Error::invalid_document("missing `paths`"));
        };

        for path in paths.keys() {
            builder.build_table_for_path(path)?;
        }

        builder.add_mapping_table();
        builder.qualify_tables();

        let schema = Schema {
            db: db::Schema {
                name,
                version: version.to_string(),
                tables: builder.tables,
            },
            mapping: builder.mapping,
        };

        // Verify the schema structure
        schema.verify()?;

        log::info!(
            "derived {} tables in {}ms",
            schema.db.tables.len(),
            start.elapsed().as_millis()
        );

        Ok(schema)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildSchema<'_> {
    fn build_table_for_path(&mut self, path: &str) -> Result<()> {
        let doc = self.doc;
        let at = Pointer::root().key("paths").key(path).key("get");

        let Some(op) = doc.map(&at) else {
            log::debug!("skipping paths.{path}: nothing to fetch");
            return Ok(());
        };

        log::debug!("parsing paths.{path}");

        let operation_id = op
            .get("operationId")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::invalid_document(format!("`{at}` has no operationId")))?;

        if self.mapping.operations.contains_key(operation_id) {
            return Err(Error::invalid_document(format!(
                "duplicate operationId `{operation_id}` at `{at}`"
            )));
        }

        let table_name = name::table_name(path).map_err(|err| err.context(format!("paths.{path}")))?;
        let description = op
            .get("description")
            .and_then(Value::as_str)
            .map(String::from);

        let mut table = Table::new(TableId(self.tables.len()), table_name);
        table.description = description.clone();

        let mut operation = OperationMapping::new(&table.name, description);

        BuildTable {
            doc,
            params: &self.params,
            table: &mut table,
            operation: &mut operation,
            expanding: vec![],
        }
        .build(&at)?;

        self.tables.push(table);
        self.mapping
            .operations
            .insert(operation_id.to_string(), operation);

        Ok(())
    }

    fn add_mapping_table(&mut self) {
        let id = TableId(self.tables.len());
        self.tables.push(MappingIndex::table(id));
    }

    fn qualify_tables(&mut self) {
        for table in &mut self.tables {
            table.schema = self.builder.schema.clone();
        }
    }
}
