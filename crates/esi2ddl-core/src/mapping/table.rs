use super::MappingIndex;
use crate::{
    driver::Row,
    schema::db::{Column, Table, TableId, Type},
    Error, Result,
};

/// Name of the reserved table holding the serialized mapping index.
pub const MAPPING_TABLE: &str = "swagger_mapping";

/// Largest mapping document, in bytes, the reserved table accepts.
pub const MAPPING_SPEC_CAPACITY: usize = 2_000_000;

const VERSION: &str = "version";
const DESCRIPTION: &str = "description";
/// Column of the reserved table holding the mapping document.
pub const MAPPING_SPEC: &str = "mapping_spec";

impl MappingIndex {
    /// Builds the reserved table the mapping row is inserted into.
    pub fn table(id: TableId) -> Table {
        let mut table = Table::new(id, MAPPING_TABLE);
        table.description = Some("ESI Swagger spec To Database tables mapping information".into());

        for column in [
            Column::new(VERSION, Type::VarChar(50))
                .required()
                .description(Some("ESI Swagger Api version")),
            Column::new(DESCRIPTION, Type::VarChar(255))
                .description(Some("ESI Swagger Api Description")),
            Column::new(MAPPING_SPEC, Type::Text)
                .required()
                .description(Some("ESI 2 DDL Mapping json")),
        ] {
            table.push_column(column);
        }

        table
    }

    /// Builds the single row recorded in the reserved table.
    pub fn row(&self) -> Result<Row> {
        let spec = self.to_json()?;

        if spec.len() > MAPPING_SPEC_CAPACITY {
            return Err(Error::invalid_schema(format!(
                "mapping document is {} bytes; `{MAPPING_TABLE}.{MAPPING_SPEC}` holds at most {MAPPING_SPEC_CAPACITY}",
                spec.len()
            )));
        }

        Ok(Row::new(MAPPING_TABLE)
            .value(VERSION, Some(self.version.clone()))
            .value(DESCRIPTION, self.description.clone())
            .value(MAPPING_SPEC, Some(spec)))
    }
}
