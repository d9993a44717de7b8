mod field;
pub use field::FieldMapping;

mod operation;
pub use operation::{OperationMapping, ResponseKind};

mod table;
pub use table::{MAPPING_SPEC, MAPPING_SPEC_CAPACITY, MAPPING_TABLE};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Defines the correspondence between API operations and the tables derived
/// from them.
///
/// The index is filled while the schema is derived and is immutable
/// afterwards. It serializes to a single JSON document:
///
/// ```json
/// {
///   "description": "...",
///   "version": "1.0",
///   "get_characters_character_id_assets": {
///     "table": "chr_asset",
///     "description": "...",
///     "type": "structure",
///     "fields": {"item_id": {"column": "item_id", "string": false}},
///     "key": ["character_id"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub version: String,

    /// Per-operation mappings keyed by operation id, in document order.
    #[serde(flatten)]
    pub operations: IndexMap<String, OperationMapping>,
}

impl MappingIndex {
    pub fn new(description: Option<String>, version: impl Into<String>) -> Self {
        Self {
            description,
            version: version.into(),
            operations: IndexMap::new(),
        }
    }

    /// Returns the mapping for the specified operation.
    pub fn operation(&self, operation_id: &str) -> Option<&OperationMapping> {
        self.operations.get(operation_id)
    }

    /// Returns the mapping of the operation whose table is `table`.
    pub fn operation_for_table(&self, table: &str) -> Option<(&str, &OperationMapping)> {
        self.operations
            .iter()
            .find(|(_, operation)| operation.table == table)
            .map(|(id, operation)| (id.as_str(), operation))
    }

    /// Serializes the index to a JSON document.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(src: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}
