use super::FieldMapping;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How one API operation maps onto its table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationMapping {
    pub table: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Shape of the success response; set while flattening.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResponseKind>,

    /// Source field name → target column, in discovery order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldMapping>,

    /// Path parameter fields identifying a response, in declaration order.
    #[serde(default)]
    pub key: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// The response is an object, or an array of objects.
    Structure,

    /// The response is a single number.
    Primitive,
}

impl OperationMapping {
    pub fn new(table: impl Into<String>, description: Option<String>) -> Self {
        Self {
            table: table.into(),
            description,
            ..Default::default()
        }
    }

    pub fn add_field(&mut self, name: impl Into<String>, column: impl Into<String>, string: bool) {
        self.fields.insert(
            name.into(),
            FieldMapping {
                column: column.into(),
                string,
            },
        );
    }

    pub fn add_key(&mut self, name: impl Into<String>) {
        self.key.push(name.into());
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.values().map(|field| field.column.as_str())
    }
}
