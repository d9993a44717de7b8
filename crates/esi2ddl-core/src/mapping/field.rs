use serde::{Deserialize, Serialize};

/// Where a response field landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Name of the column holding the field.
    pub column: String,

    /// True when the field's JSON type is `string`. Consumers use it to decide
    /// whether values need quoting.
    pub string: bool,
}
