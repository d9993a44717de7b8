use super::{params::attr, BuildTable};
use crate::{
    document::{self, Pointer},
    mapping::ResponseKind,
    schema::name::SEPARATOR,
    Error, Result,
};

use serde_json::Value;
use std::collections::HashSet;

/// Stands in for an absent schema node.
pub(super) static NULL: Value = Value::Null;

impl BuildTable<'_> {
    /// Flattens the response schema `node`, found at `at`, into columns.
    ///
    /// Nested objects are inlined with their property names joined by
    /// [`SEPARATOR`]; arrays pass through to their items. Only scalar
    /// columns reach the table.
    ///
    /// A definition that contains itself, directly or through other
    /// definitions, cannot be inlined and is rejected.
    pub(super) fn flatten(&mut self, node: &Value, at: &Pointer, prefix: &str) -> Result<()> {
        let Some(target) = document::reference(node) else {
            return self.flatten_node(node, at, prefix);
        };

        if self.expanding.iter().any(|expanding| expanding == target) {
            return Err(
                Error::invalid_document(format!("`{target}` contains itself"))
                    .context(at.to_string()),
            );
        }

        self.expanding.push(target.to_string());
        let ret = self.flatten_node(node, at, prefix);
        self.expanding.pop();
        ret
    }

    fn flatten_node(&mut self, node: &Value, at: &Pointer, prefix: &str) -> Result<()> {
        let doc = self.doc;
        let node = doc.resolve(node);

        match attr(node, "type") {
            Some("object") => {
                if prefix.is_empty() {
                    self.operation.kind = Some(ResponseKind::Structure);
                }

                let required: HashSet<&str> = node
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| names.iter().filter_map(Value::as_str).collect())
                    .unwrap_or_default();

                let Some(properties) = node.get("properties").and_then(Value::as_object) else {
                    return Ok(());
                };

                for (name, property) in properties {
                    let property_at = at.key("properties").key(name);
                    let resolved = doc.resolve(property);

                    if attr(resolved, "type") == Some("object") {
                        let prefix = format!("{prefix}{name}{SEPARATOR}");
                        self.flatten(property, &property_at, &prefix)?;
                    } else {
                        self.column(
                            &format!("{prefix}{name}"),
                            resolved,
                            required.contains(name.as_str()),
                        )
                        .map_err(|err| err.context(property_at.to_string()))?;
                    }
                }

                Ok(())
            }
            Some("array") => {
                let items = node.get("items").unwrap_or(&NULL);
                self.flatten(items, &at.key("items"), prefix)
            }
            // Single value response
            Some("integer" | "number") => {
                self.operation.kind = Some(ResponseKind::Primitive);

                let field = format!("{prefix}{}_id", self.table.name);
                self.column(&field, node, false)
                    .map_err(|err| err.context(at.to_string()))?;

                Ok(())
            }
            ty => Err(Error::unknown_model_type(ty).context(at.to_string())),
        }
    }
}
