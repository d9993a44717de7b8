use super::{flatten::NULL, params::attr, PathParameters};
use crate::{
    document::{self, Pointer},
    mapping::OperationMapping,
    schema::{
        db::{Column, Table, Type},
        name,
    },
    Document, Error, Result,
};

use serde_json::Value;

/// Builds one table from one GET operation.
///
/// The operation mapping being populated travels with the table, so every
/// column decision is recorded against the right operation.
pub(super) struct BuildTable<'a> {
    /// The API document
    pub(super) doc: &'a Document,

    /// Shared path parameter prototypes
    pub(super) params: &'a PathParameters,

    /// The table being built
    pub(super) table: &'a mut Table,

    /// The mapping of the operation the table is built from
    pub(super) operation: &'a mut OperationMapping,

    /// `$ref` targets currently being inlined, outermost first
    pub(super) expanding: Vec<String>,
}

impl BuildTable<'_> {
    pub(super) fn build(&mut self, at: &Pointer) -> Result<()> {
        let params = at.key("parameters");
        self.map_parameter_refs(&params);
        self.map_path_parameters(&params)?;

        let doc = self.doc;
        let schema = at.key("responses").key("200").key("schema");
        let node = doc.get(&schema).unwrap_or(&NULL);
        self.flatten(node, &schema, "")
    }

    /// Attaches clones of the shared path parameters the operation
    /// references.
    fn map_parameter_refs(&mut self, at: &Pointer) {
        let (doc, params) = (self.doc, self.params);
        let Some(refs) = doc.list(at) else {
            return;
        };

        for target in refs.iter().filter_map(document::reference) {
            let Some(param) = target
                .strip_prefix("#/parameters/")
                .and_then(|key| params.get(key))
            else {
                continue;
            };

            if self.table.push_column(param.column.clone()).is_some() {
                self.operation
                    .add_field(&param.name, &param.column.name, param.string);
                self.operation.add_key(&param.name);
            }
        }
    }

    /// Converts path parameters declared inline on the operation.
    fn map_path_parameters(&mut self, at: &Pointer) -> Result<()> {
        let doc = self.doc;
        let Some(params) = doc.list(at) else {
            return Ok(());
        };

        for (i, param) in params.iter().enumerate() {
            if attr(param, "in") != Some("path") {
                continue;
            }

            let param_at = at.index(i);
            let name = attr(param, "name").ok_or_else(|| {
                Error::invalid_document(format!("path parameter `{param_at}` has no name"))
            })?;

            if self
                .column(name, param, true)
                .map_err(|err| err.context(param_at.to_string()))?
            {
                self.operation.add_key(name);
            }
        }

        Ok(())
    }

    /// Converts a single schema attribute set into a column named after
    /// `field`. Returns `false`, without touching the table, when a column
    /// with the same identifier already exists.
    pub(super) fn column(&mut self, field: &str, attrs: &Value, required: bool) -> Result<bool> {
        let name = name::identifier(field);

        if self.table.has_column(&name) {
            log::warn!("{}.{name}: duplicate column, keeping the first", self.table.name);
            return Ok(false);
        }

        let json_ty = attr(attrs, "type");
        let mut column = Column::new(&name, Type::from_json(json_ty, attr(attrs, "format"))?)
            .description(attr(attrs, "description"));
        column.nullable = !required;
        column.primary_key = attrs
            .get("uniqueItems")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        log::debug!(
            "{}.{}, type: {:?}, primary: {} required: {}, description: {:?}",
            self.table.name,
            column.name,
            column.ty,
            column.primary_key,
            !column.nullable,
            column.description
        );

        self.table.push_column(column);
        self.operation.add_field(field, name, json_ty == Some("string"));

        Ok(true)
    }
}
