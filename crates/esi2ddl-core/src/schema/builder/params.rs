use crate::{
    document::Pointer,
    schema::{
        db::{Column, Type},
        name,
    },
    Document, Error, Result,
};

use indexmap::IndexMap;
use serde_json::Value;

/// Path parameters declared once in the document's top-level `parameters`
/// block, keyed by their definition name (the target of
/// `#/parameters/<name>` references).
///
/// Built once per run and read-only afterwards. Operations receive clones of
/// the prototype columns, never the prototypes themselves.
#[derive(Debug, Default)]
pub struct PathParameters {
    params: IndexMap<String, PathParameter>,
}

#[derive(Debug, Clone)]
pub struct PathParameter {
    /// The parameter's `name`, as it appears in the API path
    pub name: String,

    /// Prototype column; always required
    pub column: Column,

    /// True when the parameter's JSON type is `string`
    pub string: bool,
}

impl PathParameters {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let at = Pointer::root().key("parameters");
        let mut params = IndexMap::new();

        let Some(definitions) = doc.map(&at) else {
            return Ok(Self { params });
        };

        for (key, definition) in definitions {
            if attr(definition, "in") != Some("path") {
                continue;
            }

            let param = PathParameter::from_definition(definition)
                .map_err(|err| err.context(at.key(key).to_string()))?;

            params.insert(key.clone(), param);
        }

        Ok(Self { params })
    }

    pub fn get(&self, key: &str) -> Option<&PathParameter> {
        self.params.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PathParameter)> + '_ {
        self.params.iter().map(|(key, param)| (key.as_str(), param))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl PathParameter {
    fn from_definition(definition: &Value) -> Result<Self> {
        let name = attr(definition, "name")
            .ok_or_else(|| Error::invalid_document("path parameter has no name"))?;
        let ty = attr(definition, "type");

        let column = Column::new(
            name::identifier(name),
            Type::from_json(ty, attr(definition, "format"))?,
        )
        .required()
        .description(attr(definition, "description"));

        Ok(Self {
            name: name.to_string(),
            column,
            string: ty == Some("string"),
        })
    }
}

pub(super) fn attr<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key)?.as_str()
}
