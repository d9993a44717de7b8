//! Structured lookup into a parsed API document.
//!
//! Every accessor reports absence with `None`. A missing node, or a node of
//! the wrong JSON type, is not an error here: deciding whether absence is
//! fatal belongs to the caller.

use serde_json::{Map, Value};
use std::fmt;

/// Maximum number of `$ref` hops followed before giving up on a reference
/// chain.
const MAX_REF_DEPTH: usize = 32;

/// A parsed Swagger / OpenAPI 2.0 document.
#[derive(Debug, Clone)]
pub struct Document {
    root: Value,
}

/// A location inside a [`Document`].
///
/// Displayed as a dotted path, e.g. `paths./characters/{character_id}/.get`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Step {
    Key(String),
    Index(usize),
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(Self::new(serde_json::from_slice(bytes)?))
    }

    /// Returns the node at `at`, if any.
    pub fn get(&self, at: &Pointer) -> Option<&Value> {
        at.steps.iter().try_fold(&self.root, |node, step| match step {
            Step::Key(key) => node.as_object()?.get(key),
            Step::Index(index) => node.as_array()?.get(*index),
        })
    }

    pub fn str(&self, at: &Pointer) -> Option<&str> {
        self.get(at)?.as_str()
    }

    pub fn list(&self, at: &Pointer) -> Option<&Vec<Value>> {
        self.get(at)?.as_array()
    }

    pub fn map(&self, at: &Pointer) -> Option<&Map<String, Value>> {
        self.get(at)?.as_object()
    }

    /// Follows local `$ref` references (`#/definitions/...`,
    /// `#/parameters/...`) starting at `node`.
    ///
    /// Nodes that are not references, and references that cannot be
    /// resolved, are returned unchanged.
    pub fn resolve<'a>(&'a self, node: &'a Value) -> &'a Value {
        let mut node = node;

        for _ in 0..MAX_REF_DEPTH {
            let Some(target) = reference(node) else {
                return node;
            };

            match target
                .strip_prefix('#')
                .and_then(|pointer| self.root.pointer(pointer))
            {
                Some(resolved) => node = resolved,
                None => {
                    log::debug!("unresolved reference `{target}`");
                    return node;
                }
            }
        }

        log::warn!("reference chain exceeds {MAX_REF_DEPTH} hops; giving up");
        node
    }
}

/// Returns the target of a `{"$ref": "..."}` node.
pub fn reference(node: &Value) -> Option<&str> {
    node.as_object()?.get("$ref")?.as_str()
}

impl Pointer {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new pointer extended by an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut ret = self.clone();
        ret.steps.push(Step::Key(key.into()));
        ret
    }

    /// Returns a new pointer extended by an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut ret = self.clone();
        ret.steps.push(Step::Index(index));
        ret
    }
}

impl<S: Into<String>> FromIterator<S> for Pointer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().map(|key| Step::Key(key.into())).collect(),
        }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for step in &self.steps {
            match step {
                Step::Key(key) => write!(f, "{s}{key}")?,
                Step::Index(index) => write!(f, "[{index}]")?,
            }
            s = ".";
        }
        Ok(())
    }
}

impl fmt::Debug for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pointer({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> Document {
        Document::new(json!({
            "paths": {
                "/status/": {
                    "get": {
                        "operationId": "get_status",
                        "parameters": [{"$ref": "#/parameters/datasource"}]
                    }
                }
            },
            "parameters": {
                "datasource": {"name": "datasource", "in": "query", "type": "string"}
            },
            "definitions": {
                "a": {"$ref": "#/definitions/b"},
                "b": {"type": "integer"},
                "loop": {"$ref": "#/definitions/loop"}
            }
        }))
    }

    #[test]
    fn lookup_absent_is_none() {
        let doc = doc();
        let op = Pointer::from_iter(["paths", "/status/", "get"]);

        assert_eq!(doc.str(&op.key("operationId")), Some("get_status"));
        assert!(doc.get(&op.key("responses")).is_none());
        assert!(doc.map(&op.key("operationId")).is_none());
        assert!(doc.get(&Pointer::from_iter(["paths", "/nope/", "get"])).is_none());
    }

    #[test]
    fn lookup_by_index() {
        let doc = doc();
        let param = Pointer::from_iter(["paths", "/status/", "get", "parameters"]).index(0);

        assert_eq!(
            reference(doc.get(&param).unwrap()),
            Some("#/parameters/datasource")
        );
        assert_eq!(param.to_string(), "paths./status/.get.parameters[0]");
    }

    #[test]
    fn resolve_follows_chains() {
        let doc = doc();
        let node = json!({"$ref": "#/definitions/a"});

        assert_eq!(doc.resolve(&node), &json!({"type": "integer"}));
    }

    #[test]
    fn resolve_gives_up_on_cycles_and_dangling_refs() {
        let doc = doc();

        let cycle = json!({"$ref": "#/definitions/loop"});
        assert_eq!(doc.resolve(&cycle), &json!({"$ref": "#/definitions/loop"}));

        let dangling = json!({"$ref": "#/definitions/missing"});
        assert_eq!(doc.resolve(&dangling), &dangling);
    }
}
