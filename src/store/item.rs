//! Item model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored item: a unique integer id plus whatever fields the caller
/// supplied on create/update, kept verbatim.
///
/// `fields` is flattened on (de)serialization so the wire shape is a flat
/// JSON object, e.g. `{"id":123,"name":"Sample Item","description":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Create an item from an id and caller-supplied fields.
    pub fn new(id: i64, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Project the item to its `{id, name, description}` read shape.
    ///
    /// Keys absent from the item are omitted, not emitted as null.
    pub fn summary(&self) -> Value {
        let mut out = Map::new();
        out.insert("id".to_string(), Value::from(self.id));
        for key in ["name", "description"] {
            if let Some(v) = self.fields.get(key) {
                out.insert(key.to_string(), v.clone());
            }
        }
        Value::Object(out)
    }
}
