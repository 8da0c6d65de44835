use serde::{Deserialize, Serialize};

/// One row of a list view, as handed to computed columns.
///
/// `data` holds the row's attribute values keyed by attribute name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub data: serde_json::Value,
}

impl Record {
    pub fn new(id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}
