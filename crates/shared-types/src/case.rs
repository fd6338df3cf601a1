use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::{field_rows, string_or_number};

/// A case as served by `GET /cases` and embedded in profile bookmarks.
///
/// Only the fields this client acts on are typed; everything else the
/// backend sends is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, alias = "case_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judge_name: Option<String>,
    #[serde(default, alias = "case_status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CaseRecord {
    /// Name to show in tables; falls back to the id for unnamed cases.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Label/value rows for the untyped fields.
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        field_rows(&self.extra)
    }
}
