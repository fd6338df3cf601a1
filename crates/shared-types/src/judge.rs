use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::field_rows;

/// A judge as served by `GET /judge`.
///
/// The name is the key for every judge operation; bookmark payloads send
/// it as `judge_name`, the judge listing as `name`, and joined rows carry
/// both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireJudge")]
pub struct JudgeRecord {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct WireJudge {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    judge_name: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<WireJudge> for JudgeRecord {
    type Error = String;

    fn try_from(wire: WireJudge) -> Result<Self, Self::Error> {
        let WireJudge {
            name,
            judge_name,
            mut extra,
        } = wire;
        let name = match (name, judge_name) {
            (Some(name), Some(other)) => {
                // `name` is the key; a differing `judge_name` is kept as data.
                if other != name {
                    extra.insert("judge_name".to_string(), Value::String(other));
                }
                name
            }
            (Some(name), None) | (None, Some(name)) => name,
            (None, None) => {
                return Err("judge record has neither `name` nor `judge_name`".to_string())
            }
        };
        Ok(Self { name, extra })
    }
}

impl JudgeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Label/value rows for the untyped fields.
    pub fn detail_rows(&self) -> Vec<(String, String)> {
        field_rows(&self.extra)
    }
}
