//! Nested entity records (genres, keywords, cast, crew, companies)
//!
//! The source datasets encode each nested field as a JSON list of objects
//! inside a CSV cell. Cells are decoded once at the ingestion boundary so the
//! rest of the pipeline works on typed records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of a nested metadata list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Display name ("Action", "Sam Worthington", "Ingenious Film Partners")
    pub name: String,
    /// Crew job ("Director", "Producer", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    /// Cast character name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Billing position for cast entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Entity {
    /// Entity carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Entity {
            name: name.into(),
            job: None,
            character: None,
            order: None,
        }
    }

    /// Crew member with a job title
    pub fn crew(name: impl Into<String>, job: impl Into<String>) -> Self {
        Entity {
            job: Some(job.into()),
            ..Entity::named(name)
        }
    }

    /// Decode one list element, skipping anything without a string `name`
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?;
        Some(Entity {
            name: name.to_string(),
            job: object.get("job").and_then(Value::as_str).map(str::to_string),
            character: object
                .get("character")
                .and_then(Value::as_str)
                .map(str::to_string),
            order: object
                .get("order")
                .and_then(Value::as_u64)
                .and_then(|o| u32::try_from(o).ok()),
        })
    }
}

/// Parse a string-encoded list of entity records.
///
/// Never fails: a cell that is empty or not a JSON list yields an empty list,
/// and list elements that are not objects with a string `name` are skipped.
pub fn parse_entities(raw: &str) -> Vec<Entity> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let values: Vec<Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::trace!(error = %e, "malformed_field");
            return Vec::new();
        }
    };

    let total = values.len();
    let entities: Vec<Entity> = values.iter().filter_map(Entity::from_value).collect();
    if entities.len() < total {
        tracing::trace!(skipped = total - entities.len(), "malformed_entries");
    }
    entities
}
