//! ResumeData: the interchange record shared by the render pipeline, the HTTP
//! boundary and the editor commands.
//!
//! Parsing is lenient by contract: the root must be a JSON object, but every
//! field of the wrong type falls back to its default instead of failing the
//! whole document. Serialization omits absent optional fields so a parsed
//! record survives a serialize → parse round trip unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Invalid resume data: expected a JSON object with resume fields")]
    NotAnObject,

    #[error("Invalid resume JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "lenient_string")]
    pub group: String,
    /// Rendered joined by `", "`; duplicates and order are kept verbatim.
    #[serde(deserialize_with = "lenient_strings")]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLink {
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    /// Used verbatim as an `href`.
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub stack: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub bullets: Vec<String>,
    /// `None` and `Some(vec![])` render identically (no links block).
    #[serde(
        deserialize_with = "lenient_opt_records",
        skip_serializing_if = "Option::is_none"
    )]
    pub links: Option<Vec<ProjectLink>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub level: String,
    #[serde(deserialize_with = "lenient_string")]
    pub note: String,
}

/// Root record. Field names are the interchange format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_e164: Option<String>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_display: Option<String>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<String>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_url: Option<String>,
    #[serde(
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub website_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient_records")]
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "lenient_records")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "lenient_records")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient_records")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "lenient_records")]
    pub languages: Vec<Language>,
}

impl ResumeData {
    /// The blank record the editor starts from and resets to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(json: &[u8]) -> Result<Self, DataError> {
        Self::from_value(serde_json::from_slice(json)?)
    }

    /// Rejects any root that is not an object. serde would otherwise accept a
    /// JSON array positionally for a struct.
    pub fn from_value(value: Value) -> Result<Self, DataError> {
        if !value.is_object() {
            return Err(DataError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Two-space indented JSON, the format the editor downloads as `resume.json`.
    pub fn to_json_pretty(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// An optional field counts as present only when it holds non-empty text.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Lenient field deserializers
// ────────────────────────────────────────────────────────────────────────────

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn records_from<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect()
}

fn lenient_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => records_from(items),
        _ => Vec::new(),
    })
}

fn lenient_opt_records<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(records_from(items)),
        _ => None,
    })
}
