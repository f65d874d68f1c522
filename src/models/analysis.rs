//! Analysis results decoded from the generative-text reply.
//!
//! The model is asked for a specific JSON shape but nothing enforces it, so
//! these types are lenient where the model is known to drift: absent or
//! `null` lists decode as empty, and an issue's `path` may be a single string
//! or a list of strings.

use paperclip::actix::Apiv2Schema;
use paperclip::v2::schema::Apiv2Schema as Apiv2SchemaTrait;
use serde::{Deserialize, Deserializer, Serialize};

/// Result of a general log analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub popular_pages: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slow_pages: Vec<PerformanceData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub potential_issues: Vec<Issue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub insights: Vec<String>,
}

/// Per-path performance figures as reported by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct PerformanceData {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub avg_duration: i64,
    #[serde(default)]
    pub request_count: i64,
    #[serde(default)]
    pub error_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Issue {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub path: Option<IssuePath>,
}

/// The `path` of an issue: models return either one path or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssuePath {
    Single(String),
    Multiple(Vec<String>),
}

impl IssuePath {
    /// All paths named by the issue, in reply order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            IssuePath::Single(path) => vec![path.as_str()],
            IssuePath::Multiple(paths) => paths.iter().map(String::as_str).collect(),
        }
    }
}

// Documented as a free-form value.
impl Apiv2SchemaTrait for IssuePath {}

/// Result of a performance analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct PerformanceAnalysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slow_endpoints: Vec<PerformanceData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performance_patterns: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_issues: Vec<ResourceIssue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
}

/// A resource-level finding; unlike [`Issue`] it is not tied to a path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ResourceIssue {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
