//! Query and response types for the filter datasource.
//!
//! Each verb method accepts exactly one flat query record, mirroring the
//! schema the host runtime validates before dispatch. Field names are
//! camelCase on the wire; optional fields are absent rather than null.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query for `create`: an arbitrary filter definition forwarded to Jira.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonQuery {
    /// The filter definition, serialized verbatim as the request body.
    pub json: Value,
}

/// Query for `read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadQuery {
    /// The filter ID.
    pub filter_id: String,
}

/// Query for `search` against `/rest/api/2/filter/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Index of the first result to return (0-based).
    pub start_at: u32,
    /// Maximum number of results to return.
    pub max_results: u32,
    /// Restrict results to filters whose name matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
    /// Restrict results to filters owned by this account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Entities to expand in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

/// Query for `update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuery {
    /// The filter ID.
    pub filter_id: String,
    /// The replacement filter definition.
    pub json: Value,
}

/// Query for `delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuery {
    /// The filter ID.
    pub filter_id: String,
}

/// Query for `assign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignQuery {
    /// The issue ID or key (e.g. "PROJ-123").
    pub issue_id_or_key: String,
    /// The account ID of the new assignee.
    pub account_id: String,
}

/// Query for `unassign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignQuery {
    /// The issue ID or key (e.g. "PROJ-123").
    pub issue_id_or_key: String,
}

/// A shaped response handed back to the host.
///
/// Serializes untagged, so the host sees either a JSON value or a plain
/// string, matching what the verb returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Body parsed as JSON (the response content-type contained "json").
    Json(Value),
    /// Raw body text, or a fixed success replacement.
    Text(String),
}

impl ResponseBody {
    /// Get the parsed JSON value, if this body is JSON.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Get the raw text, if this body is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }
}
