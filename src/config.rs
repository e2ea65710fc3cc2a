//! Datasource configuration supplied by the host runtime.

use serde::{Deserialize, Serialize};

/// Connection details for a Jira instance.
///
/// The host runtime deserializes this from its datasource configuration
/// (camelCase field names on the wire) and hands it to
/// [`FilterClient::new`](crate::FilterClient::new) exactly once; it is not
/// consulted again afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceConfig {
    /// The Jira instance URL (e.g. "https://company.atlassian.net").
    ///
    /// A single trailing slash is tolerated; it is stripped at client
    /// construction.
    pub atlassian_domain_base_url: String,

    /// The username (email address) to authenticate as.
    pub username: String,

    /// The API token paired with the username.
    pub api_token: String,
}

impl DatasourceConfig {
    /// Create a new configuration.
    pub fn new(atlassian_domain_base_url: String, username: String, api_token: String) -> Self {
        Self {
            atlassian_domain_base_url,
            username,
            api_token,
        }
    }
}
