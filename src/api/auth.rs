//! Authentication handling for the Jira API.
//!
//! Jira Cloud uses Basic Auth with a username (email address) and an API
//! token. The credential pair is encoded once at construction; the raw token
//! is not kept around.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::HeaderValue;

use super::error::Result;

/// Authentication credentials for Jira.
#[derive(Debug, Clone)]
pub struct Auth {
    /// The prebuilt `Authorization` header value.
    header_value: HeaderValue,
}

impl Auth {
    /// Create authentication credentials from a username and API token.
    ///
    /// The pair is immediately encoded into a header value and marked
    /// sensitive so it is redacted from debug output.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoded credentials cannot form a valid
    /// header value.
    pub fn new(username: &str, token: &str) -> Result<Self> {
        let header = build_auth_header(username, token);
        let mut header_value = HeaderValue::from_str(&header)?;
        header_value.set_sensitive(true);
        Ok(Self { header_value })
    }

    /// Get the `Authorization` header value for HTTP requests.
    ///
    /// Returns the complete "Basic ..." header value.
    pub fn header_value(&self) -> &HeaderValue {
        &self.header_value
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "username:token" in Base64 and prepends "Basic ".
fn build_auth_header(username: &str, token: &str) -> String {
    let credentials = format!("{}:{}", username, token);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
