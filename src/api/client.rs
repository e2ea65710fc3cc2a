//! Jira filter API client implementation.
//!
//! This module provides the client for the Jira REST API v2 filter and
//! issue-assignee endpoints. Each verb builds a URL and request options,
//! then funnels through a single request routine that attaches
//! authentication and shapes the response.

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response};
use tracing::{debug, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::types::{
    AssignQuery, DeleteQuery, JsonQuery, ReadQuery, ResponseBody, SearchQuery, UnassignQuery,
    UpdateQuery,
};
use crate::config::DatasourceConfig;

/// Jira REST API v2 path prefix.
const JIRA_V2_API_PATH: &str = "/rest/api/2";

/// Filter resource path under the v2 API.
const JIRA_FILTER_PATH: &str = "/rest/api/2/filter";

/// Request options built fresh for every call.
#[derive(Debug)]
struct RequestOpts {
    method: Method,
    body: Option<String>,
    headers: HeaderMap,
}

impl RequestOpts {
    /// Options for a bodyless request.
    fn bare(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Options for a request with a JSON body and content-type header.
    fn json(method: Method, json: &serde_json::Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Self {
            method,
            body: Some(json.to_string()),
            headers,
        }
    }
}

/// The Jira filter client.
///
/// Exposes one async method per datasource verb. All state (base URL, auth
/// header, HTTP client) is immutable after construction, so a single
/// instance is safe to share across concurrent in-flight calls; the host
/// runtime owns scheduling and any concurrency limits.
#[derive(Debug)]
pub struct FilterClient {
    /// The HTTP client.
    http: Client,
    /// The normalized base URL for the Jira instance.
    base_url: String,
    /// Authentication credentials.
    auth: Auth,
}

impl FilterClient {
    /// Create a new filter client from a datasource configuration.
    ///
    /// Normalizes the base URL by stripping at most one trailing slash and
    /// precomputes the Basic Auth header. Performs no network call and does
    /// not validate the credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the
    /// credentials contain bytes that cannot appear in a header value.
    pub fn new(config: &DatasourceConfig) -> Result<Self> {
        let auth = Auth::new(&config.username, &config.api_token)?;
        let http = Client::builder().build().map_err(ApiError::Network)?;
        let base_url = normalize_base_url(&config.atlassian_domain_base_url);

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// Create a new filter.
    ///
    /// Calls `POST /rest/api/2/filter` with the query's JSON payload as the
    /// request body.
    #[instrument(skip(self, query))]
    pub async fn create(&self, query: &JsonQuery) -> Result<ResponseBody> {
        let url = format!("{}{}", self.base_url, JIRA_FILTER_PATH);
        let opts = RequestOpts::json(Method::POST, &query.json);

        self.request(url, opts, None).await
    }

    /// Fetch a single filter by ID.
    ///
    /// Calls `GET /rest/api/2/filter/{filterId}`.
    #[instrument(skip(self, query), fields(filter_id = %query.filter_id))]
    pub async fn read(&self, query: &ReadQuery) -> Result<ResponseBody> {
        let url = format!("{}{}/{}", self.base_url, JIRA_FILTER_PATH, query.filter_id);

        self.request(url, RequestOpts::bare(Method::GET), None).await
    }

    /// Search for filters.
    ///
    /// Calls `GET /rest/api/2/filter/search`. `startAt` and `maxResults` are
    /// always sent; `filterName`, `accountId` and `expand` are appended in
    /// that order only when set. Values are percent-encoded (a space becomes
    /// `%20`, not the form-encoded `+`); Jira accepts either form.
    #[instrument(
        skip(self, query),
        fields(start_at = query.start_at, max_results = query.max_results)
    )]
    pub async fn search(&self, query: &SearchQuery) -> Result<ResponseBody> {
        let mut url = format!(
            "{}{}/search?startAt={}&maxResults={}",
            self.base_url, JIRA_FILTER_PATH, query.start_at, query.max_results
        );
        if let Some(filter_name) = &query.filter_name {
            url.push_str(&format!("&filterName={}", urlencoding::encode(filter_name)));
        }
        if let Some(account_id) = &query.account_id {
            url.push_str(&format!("&accountId={}", urlencoding::encode(account_id)));
        }
        if let Some(expand) = &query.expand {
            url.push_str(&format!("&expand={}", urlencoding::encode(expand)));
        }

        self.request(url, RequestOpts::bare(Method::GET), None).await
    }

    /// Update an existing filter.
    ///
    /// Calls `PUT /rest/api/2/filter/{filterId}` with the query's JSON
    /// payload as the request body.
    #[instrument(skip(self, query), fields(filter_id = %query.filter_id))]
    pub async fn update(&self, query: &UpdateQuery) -> Result<ResponseBody> {
        let url = format!("{}{}/{}", self.base_url, JIRA_FILTER_PATH, query.filter_id);
        let opts = RequestOpts::json(Method::PUT, &query.json);

        self.request(url, opts, None).await
    }

    /// Delete a filter.
    ///
    /// Calls `DELETE /rest/api/2/filter/{filterId}`. Jira answers a
    /// successful delete with an empty body, so the response is replaced
    /// with `{"filterId":"<id>"}` to give the caller a confirmation payload.
    #[instrument(skip(self, query), fields(filter_id = %query.filter_id))]
    pub async fn delete(&self, query: &DeleteQuery) -> Result<ResponseBody> {
        let url = format!("{}{}/{}", self.base_url, JIRA_FILTER_PATH, query.filter_id);
        let replacement = serde_json::json!({ "filterId": query.filter_id }).to_string();

        self.request(url, RequestOpts::bare(Method::DELETE), Some(replacement))
            .await
    }

    /// Assign an issue to an account.
    ///
    /// Calls `PUT /rest/api/2/issue/{issueIdOrKey}/assignee` with the
    /// account ID in the body.
    #[instrument(skip(self, query), fields(issue = %query.issue_id_or_key))]
    pub async fn assign(&self, query: &AssignQuery) -> Result<ResponseBody> {
        let url = format!(
            "{}{}/issue/{}/assignee",
            self.base_url, JIRA_V2_API_PATH, query.issue_id_or_key
        );
        let body = serde_json::json!({ "accountId": query.account_id });

        self.request(url, RequestOpts::json(Method::PUT, &body), None)
            .await
    }

    /// Clear the assignee of an issue.
    ///
    /// Calls `PUT /rest/api/2/issue/{issueIdOrKey}/assignee` with a null
    /// account ID, which Jira treats as "unassigned".
    #[instrument(skip(self, query), fields(issue = %query.issue_id_or_key))]
    pub async fn unassign(&self, query: &UnassignQuery) -> Result<ResponseBody> {
        let url = format!(
            "{}{}/issue/{}/assignee",
            self.base_url, JIRA_V2_API_PATH, query.issue_id_or_key
        );
        let body = serde_json::json!({ "accountId": null });

        self.request(url, RequestOpts::json(Method::PUT, &body), None)
            .await
    }

    /// Issue a single request and shape the response.
    ///
    /// Every verb funnels through here. The auth header is merged into the
    /// per-verb headers last, via `HeaderMap::insert`, so it wins any key
    /// collision. Exactly one HTTP attempt is made per call: no retries, no
    /// timeout, no backoff.
    async fn request(
        &self,
        url: String,
        opts: RequestOpts,
        success_replacement: Option<String>,
    ) -> Result<ResponseBody> {
        let RequestOpts {
            method,
            body,
            mut headers,
        } = opts;
        headers.insert(header::AUTHORIZATION, self.auth.header_value().clone());

        debug!(%method, %url, "Sending request");

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;

        shape_response(response, success_replacement).await
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Shape an HTTP response into a result for the host.
///
/// Statuses up to and including 300 count as success. On success the body is
/// decoded in two steps: responses whose content-type contains "json" are
/// parsed as JSON, and a body that fails to parse falls back to raw text
/// rather than raising. Statuses above 300 fail with the raw body text as
/// the error message.
async fn shape_response(
    response: Response,
    success_replacement: Option<String>,
) -> Result<ResponseBody> {
    let status = response.status();

    if status.as_u16() <= 300 {
        // Substitutes for endpoints whose success body is empty (delete).
        if let Some(replacement) = success_replacement {
            debug!(%status, "Replacing empty success body");
            return Ok(ResponseBody::Text(replacement));
        }

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("json"))
            .unwrap_or(false);

        let text = response.text().await?;

        if is_json {
            match serde_json::from_str(&text) {
                Ok(value) => Ok(ResponseBody::Json(value)),
                Err(_) => Ok(ResponseBody::Text(text)),
            }
        } else {
            Ok(ResponseBody::Text(text))
        }
    } else {
        let text = response.text().await.unwrap_or_default();
        debug!(%status, "Request failed");
        Err(ApiError::RequestFailed(text))
    }
}

/// Normalize the base URL by stripping at most one trailing slash.
fn normalize_base_url(url: &str) -> String {
    let url = url.strip_suffix('/').unwrap_or(url);

    // Warn if not HTTPS (but don't enforce for localhost/testing)
    if !url.starts_with("https://") && !url.contains("localhost") && !url.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    url.to_string()
}
