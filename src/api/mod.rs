//! Jira API client and types.
//!
//! This module provides the interface for communicating with the Jira REST
//! API filter and issue-assignee endpoints.

mod auth;
mod client;
mod error;
mod types;

pub use auth::Auth;
pub use client::FilterClient;
pub use error::{ApiError, Result};
pub use types::{
    AssignQuery, DeleteQuery, JsonQuery, ReadQuery, ResponseBody, SearchQuery, UnassignQuery,
    UpdateQuery,
};
