//! A thin datasource client for Jira saved filters.
//!
//! This crate maps seven CRUD-style verbs (create, read, search, update,
//! delete, assign, unassign) onto the Jira REST API v2 filter and
//! issue-assignee endpoints. It is built to be embedded in an
//! integration-platform runtime: the host constructs a [`FilterClient`]
//! from a [`DatasourceConfig`] and invokes one verb per call with a flat
//! query record, receiving either a shaped [`ResponseBody`] or an
//! [`ApiError`] with a human-readable message.
//!
//! The client holds no mutable state after construction: each call builds
//! its own request, performs exactly one HTTP attempt, and returns. There
//! is no caching, no retry and no timeout; the host owns scheduling and
//! limits.

pub mod api;
pub mod config;

pub use api::{
    ApiError, AssignQuery, DeleteQuery, FilterClient, JsonQuery, ReadQuery, ResponseBody, Result,
    SearchQuery, UnassignQuery, UpdateQuery,
};
pub use config::DatasourceConfig;
