//! staffctl-server: HTTP service over an employee job store
//!
//! Exposes employees and their job assignments as JSON over HTTP,
//! backed by a local SQLite database.

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DbError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Employee, EmployeeJob, JobPayload};
