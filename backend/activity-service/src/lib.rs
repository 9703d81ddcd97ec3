/// Activity Service Library
///
/// Minimal social-feed backend: a post-confirmation identity-sync hook and two
/// data-access services (create a timed post, list the home feed) backed by
/// PostgreSQL. Each operation is a single parameterized SQL statement wrapped
/// in validation; the connection pool is built once at startup and injected.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, activities, and service outcomes
/// - `services`: Business logic layer
/// - `db`: Database access layer (repositories)
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
