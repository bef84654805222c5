/// Post Service Library
///
/// A small HTTP API for creating, listing, and deleting social posts backed
/// by PostgreSQL. Serves a single client application across origins.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for post endpoints
/// - `models`: Data structures for posts
/// - `db`: Database access layer and post repository
/// - `validators`: Input validation
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
