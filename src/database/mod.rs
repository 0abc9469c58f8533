//! # Database Layer
//!
//! Connection pooling and the execution engine contract the query core
//! targets.

pub mod connection;
pub mod engine;

pub use connection::DatabaseConnection;
pub use engine::{KeywordIndex, PgQueryEngine, QueryEngine};
