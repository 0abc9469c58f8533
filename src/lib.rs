#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Content Store Core
//!
//! Rust persistence core for a polymorphic CMS content store: a fluent
//! query-construction facility composing site scoping, nested-set tree
//! scoping, keyword search, type discrimination, index-based ordering and
//! pagination into a single well-formed PostgreSQL query.
//!
//! ## Architecture
//!
//! The core wraps an execution engine client by composition: a
//! [`query_builder::ContentQuery`] holds mutable predicate/parameter state
//! and a [`database::QueryEngine`] handle, and finalizes into a lazy
//! [`query_builder::Paginator`] cursor. All user-supplied values are bound,
//! never interpolated.
//!
//! ## Module Organization
//!
//! - [`query_builder`] - Filter composition, tree scope resolution, pagination
//! - [`models`] - Content, page, site and indexation entities
//! - [`database`] - Connection pooling and the engine contract
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use content_store::database::{DatabaseConnection, PgQueryEngine};
//! use content_store::query_builder::{ContentQuery, SortDirection};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::new().await?;
//! let engine = Arc::new(PgQueryEngine::new(db.pool().clone()));
//!
//! let paginator = ContentQuery::new(engine)
//!     .add_site_filter("site-1")?
//!     .add_class_filter(&["article"])?
//!     .limit_to_online()
//!     .order_by_index("title", SortDirection::Asc)
//!     .paginate(0, 25);
//!
//! let contents = paginator.fetch().await?;
//! let total = paginator.count().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod query_builder;

pub use config::{ConfigManager, ContentStoreConfig, DatabaseConfig};
pub use database::{DatabaseConnection, KeywordIndex, PgQueryEngine, QueryEngine};
pub use error::{ContentStoreError, Result};
pub use models::{Content, IndexEntry, Page, Site};
pub use query_builder::{
    ClassMap, ContentQuery, Paginator, SiteRef, SortDirection, SqlQuery, TreeScope,
};
