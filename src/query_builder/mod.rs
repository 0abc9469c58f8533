//! # Query Builder System
//!
//! Fluent query composition over the polymorphic content store.
//!
//! ## Key Components
//!
//! - [`builder`] - Core SQL assembly with bound parameters
//! - [`conditions`] - WHERE clause composition (AND-joined predicate set)
//! - [`joins`] - JOIN clause management with idempotent alias registration
//! - [`params`] - Bind parameter store (injection-safe by construction)
//! - [`pagination`] - LIMIT/OFFSET plus the lazy [`Paginator`] cursor
//! - [`classmap`] - Class alias to discriminator resolution
//! - [`tree_scope`] - Two-phase nested-set subtree resolution
//! - [`content`] - The [`ContentQuery`] filter surface itself
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use content_store::query_builder::{ContentQuery, SortDirection};
//!
//! let paginator = ContentQuery::new(engine)
//!     .add_site_filter("site-1")?
//!     .add_class_filter(&["article"])?
//!     .order_by_index("title", SortDirection::Asc)
//!     .paginate(0, 25);
//! let page = paginator.fetch().await?;
//! let total = paginator.count().await?;
//! ```

pub mod builder;
pub mod classmap;
pub mod conditions;
pub mod content;
pub mod joins;
pub mod pagination;
pub mod params;
pub mod tree_scope;

pub use builder::{QueryBuilder, SortDirection};
pub use classmap::ClassMap;
pub use conditions::{Condition, LogicalOperator, WhereClause};
pub use content::{ContentQuery, SiteRef};
pub use joins::{Join, JoinType};
pub use pagination::{Pagination, Paginator};
pub use params::{ParamStore, ParamValue, SqlQuery};
pub use tree_scope::TreeScope;
