//! # Data Models
//!
//! The content store's entities in the shapes the query core consumes:
//! polymorphic [`Content`], nested-set [`Page`] nodes, [`Site`] ownership
//! and [`IndexEntry`] indexation triples.

pub mod content;
pub mod index_entry;
pub mod page;
pub mod site;

pub use content::{Content, NewContent};
pub use index_entry::IndexEntry;
pub use page::Page;
pub use site::Site;
