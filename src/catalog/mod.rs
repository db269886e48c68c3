//! Showroom Catalog - loading, holding and searching catalog items
//!
//! # Overview
//!
//! The catalog is a flat, ordered list of items read once from a JSON
//! document. Items are never validated or reordered; duplicates are kept.
//!
//! # Architecture
//!
//! ```text
//! data.json (URL or path)
//!     │
//!     ▼
//! CatalogSource::fetch   ← one load per session, no retry
//!     │
//!     ▼
//! CatalogStore           ← full, unfiltered collection
//!     │
//!     ▼
//! filter(items, query)   ← case-insensitive substring match
//! ```

mod filter;
mod item;
mod source;
mod store;

pub use filter::filter;
pub use item::Item;
pub use source::{
    open_source, parse_items, CatalogSource, FileSource, HttpSource, SourceLocation,
    DEFAULT_SOURCE,
};
pub use store::CatalogStore;
