//! Gazette
//!
//! An in-memory catalog of authors, the magazines they write for, and the
//! articles joining the two.
//!
//! # Model
//!
//! - Author: a name that is non-empty after trimming, fixed at creation
//! - Magazine: a name of 2 to 16 characters and a non-blank category, both mutable
//! - Article: one author, one magazine and a title of 5 to 50 characters
//!
//! Articles live in a single append-only registry owned by a [`Catalog`].
//! Authors and magazines hold no back-references; every relationship query
//! (an author's magazines, a magazine's contributors, the top publisher)
//! is a scan over that registry.
//!
//! ## Example Usage
//!
//! ```rust
//! use gazette::Catalog;
//!
//! let mut catalog = Catalog::new();
//!
//! let carry = catalog.create_author("Carry Bradshaw")?;
//! let vogue = catalog.create_magazine("Vogue", "Fashion")?;
//! let ad = catalog.create_magazine("AD", "Architecture")?;
//!
//! catalog.add_article(carry, vogue, "How to wear a tutu with style")?;
//! catalog.add_article(carry, ad, "2023 Eccentric Design Trends")?;
//!
//! assert_eq!(catalog.author_articles(carry).len(), 2);
//! assert_eq!(catalog.topic_areas(carry), vec!["Fashion", "Architecture"]);
//! assert_eq!(catalog.top_publisher().map(|m| m.name()), Some("Vogue"));
//! # Ok::<(), gazette::ValidationError>(())
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;

// Re-export main types for convenience
pub use catalog::{
    Article, ArticleId, Author, AuthorId, Catalog, CatalogResult, CatalogStatistics, Magazine,
    MagazineId, SharedCatalog, ValidationError,
};

pub use config::{CatalogConfig, ConfigError, ValidationRules};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
