//! Author / magazine / article catalog
//!
//! This module implements the publication data model:
//! - Authors with validated, immutable names
//! - Magazines with a validated name and category that stay mutable
//! - Articles joining one author to one magazine, kept in an append-only registry
//! - Derived relationship queries computed by scanning that registry

pub mod article;
pub mod author;
pub mod magazine;
pub mod shared;
pub mod store;
pub mod types;
pub mod validation;

// Re-export main types
pub use article::Article;
pub use author::Author;
pub use magazine::Magazine;
pub use shared::SharedCatalog;
pub use store::{Catalog, CatalogStatistics};
pub use types::{ArticleId, AuthorId, MagazineId};
pub use validation::{CatalogResult, ValidationError};
