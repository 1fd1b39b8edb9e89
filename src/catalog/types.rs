//! Handle types for catalog entities
//!
//! Entities never hold references to each other. An article points at its
//! author and magazine through these copyable handles, which the owning
//! [`Catalog`](super::Catalog) resolves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of an author registered in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct AuthorId(pub u64);

impl AuthorId {
    pub fn new(id: u64) -> Self {
        AuthorId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorId({})", self.0)
    }
}

/// Handle of a magazine registered in a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct MagazineId(pub u64);

impl MagazineId {
    pub fn new(id: u64) -> Self {
        MagazineId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MagazineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MagazineId({})", self.0)
    }
}

/// Handle of an article in the registry. Ids follow insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ArticleId(pub u64);

impl ArticleId {
    pub fn new(id: u64) -> Self {
        ArticleId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArticleId({})", self.0)
    }
}
