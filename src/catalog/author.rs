//! Author entity

use super::types::AuthorId;
use super::validation::{self, CatalogResult};
use serde::Serialize;

/// A writer of articles
///
/// The name is fixed at construction. Authors keep no list of their
/// articles; the catalog finds them by scanning the registry.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Validate and build. The name is stored exactly as given, untrimmed.
    pub(crate) fn new(id: AuthorId, name: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into();
        validation::author_name(&name)?;
        Ok(Author { id, name })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Author {}

impl std::hash::Hash for Author {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
