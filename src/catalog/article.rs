//! Article entity
//!
//! An article is the join between one author and one magazine. All three
//! fields are fixed once the article is registered.

use super::types::{ArticleId, AuthorId, MagazineId};
use super::validation::{self, CatalogResult};
use crate::config::ValidationRules;
use serde::Serialize;

/// A titled piece written by an author for a magazine
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Checks only the title. Whether the author and magazine exist is up
    /// to the catalog, which owns them.
    pub(crate) fn new(
        id: ArticleId,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
        rules: &ValidationRules,
    ) -> CatalogResult<Self> {
        let title = title.into();
        validation::title(&title, rules)?;
        Ok(Article {
            id,
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check if this article was written by a specific author
    pub fn written_by(&self, author: AuthorId) -> bool {
        self.author == author
    }

    /// Check if this article appears in a specific magazine
    pub fn published_in(&self, magazine: MagazineId) -> bool {
        self.magazine == magazine
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Article {}
