//! Thread-safe handle over a catalog
//!
//! One coarse lock guards the whole catalog: registration and magazine
//! mutation take the write side, scans take the read side. Query results
//! are cloned out because borrows cannot outlive the guard.

use super::article::Article;
use super::author::Author;
use super::magazine::Magazine;
use super::store::{Catalog, CatalogStatistics};
use super::types::{ArticleId, AuthorId, MagazineId};
use super::validation::CatalogResult;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable, shareable catalog
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Run `f` with shared access to the catalog
    pub fn read<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        // Catalog methods validate before mutating, so a panic mid-call
        // cannot leave it half-written
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Run `f` with exclusive access to the catalog
    pub fn write<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn create_author(&self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        self.write(|catalog| catalog.create_author(name))
    }

    pub fn create_magazine(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        self.write(|catalog| catalog.create_magazine(name, category))
    }

    pub fn create_article(
        &self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.write(|catalog| catalog.create_article(author, magazine, title))
    }

    pub fn add_article(
        &self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.write(|catalog| catalog.add_article(author, magazine, title))
    }

    pub fn set_magazine_name(&self, id: MagazineId, name: impl Into<String>) -> CatalogResult<()> {
        self.write(|catalog| catalog.set_magazine_name(id, name))
    }

    pub fn set_magazine_category(
        &self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        self.write(|catalog| catalog.set_magazine_category(id, category))
    }

    pub fn author(&self, id: AuthorId) -> Option<Author> {
        self.read(|catalog| catalog.author(id).cloned())
    }

    pub fn magazine(&self, id: MagazineId) -> Option<Magazine> {
        self.read(|catalog| catalog.magazine(id).cloned())
    }

    pub fn author_articles(&self, author: AuthorId) -> Vec<Article> {
        self.read(|catalog| catalog.author_articles(author).into_iter().cloned().collect())
    }

    pub fn author_magazines(&self, author: AuthorId) -> Vec<Magazine> {
        self.read(|catalog| catalog.author_magazines(author).into_iter().cloned().collect())
    }

    pub fn topic_areas(&self, author: AuthorId) -> Vec<String> {
        self.read(|catalog| {
            catalog
                .topic_areas(author)
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
    }

    pub fn magazine_articles(&self, magazine: MagazineId) -> Vec<Article> {
        self.read(|catalog| catalog.magazine_articles(magazine).into_iter().cloned().collect())
    }

    pub fn contributors(&self, magazine: MagazineId) -> Vec<Author> {
        self.read(|catalog| catalog.contributors(magazine).into_iter().cloned().collect())
    }

    pub fn article_titles(&self, magazine: MagazineId) -> Vec<String> {
        self.read(|catalog| {
            catalog
                .article_titles(magazine)
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
    }

    pub fn contributing_authors(&self, magazine: MagazineId) -> Vec<Author> {
        self.read(|catalog| {
            catalog
                .contributing_authors(magazine)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn top_publisher(&self) -> Option<Magazine> {
        self.read(|catalog| catalog.top_publisher().cloned())
    }

    pub fn statistics(&self) -> CatalogStatistics {
        self.read(Catalog::statistics)
    }
}
