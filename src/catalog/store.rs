//! In-memory catalog of authors, magazines and articles
//!
//! The article list is the registry: append-only, kept in insertion order,
//! never pruned. Every relationship query is a linear scan over it.

use super::article::Article;
use super::author::Author;
use super::magazine::Magazine;
use super::types::{ArticleId, AuthorId, MagazineId};
use super::validation::{self, CatalogResult, ValidationError};
use crate::config::{CatalogConfig, ValidationRules};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;
type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Articles an author needs in one magazine to count as a contributing author
const CONTRIBUTING_THRESHOLD: usize = 2;

/// Catalog statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    pub author_count: usize,
    pub magazine_count: usize,
    pub article_count: usize,
    /// Authors with at least one article
    pub active_author_count: usize,
    /// Magazines with at least one article
    pub active_magazine_count: usize,
}

/// Registry of authors, magazines and the articles joining them
///
/// Ids index directly into the backing vectors:
/// - authors: AuthorId -> Author
/// - magazines: MagazineId -> Magazine
/// - articles: ArticleId -> Article (the registry, in insertion order)
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    config: CatalogConfig,
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    /// Create an empty catalog with the default rules
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create an empty catalog with custom rules
    pub fn with_config(config: CatalogConfig) -> Self {
        info!("Catalog initialized with rules {:?}", config.rules);
        Catalog {
            config,
            authors: Vec::new(),
            magazines: Vec::new(),
            articles: Vec::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn rules(&self) -> &ValidationRules {
        &self.config.rules
    }

    // ============================================================
    // Construction
    // ============================================================

    /// Register a new author
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let id = AuthorId::new(self.authors.len() as u64);
        let author = Author::new(id, name).inspect_err(|e| debug!("Rejected author: {}", e))?;
        debug!("Created author {} ({:?})", id, author.name());
        self.authors.push(author);
        Ok(id)
    }

    /// Register a new magazine
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let id = MagazineId::new(self.magazines.len() as u64);
        let magazine = Magazine::new(id, name, category, &self.config.rules)
            .inspect_err(|e| debug!("Rejected magazine: {}", e))?;
        debug!("Created magazine {} ({:?})", id, magazine.name());
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Construct an article and append it to the registry.
    ///
    /// The title is checked first, then the author, then the magazine.
    /// Nothing is registered unless all three pass.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let id = ArticleId::new(self.articles.len() as u64);
        let article = Article::new(id, author, magazine, title, &self.config.rules)
            .and_then(|article| {
                self.require_author(author)?;
                self.require_magazine(magazine)?;
                Ok(article)
            })
            .inspect_err(|e| debug!("Rejected article: {}", e))?;

        debug!("Registered article {} by {} in {}", id, author, magazine);
        self.articles.push(article);
        Ok(id)
    }

    /// Write a new article for `magazine` as `author`.
    ///
    /// Same contract as [`create_article`](Self::create_article), except
    /// the magazine is checked before the title.
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        self.require_magazine(magazine)
            .inspect_err(|e| debug!("Rejected article: {}", e))?;
        self.create_article(author, magazine, title)
    }

    fn require_author(&self, id: AuthorId) -> CatalogResult<&Author> {
        self.author(id).ok_or(ValidationError::UnknownAuthor(id))
    }

    fn require_magazine(&self, id: MagazineId) -> CatalogResult<&Magazine> {
        self.magazine(id).ok_or(ValidationError::UnknownMagazine(id))
    }

    // ============================================================
    // Magazine mutation
    // ============================================================

    /// Rename a magazine. On failure the old name is kept.
    pub fn set_magazine_name(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> CatalogResult<()> {
        let rules = self.config.rules;
        let magazine = self
            .magazines
            .get_mut(id.as_u64() as usize)
            .ok_or(ValidationError::UnknownMagazine(id))?;
        let old = magazine
            .set_name(name, &rules)
            .inspect_err(|e| debug!("Rejected name for {}: {}", id, e))?;
        debug!("Renamed {} from {:?} to {:?}", id, old, magazine.name());
        Ok(())
    }

    /// Change a magazine's category. On failure the old category is kept.
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> CatalogResult<()> {
        let magazine = self
            .magazines
            .get_mut(id.as_u64() as usize)
            .ok_or(ValidationError::UnknownMagazine(id))?;
        let old = magazine
            .set_category(category)
            .inspect_err(|e| debug!("Rejected category for {}: {}", id, e))?;
        debug!("Recategorized {} from {:?} to {:?}", id, old, magazine.category());
        Ok(())
    }

    // ============================================================
    // Lookup
    // ============================================================

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(id.as_u64() as usize)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(id.as_u64() as usize)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id.as_u64() as usize)
    }

    pub fn all_authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn all_magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// The registry, in insertion order
    pub fn all_articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// True when no article has been registered
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    // ============================================================
    // Author queries
    // ============================================================

    /// Articles written by `author`, in registry order
    pub fn author_articles(&self, author: AuthorId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.written_by(author))
            .collect()
    }

    /// Distinct magazines `author` has written for, in first-appearance order
    pub fn author_magazines(&self, author: AuthorId) -> Vec<&Magazine> {
        self.articles
            .iter()
            .filter(|article| article.written_by(author))
            .map(Article::magazine)
            .collect::<FxIndexSet<_>>()
            .into_iter()
            .filter_map(|id| self.magazine(id))
            .collect()
    }

    /// Distinct categories of the magazines `author` has written for
    pub fn topic_areas(&self, author: AuthorId) -> Vec<&str> {
        self.author_magazines(author)
            .into_iter()
            .map(Magazine::category)
            .collect::<FxIndexSet<_>>()
            .into_iter()
            .collect()
    }

    // ============================================================
    // Magazine queries
    // ============================================================

    /// Articles published in `magazine`, in registry order
    pub fn magazine_articles(&self, magazine: MagazineId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.published_in(magazine))
            .collect()
    }

    /// Distinct authors who wrote for `magazine`, in first-appearance order
    pub fn contributors(&self, magazine: MagazineId) -> Vec<&Author> {
        self.articles
            .iter()
            .filter(|article| article.published_in(magazine))
            .map(Article::author)
            .collect::<FxIndexSet<_>>()
            .into_iter()
            .filter_map(|id| self.author(id))
            .collect()
    }

    /// Titles of the articles in `magazine`, in registry order
    pub fn article_titles(&self, magazine: MagazineId) -> Vec<&str> {
        self.articles
            .iter()
            .filter(|article| article.published_in(magazine))
            .map(Article::title)
            .collect()
    }

    /// Authors with more than two articles in `magazine`
    pub fn contributing_authors(&self, magazine: MagazineId) -> Vec<&Author> {
        let mut counts: FxIndexMap<AuthorId, usize> = FxIndexMap::default();
        for article in self.magazine_articles(magazine) {
            *counts.entry(article.author()).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|&(_, count)| count > CONTRIBUTING_THRESHOLD)
            .filter_map(|(id, _)| self.author(id))
            .collect()
    }

    /// Magazine with the most articles, or `None` for an empty registry.
    ///
    /// Ties go to the magazine whose first article appears earliest in the
    /// registry.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let mut counts: FxIndexMap<MagazineId, usize> = FxIndexMap::default();
        for article in &self.articles {
            *counts.entry(article.magazine()).or_insert(0) += 1;
        }

        let mut best: Option<(MagazineId, usize)> = None;
        for (id, count) in counts {
            if best.map_or(true, |(_, max)| count > max) {
                best = Some((id, count));
            }
        }
        best.and_then(|(id, _)| self.magazine(id))
    }

    // ============================================================
    // Statistics
    // ============================================================

    pub fn statistics(&self) -> CatalogStatistics {
        let active_authors: FxIndexSet<AuthorId> =
            self.articles.iter().map(Article::author).collect();
        let active_magazines: FxIndexSet<MagazineId> =
            self.articles.iter().map(Article::magazine).collect();

        CatalogStatistics {
            author_count: self.authors.len(),
            magazine_count: self.magazines.len(),
            article_count: self.articles.len(),
            active_author_count: active_authors.len(),
            active_magazine_count: active_magazines.len(),
        }
    }

    /// Check a candidate magazine name against this catalog's rules
    pub fn check_magazine_name(&self, name: &str) -> CatalogResult<()> {
        validation::magazine_name(name, self.rules())
    }

    /// Check a candidate article title against this catalog's rules
    pub fn check_title(&self, title: &str) -> CatalogResult<()> {
        validation::title(title, self.rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(authors: &[&'a Author]) -> Vec<&'a str> {
        authors.iter().copied().map(Author::name).collect()
    }

    #[test]
    fn test_create_entities() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carry Bradshaw").unwrap();
        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let article = catalog.create_article(author, magazine, "How to wear a tutu").unwrap();

        assert_eq!(catalog.author(author).unwrap().name(), "Carry Bradshaw");
        assert_eq!(catalog.magazine(magazine).unwrap().category(), "Fashion");
        assert_eq!(catalog.article(article).unwrap().title(), "How to wear a tutu");
        assert_eq!(catalog.article_count(), 1);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_failed_constructions_register_nothing() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Author").unwrap();
        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();

        assert!(catalog.create_author("  ").is_err());
        assert!(catalog.create_magazine("V", "Fashion").is_err());
        assert!(catalog.create_article(author, magazine, "Tiny").is_err());

        assert_eq!(catalog.author_count(), 1);
        assert_eq!(catalog.magazine_count(), 1);
        assert!(catalog.is_empty());

        // Ids stay dense after a rejection
        let next = catalog.create_author("Second").unwrap();
        assert_eq!(next, AuthorId::new(1));
    }

    #[test]
    fn test_create_article_check_order() {
        let mut catalog = Catalog::new();
        let ghost_author = AuthorId::new(5);
        let ghost_magazine = MagazineId::new(5);

        // Title is checked before either reference
        assert!(matches!(
            catalog.create_article(ghost_author, ghost_magazine, "Tiny"),
            Err(ValidationError::TitleLength { len: 4, .. })
        ));
        // Author before magazine
        assert_eq!(
            catalog.create_article(ghost_author, ghost_magazine, "Long enough"),
            Err(ValidationError::UnknownAuthor(ghost_author))
        );

        let author = catalog.create_author("Real").unwrap();
        assert_eq!(
            catalog.create_article(author, ghost_magazine, "Long enough"),
            Err(ValidationError::UnknownMagazine(ghost_magazine))
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_article_checks_magazine_first() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Real").unwrap();
        let ghost = MagazineId::new(9);

        assert_eq!(
            catalog.add_article(author, ghost, "Tiny"),
            Err(ValidationError::UnknownMagazine(ghost))
        );

        let magazine = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let id = catalog.add_article(author, magazine, "Valid title").unwrap();
        assert_eq!(catalog.author_articles(author)[0].id(), id);
    }

    #[test]
    fn test_author_queries() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Carry Bradshaw").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
        let ad = catalog.create_magazine("AD", "Architecture").unwrap();
        let elle = catalog.create_magazine("Elle", "Fashion").unwrap();

        let a1 = catalog.create_article(author, vogue, "How to wear a tutu").unwrap();
        let a2 = catalog.create_article(author, ad, "2023 Eccentric Design").unwrap();
        let a3 = catalog.create_article(author, vogue, "Dating life in NYC").unwrap();
        catalog.create_article(author, elle, "Spring trends").unwrap();

        let ids: Vec<_> = catalog.author_articles(author).iter().map(|a| a.id()).collect();
        assert_eq!(ids[..3], [a1, a2, a3]);

        let mags: Vec<_> = catalog.author_magazines(author).iter().map(|m| m.id()).collect();
        assert_eq!(mags, vec![vogue, ad, elle]);

        assert_eq!(catalog.topic_areas(author), vec!["Fashion", "Architecture"]);
    }

    #[test]
    fn test_author_without_articles() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Idle").unwrap();

        assert!(catalog.author_articles(author).is_empty());
        assert!(catalog.author_magazines(author).is_empty());
        assert!(catalog.topic_areas(author).is_empty());
    }

    #[test]
    fn test_magazine_queries() {
        let mut catalog = Catalog::new();
        let alice = catalog.create_author("Alice").unwrap();
        let bob = catalog.create_author("Bob").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

        catalog.create_article(bob, vogue, "First by Bob").unwrap();
        catalog.create_article(alice, vogue, "First by Alice").unwrap();
        catalog.create_article(alice, vogue, "Second by Alice").unwrap();

        assert_eq!(names(&catalog.contributors(vogue)), vec!["Bob", "Alice"]);
        assert_eq!(
            catalog.article_titles(vogue),
            vec!["First by Bob", "First by Alice", "Second by Alice"]
        );
        // Exactly two is not enough
        assert!(catalog.contributing_authors(vogue).is_empty());

        catalog.create_article(alice, vogue, "Third by Alice").unwrap();
        assert_eq!(names(&catalog.contributing_authors(vogue)), vec!["Alice"]);
    }

    #[test]
    fn test_magazine_without_articles() {
        let mut catalog = Catalog::new();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

        assert!(catalog.magazine_articles(vogue).is_empty());
        assert!(catalog.contributors(vogue).is_empty());
        assert!(catalog.article_titles(vogue).is_empty());
        assert!(catalog.contributing_authors(vogue).is_empty());
    }

    #[test]
    fn test_top_publisher() {
        let mut catalog = Catalog::new();
        assert!(catalog.top_publisher().is_none());

        let author = catalog.create_author("Writer").unwrap();
        let small = catalog.create_magazine("Small", "News").unwrap();
        let big = catalog.create_magazine("Big", "News").unwrap();

        for i in 0..3 {
            catalog.create_article(author, small, format!("Small story {}", i)).unwrap();
        }
        for i in 0..5 {
            catalog.create_article(author, big, format!("Big story {}", i)).unwrap();
        }

        assert_eq!(catalog.top_publisher().unwrap().id(), big);
    }

    #[test]
    fn test_top_publisher_tie_goes_to_first_seen() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Writer").unwrap();
        let first = catalog.create_magazine("First", "News").unwrap();
        let second = catalog.create_magazine("Second", "News").unwrap();

        // `second` shows up in the registry first
        catalog.create_article(author, second, "Story one").unwrap();
        catalog.create_article(author, first, "Story two").unwrap();
        catalog.create_article(author, first, "Story three").unwrap();
        catalog.create_article(author, second, "Story four").unwrap();

        assert_eq!(catalog.top_publisher().unwrap().id(), second);
    }

    #[test]
    fn test_top_publisher_ignores_magazines_without_articles() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Writer").unwrap();
        catalog.create_magazine("Unused", "News").unwrap();
        let used = catalog.create_magazine("Used", "News").unwrap();
        catalog.create_article(author, used, "Only story").unwrap();

        assert_eq!(catalog.top_publisher().unwrap().id(), used);
    }

    #[test]
    fn test_magazine_mutation() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Writer").unwrap();
        let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
        catalog.create_article(author, vogue, "Some story").unwrap();

        catalog.set_magazine_name(vogue, "Vogue Paris").unwrap();
        catalog.set_magazine_category(vogue, "Couture").unwrap();
        assert!(catalog.set_magazine_name(vogue, "V").is_err());
        assert_eq!(
            catalog.set_magazine_category(vogue, ""),
            Err(ValidationError::EmptyCategory)
        );

        let mag = catalog.magazine(vogue).unwrap();
        assert_eq!(mag.name(), "Vogue Paris");
        assert_eq!(mag.category(), "Couture");
        assert_eq!(catalog.topic_areas(author), vec!["Couture"]);

        let ghost = MagazineId::new(42);
        assert_eq!(
            catalog.set_magazine_name(ghost, "Ghost"),
            Err(ValidationError::UnknownMagazine(ghost))
        );
    }

    #[test]
    fn test_statistics() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.statistics(), CatalogStatistics::default());

        let a = catalog.create_author("A").unwrap();
        catalog.create_author("B").unwrap();
        let m = catalog.create_magazine("Mag", "News").unwrap();
        catalog.create_magazine("Other", "News").unwrap();
        catalog.create_article(a, m, "Story one").unwrap();
        catalog.create_article(a, m, "Story two").unwrap();

        let stats = catalog.statistics();
        assert_eq!(stats.author_count, 2);
        assert_eq!(stats.magazine_count, 2);
        assert_eq!(stats.article_count, 2);
        assert_eq!(stats.active_author_count, 1);
        assert_eq!(stats.active_magazine_count, 1);
    }

    #[test]
    fn test_custom_rules() {
        let config = CatalogConfig {
            rules: ValidationRules {
                title_max: 10,
                ..ValidationRules::default()
            },
        };
        let mut catalog = Catalog::with_config(config);
        let a = catalog.create_author("A").unwrap();
        let m = catalog.create_magazine("Mag", "News").unwrap();

        assert!(catalog.create_article(a, m, "Ten chars!").is_ok());
        assert!(catalog.create_article(a, m, "Eleven char").is_err());
        assert!(catalog.check_title("Eleven char").is_err());
        assert!(catalog.check_magazine_name("Mag").is_ok());
    }
}
