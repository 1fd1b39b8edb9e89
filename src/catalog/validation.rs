//! Input rules for entity fields
//!
//! Every constructor and setter goes through one of these checks before it
//! touches any state, so a rejected call leaves the catalog as it was.

use super::types::{AuthorId, MagazineId};
use crate::config::ValidationRules;
use thiserror::Error;

/// Rejection of malformed input at construction or mutation time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Author name must be a non-empty string")]
    EmptyAuthorName,

    #[error("Magazine name must be between {min} and {max} characters, got {len}")]
    MagazineNameLength { len: usize, min: usize, max: usize },

    #[error("Magazine category cannot be empty")]
    EmptyCategory,

    #[error("Article title must be between {min} and {max} characters, got {len}")]
    TitleLength { len: usize, min: usize, max: usize },

    #[error("Author {0} is not registered in this catalog")]
    UnknownAuthor(AuthorId),

    #[error("Magazine {0} is not registered in this catalog")]
    UnknownMagazine(MagazineId),
}

pub type CatalogResult<T> = Result<T, ValidationError>;

pub(crate) fn author_name(name: &str) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn magazine_name(name: &str, rules: &ValidationRules) -> CatalogResult<()> {
    let len = name.chars().count();
    if len < rules.magazine_name_min || len > rules.magazine_name_max {
        return Err(ValidationError::MagazineNameLength {
            len,
            min: rules.magazine_name_min,
            max: rules.magazine_name_max,
        });
    }
    Ok(())
}

pub(crate) fn category(category: &str) -> CatalogResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn title(title: &str, rules: &ValidationRules) -> CatalogResult<()> {
    let len = title.chars().count();
    if len < rules.title_min || len > rules.title_max {
        return Err(ValidationError::TitleLength {
            len,
            min: rules.title_min,
            max: rules.title_max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_name_rejects_blank() {
        assert_eq!(author_name(""), Err(ValidationError::EmptyAuthorName));
        assert_eq!(author_name(" \t\n"), Err(ValidationError::EmptyAuthorName));
        assert!(author_name(" x ").is_ok());
    }

    #[test]
    fn test_magazine_name_bounds() {
        let rules = ValidationRules::default();
        assert!(magazine_name("a", &rules).is_err());
        assert!(magazine_name("ab", &rules).is_ok());
        assert!(magazine_name(&"m".repeat(16), &rules).is_ok());
        assert_eq!(
            magazine_name(&"m".repeat(17), &rules),
            Err(ValidationError::MagazineNameLength { len: 17, min: 2, max: 16 })
        );
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let rules = ValidationRules::default();
        // 2 chars, 4 bytes
        assert!(magazine_name("éé", &rules).is_ok());
        // 16 chars, 48 bytes
        assert!(magazine_name(&"日".repeat(16), &rules).is_ok());
        assert!(title("ünïcö", &rules).is_ok());
    }

    #[test]
    fn test_category_rejects_blank() {
        assert_eq!(category("   "), Err(ValidationError::EmptyCategory));
        assert!(category("Fashion").is_ok());
    }

    #[test]
    fn test_title_bounds() {
        let rules = ValidationRules::default();
        assert!(title("abcd", &rules).is_err());
        assert!(title("abcde", &rules).is_ok());
        assert!(title(&"t".repeat(50), &rules).is_ok());
        assert_eq!(
            title(&"t".repeat(51), &rules),
            Err(ValidationError::TitleLength { len: 51, min: 5, max: 50 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::UnknownAuthor(AuthorId::new(3)).to_string(),
            "Author AuthorId(3) is not registered in this catalog"
        );
        assert_eq!(
            ValidationError::TitleLength { len: 4, min: 5, max: 50 }.to_string(),
            "Article title must be between 5 and 50 characters, got 4"
        );
    }
}
