//! Magazine entity
//!
//! Name and category stay mutable for the whole lifetime of the magazine,
//! independent of how many articles already point at it. Both setters
//! validate first and only then replace the stored value.

use super::types::MagazineId;
use super::validation::{self, CatalogResult};
use crate::config::ValidationRules;
use serde::Serialize;

/// A publication that articles appear in
#[derive(Debug, Clone, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    pub(crate) fn new(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
        rules: &ValidationRules,
    ) -> CatalogResult<Self> {
        let name = name.into();
        let category = category.into();
        validation::magazine_name(&name, rules)?;
        validation::category(&category)?;
        Ok(Magazine { id, name, category })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the name, returning the previous one
    pub(crate) fn set_name(
        &mut self,
        name: impl Into<String>,
        rules: &ValidationRules,
    ) -> CatalogResult<String> {
        let name = name.into();
        validation::magazine_name(&name, rules)?;
        Ok(std::mem::replace(&mut self.name, name))
    }

    /// Replace the category, returning the previous one
    pub(crate) fn set_category(&mut self, category: impl Into<String>) -> CatalogResult<String> {
        let category = category.into();
        validation::category(&category)?;
        Ok(std::mem::replace(&mut self.category, category))
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Magazine {}

impl std::hash::Hash for Magazine {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
