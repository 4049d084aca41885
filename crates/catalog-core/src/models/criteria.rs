//! Listing criteria and their validation.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

/// Exact-match reference to a brand, model or space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(i64),
    Name(String),
}

impl FromStr for EntityRef {
    type Err = Infallible;

    /// Integers are ids; anything else is a display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<i64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(trimmed.to_string()),
        })
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for EntityRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Filters and window for a product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogCriteria {
    /// 1-indexed.
    pub page: i64,
    pub limit: i64,
    pub brand: Option<EntityRef>,
    pub model: Option<EntityRef>,
    pub space: Option<EntityRef>,
    /// Case-insensitive substring of the product name.
    pub name: Option<String>,
}

impl CatalogCriteria {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            ..Default::default()
        }
    }

    pub fn brand(mut self, brand: impl Into<EntityRef>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn model(mut self, model: impl Into<EntityRef>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn space(mut self, space: impl Into<EntityRef>) -> Self {
        self.space = Some(space.into());
        self
    }

    pub fn name_contains(mut self, fragment: impl Into<String>) -> Self {
        self.name = Some(fragment.into());
        self
    }

    /// The name filter, or `None` when absent or blank.
    pub fn name_substring(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Validate page and limit, producing the window to fetch.
    pub fn window(&self, max_limit: i64) -> CatalogResult<PageWindow> {
        if self.page <= 0 {
            return Err(CatalogError::InvalidArgument(format!(
                "page must be positive, got {}",
                self.page
            )));
        }
        if self.limit <= 0 {
            return Err(CatalogError::InvalidArgument(format!(
                "limit must be positive, got {}",
                self.limit
            )));
        }
        if self.limit > max_limit {
            return Err(CatalogError::InvalidArgument(format!(
                "limit {} exceeds maximum {max_limit}",
                self.limit
            )));
        }
        let page = u32::try_from(self.page).map_err(|_| {
            CatalogError::InvalidArgument(format!("page {} out of range", self.page))
        })?;
        let limit = u32::try_from(self.limit).map_err(|_| {
            CatalogError::InvalidArgument(format!("limit {} out of range", self.limit))
        })?;
        Ok(PageWindow { page, limit })
    }
}

/// A validated page request. Both fields are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub limit: u32,
}

impl PageWindow {
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ref_parses_ids_and_names() {
        assert_eq!("42".parse::<EntityRef>().unwrap(), EntityRef::Id(42));
        assert_eq!(
            " Acme ".parse::<EntityRef>().unwrap(),
            EntityRef::Name("Acme".into())
        );
    }

    #[test]
    fn window_rejects_non_positive_page_and_limit() {
        for (page, limit) in [(0, 10), (-1, 10), (1, 0), (1, -5)] {
            let err = CatalogCriteria::new(page, limit).window(100).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidArgument(_)), "{page}/{limit}");
        }
    }

    #[test]
    fn window_rejects_limit_above_max() {
        let err = CatalogCriteria::new(1, 101).window(100).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument(_)));
    }

    #[test]
    fn window_offset_is_zero_based() {
        let w = CatalogCriteria::new(3, 25).window(100).unwrap();
        assert_eq!(w.offset(), 50);
        assert_eq!(CatalogCriteria::new(1, 25).window(100).unwrap().offset(), 0);
    }

    #[test]
    fn blank_name_filter_is_absent() {
        assert_eq!(CatalogCriteria::new(1, 1).name_contains("  ").name_substring(), None);
        assert_eq!(
            CatalogCriteria::new(1, 1).name_contains(" sofa ").name_substring(),
            Some("sofa")
        );
    }
}
