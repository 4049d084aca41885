//! Pagination calculator and the catalog page view.

use serde::{Deserialize, Serialize};

use super::{PageWindow, Product};

/// `ceil(total_items / limit)`; zero items means zero pages.
pub fn total_pages(total_items: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_items.div_ceil(u64::from(limit))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u64,
    pub total_pages: u64,
    pub limit: u32,
    pub page: u32,
}

impl PageMeta {
    /// `total_items` must come from the count query, never from the page length.
    pub fn new(window: PageWindow, total_items: u64) -> Self {
        Self {
            total_items,
            total_pages: total_pages(total_items, window.limit),
            limit: window.limit,
            page: window.page,
        }
    }
}

/// A bounded window of products plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub paginate: PageMeta,
    pub items: Vec<Product>,
}

impl CatalogPage {
    pub fn new(window: PageWindow, total_items: u64, items: Vec<Product>) -> Self {
        debug_assert!(items.len() <= window.limit as usize);
        Self {
            paginate: PageMeta::new(window, total_items),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partially_filled_last_page_counts() {
        assert_eq!(total_pages(3, 2), 2);
        assert_eq!(total_pages(4, 2), 2);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(1, 100), 1);
    }

    #[test]
    fn zero_items_zero_pages() {
        assert_eq!(total_pages(0, 20), 0);
        let page = CatalogPage::new(PageWindow { page: 1, limit: 20 }, 0, vec![]);
        assert!(page.is_empty());
        assert_eq!(page.paginate.total_pages, 0);
    }

    #[test]
    fn meta_serializes_camel_case() {
        let meta = PageMeta::new(PageWindow { page: 1, limit: 2 }, 3);
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json["totalItems"], 3);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["page"], 1);
    }
}
