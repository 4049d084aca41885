//! Row aggregation: flat product×space join rows → nested products.
//!
//! Products are kept in an index-based arena in first-seen order, keyed by
//! product id. Scalar fields come from the first row of each product; every
//! row may contribute one space, appended once per (product, space).

use rustc_hash::{FxHashMap, FxHashSet};

use catalog_core::errors::CatalogResult;
use catalog_core::models::{BrandSummary, ModelSummary, Product, Space};

/// One row of the product ⟕ link ⟕ space join.
///
/// The `space_*` fields are all `None` for a product with no spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinRow {
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    /// JSON array, as stored.
    pub images: String,
    pub model_id: i64,
    pub model_name: String,
    pub brand_id: Option<i64>,
    pub brand_name: Option<String>,
    pub space_id: Option<i64>,
    pub space_name: Option<String>,
    pub space_description: Option<String>,
    pub space_image: Option<String>,
}

#[derive(Debug, Default)]
pub struct RowAggregator {
    products: Vec<Product>,
    index: FxHashMap<i64, usize>,
    linked: FxHashSet<(i64, i64)>,
}

impl RowAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: JoinRow) -> CatalogResult<()> {
        let slot = match self.index.get(&row.product_id) {
            Some(&slot) => slot,
            None => {
                let product = Product {
                    id: row.product_id,
                    name: row.name,
                    description: row.description,
                    is_active: row.is_active,
                    images: serde_json::from_str(&row.images)?,
                    model: ModelSummary {
                        id: row.model_id,
                        name: row.model_name,
                    },
                    brand: row.brand_id.map(|id| BrandSummary {
                        id,
                        name: row.brand_name.unwrap_or_default(),
                    }),
                    spaces: Vec::new(),
                };
                self.products.push(product);
                let slot = self.products.len() - 1;
                self.index.insert(row.product_id, slot);
                slot
            }
        };

        if let Some(space_id) = row.space_id {
            if self.linked.insert((row.product_id, space_id)) {
                self.products[slot].spaces.push(Space {
                    id: space_id,
                    name: row.space_name.unwrap_or_default(),
                    description: row.space_description.unwrap_or_default(),
                    image: row.space_image.unwrap_or_default(),
                });
            }
        }
        Ok(())
    }

    /// Products in first-insertion order of their id.
    pub fn finish(self) -> Vec<Product> {
        self.products
    }
}

/// Fold a row stream into nested products.
pub fn aggregate(rows: impl IntoIterator<Item = JoinRow>) -> CatalogResult<Vec<Product>> {
    let mut aggregator = RowAggregator::new();
    for row in rows {
        aggregator.push(row)?;
    }
    Ok(aggregator.finish())
}
