//! Products and their nested view.

use serde::{Deserialize, Serialize};

use super::Space;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandSummary {
    pub id: i64,
    pub name: String,
}

/// A product with its model, optional brand, and linked spaces folded in.
///
/// `spaces` holds each space at most once, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub images: Vec<String>,
    pub model: ModelSummary,
    pub brand: Option<BrandSummary>,
    pub spaces: Vec<Space>,
}

/// Input for the catalog writer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(alias = "is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(alias = "model_id")]
    pub model_id: i64,
    #[serde(default, alias = "brand_id")]
    pub brand_id: Option<i64>,
    #[serde(default, alias = "spacesIds")]
    pub space_ids: Vec<i64>,
}

impl NewProduct {
    /// Space ids with repeats dropped, first occurrence kept.
    pub fn distinct_space_ids(&self) -> Vec<i64> {
        let mut seen = Vec::with_capacity(self.space_ids.len());
        for id in &self.space_ids {
            if !seen.contains(id) {
                seen.push(*id);
            }
        }
        seen
    }
}
