//! Reference entities products point at: brands, models, spaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo_image: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    pub name: String,
    pub description: String,
    #[serde(alias = "logo_image")]
    pub logo_image: String,
    #[serde(alias = "is_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModel {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(alias = "is_active")]
    pub is_active: bool,
}

/// A physical or contextual category shared by many products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSpace {
    pub name: String,
    pub description: String,
    pub image: String,
}
