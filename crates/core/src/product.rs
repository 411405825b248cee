//! Catalog product types

use serde::{Deserialize, Serialize};

/// Minimal product shape the recommendation engine works with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub title: String,
    pub description: String,
    pub product_type: String,
    pub price: f64,
}

/// A product plus the score the recommendation engine assigned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub recommendation_score: u32,
}
