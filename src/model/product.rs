use super::resource_id;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

resource_id!(
    /// Identifier of a [`Product`].
    ProductId
);

pub const DEFAULT_CATEGORY: &str = "general";

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new product. Defaults are already filled in.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            category: DEFAULT_CATEGORY.to_string(),
            stock: 0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock: Option<u32>,
}

/// Listing predicates; bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    Name,
    Price,
    Stock,
    Category,
    CreatedAt,
}

impl FromStr for ProductSortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, ()> {
        match s {
            "name" => Ok(ProductSortField::Name),
            "price" => Ok(ProductSortField::Price),
            "stock" => Ok(ProductSortField::Stock),
            "category" => Ok(ProductSortField::Category),
            "createdAt" => Ok(ProductSortField::CreatedAt),
            _ => Err(()),
        }
    }
}
