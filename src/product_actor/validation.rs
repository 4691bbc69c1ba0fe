//! Body and query-parameter rules for products.
//!
//! `name` and `price` are mandatory on create and replace; `description`, `category` and
//! `stock` default to `""`, `general` and `0` on create and are only changed when present.

use crate::error::ApiError;
use crate::model::{ProductCreate, ProductFilter, ProductUpdate, DEFAULT_CATEGORY};
use crate::resource::{param, QueryParams};
use crate::validation::{number_param, Fields};
use serde_json::Value;

pub fn validate_create(body: &Value) -> Result<ProductCreate, ApiError> {
    let update = validate_replace(body)?;
    Ok(ProductCreate {
        name: update.name.unwrap_or_default(),
        price: update.price.unwrap_or_default(),
        description: update.description.unwrap_or_default(),
        category: update
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        stock: update.stock.unwrap_or(0),
    })
}

pub fn validate_replace(body: &Value) -> Result<ProductUpdate, ApiError> {
    let fields = Fields::new(body)?;
    Ok(ProductUpdate {
        name: Some(fields.required_text("name")?),
        price: Some(fields.required_number("price")?),
        description: fields.free_text("description")?,
        category: fields.text("category")?,
        stock: fields.whole_number("stock")?,
    })
}

/// `category`, `minPrice` and `maxPrice`. Non-numeric bounds are rejected.
pub fn parse_filter(params: &QueryParams) -> Result<ProductFilter, ApiError> {
    Ok(ProductFilter {
        category: param(params, "category").map(str::to_string),
        min_price: param(params, "minPrice")
            .map(|raw| number_param("minPrice", raw))
            .transpose()?,
        max_price: param(params, "maxPrice")
            .map(|raw| number_param("maxPrice", raw))
            .transpose()?,
    })
}
