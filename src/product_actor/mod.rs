//! # Product Actor
//!
//! Manages the product catalog. Listings can be narrowed by category and by an inclusive price
//! range, and sorted by name, price, stock, category or creation time.

pub mod entity;
pub mod validation;

use crate::clients::ProductClient;
use crate::error::ApiError;
use crate::model::{Product, ProductFilter, ProductId, ProductSortField};
use crate::resource::{self, QueryParams, Resource};
use resource_actor::{ResourceActor, Sort};
use serde_json::Value;

/// Creates a new Product actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, ProductClient::new(generic_client))
}

impl Resource for Product {
    const KIND: &'static str = "Product";

    fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
        resource::parse_id(Self::KIND, raw)
    }

    fn validate_create(body: &Value) -> Result<Self::Create, ApiError> {
        validation::validate_create(body)
    }

    fn validate_replace(body: &Value) -> Result<Self::Update, ApiError> {
        validation::validate_replace(body)
    }

    fn parse_filter(params: &QueryParams) -> Result<ProductFilter, ApiError> {
        validation::parse_filter(params)
    }

    fn parse_sort(params: &QueryParams) -> Option<Sort<ProductSortField>> {
        resource::sort_from(params)
    }
}
