//! [`ActorEntity`] implementation for [`Product`].

use crate::error::ApiError;
use crate::model::{Product, ProductCreate, ProductFilter, ProductId, ProductSortField, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use std::cmp::Ordering;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type SortField = ProductSortField;
    type Context = ();
    type Error = ApiError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ApiError> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            stock: params.stock,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ApiError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        let category = filter
            .category
            .as_ref()
            .map_or(true, |wanted| self.category.to_lowercase() == wanted.to_lowercase());
        let above_min = filter.min_price.map_or(true, |min| self.price >= min);
        let below_max = filter.max_price.map_or(true, |max| self.price <= max);
        category && above_min && below_max
    }

    fn compare_by(&self, other: &Self, field: ProductSortField) -> Ordering {
        match field {
            ProductSortField::Name => self.name.cmp(&other.name),
            ProductSortField::Price => self.price.total_cmp(&other.price),
            ProductSortField::Stock => self.stock.cmp(&other.stock),
            ProductSortField::Category => self.category.cmp(&other.category),
            ProductSortField::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}
