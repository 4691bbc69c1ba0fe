//! # Product Client

use crate::error::ApiError;
use crate::model::Product;
use crate::resource::Resource;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ApiError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ApiError {
        ApiError::from_framework(Product::KIND, e)
    }
}
