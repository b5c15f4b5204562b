//! External collaborators consumed by the state layer.
//!
//! Both are black boxes: the core never knows how a checkout is submitted or
//! where products come from, only the shape of the answers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::cart::CartItems;
use crate::catalog::Catalog;
use crate::error::ApiError;

/// Answer from the checkout backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Whether the order was accepted.
    pub success: bool,
}

impl CheckoutResponse {
    /// An accepted checkout.
    pub fn accepted() -> Self {
        Self { success: true }
    }

    /// A checkout the backend declined.
    pub fn declined() -> Self {
        Self { success: false }
    }
}

/// Submits cart contents for checkout.
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    /// Submit `items`. Called exactly once per checkout attempt.
    async fn checkout(&self, items: &CartItems) -> Result<CheckoutResponse, ApiError>;
}

/// Fetches the product catalog.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// Fetch every product, keyed by id.
    async fn get_products(&self) -> Result<Catalog, ApiError>;
}

#[async_trait]
impl<T: CheckoutApi + ?Sized> CheckoutApi for std::sync::Arc<T> {
    async fn checkout(&self, items: &CartItems) -> Result<CheckoutResponse, ApiError> {
        (**self).checkout(items).await
    }
}

#[async_trait]
impl<T: ProductsApi + ?Sized> ProductsApi for std::sync::Arc<T> {
    async fn get_products(&self) -> Result<Catalog, ApiError> {
        (**self).get_products().await
    }
}
