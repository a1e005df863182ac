//! Cart Service - Business logic layer

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use crate::error::{CartError, CartResult};
use crate::models::Item;
use crate::repository::CartRepository;

/// Minimum price a cart item may carry, in the same currency unit as
/// [`Item::price`]
pub const DEFAULT_MINIMUM_ITEM_PRICE: i64 = 99;

/// Business-rule configuration for the cart service
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Inclusive lower bound for the price of a newly added item
    pub minimum_item_price: Decimal,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            minimum_item_price: Decimal::from(DEFAULT_MINIMUM_ITEM_PRICE),
        }
    }
}

/// Cart service providing business logic operations
///
/// The service layer validates input and orchestrates repository
/// operations. It holds no item state of its own; repository results and
/// errors pass through unchanged.
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
    config: CartConfig,
}

impl<R: CartRepository> CartService<R> {
    /// Create a new CartService with the given repository
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, CartConfig::default())
    }

    /// Create a CartService with a custom business-rule configuration
    pub fn with_config(repository: R, config: CartConfig) -> Self {
        Self {
            repository: Arc::new(repository),
            config,
        }
    }

    /// List cart items, bounded by `limit`
    #[instrument(skip(self))]
    pub async fn get_all_items(&self, limit: i64) -> CartResult<Vec<Item>> {
        self.repository.get_items(limit).await
    }

    /// Get a cart item by id
    #[instrument(skip(self))]
    pub async fn get_item_by_id(&self, id: i64) -> CartResult<Item> {
        self.repository.get_item_by_id(id).await
    }

    /// Add a new item to the cart
    ///
    /// The price must be no less than the configured minimum. The id of
    /// the returned item is assigned by the repository.
    #[instrument(skip(self))]
    pub async fn add_cart_item(
        &self,
        name: String,
        price: Decimal,
        manufacturer: String,
    ) -> CartResult<Item> {
        if price < self.config.minimum_item_price {
            return Err(CartError::BelowMinimum {
                field: "price",
                minimum: self.config.minimum_item_price,
            });
        }

        self.repository
            .add_item(Item::new(name, price, manufacturer))
            .await
    }
}

impl<R: CartRepository> Clone for CartService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: self.config.clone(),
        }
    }
}
