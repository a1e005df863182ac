//! Cart Domain
//!
//! This module provides the domain implementation for a shopping cart: a
//! validating service over a pluggable persistence abstraction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_cart::{repository::InMemoryCartRepository, service::CartService};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = InMemoryCartRepository::new();
//! let service = CartService::new(repository);
//!
//! let stored = service
//!     .add_cart_item(
//!         "Espresso Machine".to_string(),
//!         Decimal::from(250),
//!         "Rancilio".to_string(),
//!     )
//!     .await?;
//! assert_ne!(stored.id, 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CartError, CartResult};
pub use models::Item;
pub use repository::{CartRepository, InMemoryCartRepository};
pub use service::{CartConfig, CartService, DEFAULT_MINIMUM_ITEM_PRICE};
