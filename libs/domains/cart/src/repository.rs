use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CartError, CartResult};
use crate::models::Item;

/// Repository trait for cart item persistence
///
/// This trait defines the data access interface for cart items.
/// Implementations can use different storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// List up to `limit` items; ordering is implementation-defined
    async fn get_items(&self, limit: i64) -> CartResult<Vec<Item>>;

    /// Get an item by id
    async fn get_item_by_id(&self, id: i64) -> CartResult<Item>;

    /// Persist a new item and return the stored representation with its
    /// assigned id
    async fn add_item(&self, item: Item) -> CartResult<Item>;
}

/// In-memory implementation of CartRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCartRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    items: BTreeMap<i64, Item>,
    next_id: i64,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_items(&self, limit: i64) -> CartResult<Vec<Item>> {
        let store = self.inner.read().await;

        // Non-positive limits yield an empty listing
        let limit = usize::try_from(limit).unwrap_or(0);
        let items = store.items.values().take(limit).cloned().collect();

        Ok(items)
    }

    async fn get_item_by_id(&self, id: i64) -> CartResult<Item> {
        let store = self.inner.read().await;

        store
            .items
            .get(&id)
            .cloned()
            .ok_or(CartError::NotFound(id))
    }

    async fn add_item(&self, item: Item) -> CartResult<Item> {
        let mut store = self.inner.write().await;

        store.next_id += 1;
        let stored = Item {
            id: store.next_id,
            ..item
        };
        store.items.insert(stored.id, stored.clone());

        tracing::info!(item_id = stored.id, name = %stored.name, "Added cart item");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(name: &str, price: i64, manufacturer: &str) -> Item {
        Item::new(name.to_string(), Decimal::from(price), manufacturer.to_string())
    }

    #[tokio::test]
    async fn test_add_and_get_item() {
        let repo = InMemoryCartRepository::new();

        let created = repo
            .add_item(item("Turntable", 230, "Audio-Technica"))
            .await
            .unwrap();
        assert!(created.is_persisted());

        let fetched = repo.get_item_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let repo = InMemoryCartRepository::new();

        let first = repo.add_item(item("Kettle", 120, "Bodum")).await.unwrap();
        let second = repo.add_item(item("Grinder", 99, "Baratza")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_items_respects_limit() {
        let repo = InMemoryCartRepository::new();

        for i in 0..5 {
            repo.add_item(item(&format!("Item {}", i), 100 + i, "Acme"))
                .await
                .unwrap();
        }

        let listed = repo.get_items(3).await.unwrap();
        assert_eq!(listed.len(), 3);

        let all = repo.get_items(10).await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_get_items_with_non_positive_limit_is_empty() {
        let repo = InMemoryCartRepository::new();
        repo.add_item(item("Lamp", 150, "Ikea")).await.unwrap();

        assert!(repo.get_items(0).await.unwrap().is_empty());
        assert!(repo.get_items(-1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let repo = InMemoryCartRepository::new();

        let result = repo.get_item_by_id(42).await;
        assert!(matches!(result, Err(CartError::NotFound(42))));
    }
}
