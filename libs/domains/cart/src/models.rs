use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cart item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the repository on creation
    pub id: i64,
    /// Product name
    pub name: String,
    /// Unit price as an exact decimal (monetary comparisons must be exact)
    pub price: Decimal,
    /// Manufacturer name
    pub manufacturer: String,
}

impl Item {
    /// Create a draft item that has not been persisted yet.
    ///
    /// The id stays zero until the repository assigns one.
    pub fn new(name: String, price: Decimal, manufacturer: String) -> Self {
        Self {
            id: 0,
            name,
            price,
            manufacturer,
        }
    }

    /// Whether the item carries a repository-assigned id
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
