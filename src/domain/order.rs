use chrono::{DateTime, Utc};

use super::CatalogueItem;

/// One purchase event in a member's history
///
/// Holds a snapshot of the item as it was at order time, not a live
/// catalogue reference. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    item: CatalogueItem,
    quantity: u32,
    timestamp: DateTime<Utc>,
}

impl Order {
    pub fn new(item: CatalogueItem, quantity: u32, timestamp: DateTime<Utc>) -> Self {
        Self {
            item,
            quantity,
            timestamp,
        }
    }

    pub fn item(&self) -> &CatalogueItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
