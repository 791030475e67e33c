//! Inventory pooled into pricing buckets

use storequote_types::InventoryRequest;

/// Furniture and appliances pooled by size class, boxes pooled into
/// luggage and packed boxes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PooledInventory {
    pub extra_large: u32,
    pub large: u32,
    pub medium: u32,
    pub small: u32,
    pub luggage: u32,
    pub boxes: u32,
}

impl PooledInventory {
    pub fn from_request(request: &InventoryRequest) -> Self {
        let items = request.furniture.pooled_with(&request.appliances);
        Self {
            extra_large: items.extra_large,
            large: items.large,
            medium: items.medium,
            small: items.small,
            luggage: request.boxes.luggage,
            boxes: request.boxes.packed_boxes(),
        }
    }

    /// Item count across all six buckets
    pub fn total_items(&self) -> u32 {
        [
            self.extra_large,
            self.large,
            self.medium,
            self.small,
            self.luggage,
            self.boxes,
        ]
        .iter()
        .fold(0u32, |acc, n| acc.saturating_add(*n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storequote_types::{BoxCounts, ItemCounts, StorageDuration};

    #[test]
    fn test_pooling_merges_furniture_and_appliances() {
        let request = InventoryRequest::new(StorageDuration::OneToThreeMonths)
            .with_furniture(ItemCounts::new(1, 2, 3, 4))
            .with_appliances(ItemCounts::new(1, 0, 1, 2))
            .with_boxes(BoxCounts::new(2, 5, 6, 7));
        let pooled = PooledInventory::from_request(&request);
        assert_eq!(
            pooled,
            PooledInventory {
                extra_large: 2,
                large: 2,
                medium: 4,
                small: 6,
                luggage: 2,
                boxes: 18,
            }
        );
        assert_eq!(pooled.total_items(), 34);
    }
}
