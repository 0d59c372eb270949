//! Item Payload Service - Builds the batch submitted to `sync_update`

use crate::domain::entities::{Item, ItemTemplate};

/// Stamps out numbered items from a shared template
#[derive(Debug, Clone, Default)]
pub struct ItemPayloadService {
    template: ItemTemplate,
}

impl ItemPayloadService {
    pub fn new(template: ItemTemplate) -> Self {
        Self { template }
    }

    /// Generate `count` items indexed from 1
    ///
    /// Only `external_id`, `title` and `description` vary between items.
    pub fn generate(&self, count: u32) -> Vec<Item> {
        (1..=count).map(|i| self.template.item_for(i)).collect()
    }
}
