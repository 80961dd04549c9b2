//! Explicit per-item draft quantities.
//!
//! The presentation side tracks a pending, not-yet-added quantity for each
//! menu item. Instead of hiding that in framework-managed widget state keyed
//! by a generated string, it is an explicit map keyed by `(category, item)`
//! that the caller owns and passes around.

use std::collections::HashMap;

/// Upper bound of the per-item quantity selector.
pub const MAX_DRAFT_QUANTITY: u32 = 10;

/// Pending quantities per `(category, item)`. Items not present count as 0.
#[derive(Debug, Clone, Default)]
pub struct DraftQuantities {
    drafts: HashMap<(String, String), u32>,
}

impl DraftQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pending quantity for one menu item, clamped to
    /// 0..=[`MAX_DRAFT_QUANTITY`].
    pub fn set(&mut self, category: &str, item: &str, quantity: u32) {
        self.drafts.insert(
            (category.to_string(), item.to_string()),
            quantity.min(MAX_DRAFT_QUANTITY),
        );
    }

    pub fn get(&self, category: &str, item: &str) -> u32 {
        self.drafts
            .get(&(category.to_string(), item.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Reverts the pending quantity to 0, as happens after a successful add.
    pub fn reset(&mut self, category: &str, item: &str) {
        self.drafts
            .remove(&(category.to_string(), item.to_string()));
    }
}
