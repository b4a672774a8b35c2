use uuid::Uuid;

use super::errors::CartError;

/// Ordered sequence of product ids owned by one session.
///
/// The sequence is never deduplicated: adding the same product twice
/// records it twice. Ids are not checked against the catalog on add;
/// stale ids are dropped when the cart is resolved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Uuid>,
}

impl Cart {
    /// Empty cart, the state every session starts from.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Uuid>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Uuid] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Uuid> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a product id to the sequence.
    pub fn add(&mut self, product_id: Uuid) {
        self.items.push(product_id);
    }

    /// Removes the first occurrence of a product id.
    pub fn remove(&mut self, product_id: Uuid) -> Result<(), CartError> {
        let position = self
            .items
            .iter()
            .position(|id| *id == product_id)
            .ok_or(CartError::ItemNotInCart)?;
        self.items.remove(position);
        Ok(())
    }
}
