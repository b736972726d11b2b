//! The cart manager.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::{CartError, KeyValueStore};
use crate::config::CartConfig;
use crate::model::{CartItem, CartLine, CartSummary, CustomerInfo, Lesson, OrderRequest};

/// Ordered collection of cart items backed by a [`KeyValueStore`].
///
/// # Persistence
/// The cart is read from `storage_key` once in [`Cart::load`] and written back
/// in full at the end of every mutating method. Storage failures are logged
/// and otherwise ignored; the in-memory state stays authoritative.
///
/// # Example
/// ```
/// use course_cart::cart::{Cart, MemoryStore};
/// use course_cart::config::CartConfig;
/// use course_cart::model::Lesson;
///
/// let mut cart = Cart::load(MemoryStore::new(), CartConfig::default(), "cart");
/// let lesson = Lesson::new("l1", "Music", "Hendon", 80.0, 5);
/// cart.add(&lesson, Some(2)).unwrap();
/// assert_eq!(cart.total(), 160.0);
/// ```
pub struct Cart<S: KeyValueStore> {
    items: Vec<CartItem>,
    store: S,
    config: CartConfig,
    storage_key: String,
}

impl<S: KeyValueStore> Cart<S> {
    /// Creates a cart and rehydrates it from `store`.
    pub fn load(store: S, config: CartConfig, storage_key: impl Into<String>) -> Self {
        let mut cart = Self {
            items: Vec::new(),
            store,
            config,
            storage_key: storage_key.into(),
        };
        cart.reload();
        cart
    }

    /// Replaces the in-memory items with whatever the store holds.
    ///
    /// Unreadable or corrupt data leaves the cart empty. Stored entries that
    /// break the cart invariants (duplicate id, quantity out of bounds) are
    /// dropped.
    pub fn reload(&mut self) {
        self.items = match self.store.get_item(&self.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => self.retain_valid(items),
                Err(e) => {
                    warn!(key = %self.storage_key, error = %e, "Failed to parse stored cart");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Failed to load cart from storage");
                Vec::new()
            }
        };
        debug!(key = %self.storage_key, size = self.items.len(), "Cart loaded");
    }

    fn retain_valid(&self, items: Vec<CartItem>) -> Vec<CartItem> {
        let mut seen = HashSet::new();
        let before = items.len();
        let kept: Vec<CartItem> = items
            .into_iter()
            .filter(|item| self.config.contains(item.quantity) && seen.insert(item.id.clone()))
            .collect();
        if kept.len() != before {
            warn!(dropped = before - kept.len(), "Dropped invalid stored cart entries");
        }
        kept
    }

    /// Writes the full item list to the store.
    pub fn save(&mut self) {
        let serialized = match serde_json::to_string(&self.items) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.store.set_item(&self.storage_key, &serialized) {
            warn!(key = %self.storage_key, error = %e, "Failed to save cart to storage");
        }
    }

    fn check_range(&self, quantity: u32) -> Result<(), CartError> {
        if self.config.contains(quantity) {
            Ok(())
        } else {
            Err(CartError::QuantityOutOfRange {
                min: self.config.min_quantity,
                max: self.config.max_quantity,
            })
        }
    }

    // --- Mutations ---

    /// Adds `quantity` (default 1) of `lesson`, merging with an existing entry.
    /// A merge also refreshes the entry's recorded capacity from `lesson`.
    ///
    /// # Errors
    /// - [`CartError::InvalidLesson`] if the lesson id is blank
    /// - [`CartError::QuantityOutOfRange`] if `quantity` is outside the bounds
    /// - [`CartError::MaxQuantityExceeded`] if the merged quantity would pass the maximum
    pub fn add(&mut self, lesson: &Lesson, quantity: Option<u32>) -> Result<(), CartError> {
        let quantity = quantity.unwrap_or(1);
        debug!(id = %lesson.id, quantity, "Add");

        let result = self.try_add(lesson, quantity);
        if let Err(e) = &result {
            warn!(id = %lesson.id, error = %e, "Failed to add to cart");
        }
        result
    }

    fn try_add(&mut self, lesson: &Lesson, quantity: u32) -> Result<(), CartError> {
        if lesson.id.trim().is_empty() {
            return Err(CartError::InvalidLesson);
        }
        self.check_range(quantity)?;

        let max = self.config.max_quantity;
        match self.items.iter_mut().find(|item| item.id == lesson.id) {
            Some(existing) => {
                let merged = existing
                    .quantity
                    .checked_add(quantity)
                    .filter(|merged| *merged <= max)
                    .ok_or(CartError::MaxQuantityExceeded { max })?;
                existing.quantity = merged;
                existing.spaces = Some(lesson.spaces);
                info!(id = %lesson.id, quantity = merged, "Quantity increased");
            }
            None => {
                self.items.push(CartItem::from_lesson(lesson, quantity));
                info!(id = %lesson.id, quantity, size = self.items.len(), "Added");
            }
        }
        self.save();
        Ok(())
    }

    /// Removes the entry for `lesson_id`. Returns `false` if it was absent.
    pub fn remove(&mut self, lesson_id: &str) -> bool {
        match self.items.iter().position(|item| item.id == lesson_id) {
            Some(index) => {
                self.items.remove(index);
                info!(id = %lesson_id, size = self.items.len(), "Removed");
                self.save();
                true
            }
            None => {
                debug!(id = %lesson_id, "Remove: not in cart");
                false
            }
        }
    }

    /// Sets the quantity for `lesson_id`.
    ///
    /// The bounds check runs first, so an out-of-range value fails even for an
    /// absent id. Returns `Ok(false)` if the id is not in the cart.
    pub fn update_quantity(&mut self, lesson_id: &str, quantity: u32) -> Result<bool, CartError> {
        if let Err(e) = self.check_range(quantity) {
            warn!(id = %lesson_id, quantity, error = %e, "Failed to update quantity");
            return Err(e);
        }
        match self.items.iter_mut().find(|item| item.id == lesson_id) {
            Some(item) => {
                item.quantity = quantity;
                info!(id = %lesson_id, quantity, "Quantity updated");
                self.save();
                Ok(true)
            }
            None => {
                debug!(id = %lesson_id, "Update: not in cart");
                Ok(false)
            }
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        let size = self.items.len();
        self.items.clear();
        info!(removed = size, "Cleared");
        self.save();
    }

    // --- Queries ---

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn contains(&self, lesson_id: &str) -> bool {
        self.items.iter().any(|item| item.id == lesson_id)
    }

    /// Quantity held for `lesson_id`, or 0.
    pub fn quantity_of(&self, lesson_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == lesson_id)
            .map_or(0, |item| item.quantity)
    }

    /// Sum of quantities across all entries.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price * quantity` across all entries.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.items.iter().map(CartLine::from).collect()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            item_count: self.item_count(),
            total: self.total(),
            is_empty: self.is_empty(),
            items: self.lines(),
        }
    }

    /// The items as a JSON array, the shape the cart validator inspects.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.items).unwrap_or_else(|_| serde_json::Value::Array(Vec::new()))
    }

    /// Builds the order payload from the current contents, in cart order.
    pub fn prepare_order(&self, customer: &CustomerInfo) -> Result<OrderRequest, CartError> {
        if self.is_empty() {
            return Err(CartError::EmptyCart);
        }
        Ok(OrderRequest {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            lesson_ids: self.items.iter().map(|item| item.id.clone()).collect(),
            num_spaces: self.items.iter().map(|item| item.quantity).collect(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the cart and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }
}
