//! Cart store — reducer dispatch with snapshot persistence.

use super::state::{reduce, CartState};
use super::{CartAction, CartLine};
use crate::domain::card::Card;
use crate::error::ShopError;
use crate::shared::CardId;
use crate::storage::KeyValueStore;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Storage key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "pokemonCart";

/// A persisted cart as read back from storage.
///
/// Only `items` is read. Stored totals are ignored; replaying the lines
/// recomputes them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub items: Vec<SnapshotLine>,
}

/// One persisted line. Quantity is signed so that out-of-range values go
/// through the same `update_quantity` rules as live updates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotLine {
    pub card: Card,
    pub quantity: i64,
}

impl Snapshot {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Owns the live `CartState` and writes a snapshot after every transition.
pub struct CartStore {
    state: CartState,
    storage: Box<dyn KeyValueStore>,
    key: String,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// An empty cart over `storage`. Nothing is read.
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            state: CartState::empty(),
            storage: Box::new(storage),
            key: CART_STORAGE_KEY.to_string(),
        }
    }

    /// Use a different storage key (e.g. one cart per profile).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Open the cart persisted in `storage`, if any.
    ///
    /// Each stored line is replayed through `add` then `update_quantity`.
    /// A missing, unreadable or malformed snapshot yields an empty cart.
    pub fn restore(storage: impl KeyValueStore + 'static) -> Self {
        Self::new(storage).restored()
    }

    /// Like [`CartStore::restore`], under a custom key.
    pub fn restore_with_key(storage: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self::new(storage).with_key(key).restored()
    }

    fn restored(mut self) -> Self {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self,
            Err(e) => {
                tracing::warn!(key = %self.key, "Failed to read saved cart: {}", e);
                return self;
            }
        };

        let snapshot = match Snapshot::parse(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %self.key, "Discarding unreadable saved cart: {}", e);
                return self;
            }
        };

        for line in snapshot.items {
            let id = line.card.id.clone();
            self.dispatch(CartAction::Add(line.card));
            self.dispatch(CartAction::UpdateQuantity {
                id,
                quantity: line.quantity,
            });
        }

        tracing::debug!(
            lines = self.state.len(),
            total_items = self.state.total_items(),
            "Restored saved cart"
        );
        self
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Run `action` through the reducer, then persist the new state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let name = action.name();
        self.state = reduce(&self.state, action);
        tracing::trace!(
            action = name,
            lines = self.state.len(),
            total_items = self.state.total_items(),
            "Cart updated"
        );
        self.persist();
        &self.state
    }

    pub fn add(&mut self, card: Card) -> &CartState {
        self.dispatch(CartAction::Add(card))
    }

    pub fn remove(&mut self, id: &CardId) -> &CartState {
        self.dispatch(CartAction::Remove(id.clone()))
    }

    pub fn update_quantity(&mut self, id: &CardId, quantity: i64) -> &CartState {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.clone(),
            quantity,
        })
    }

    pub fn clear(&mut self) -> &CartState {
        self.dispatch(CartAction::Clear)
    }

    /// Increase a line by one. Absent ids are a no-op.
    pub fn increment(&mut self, id: &CardId) -> &CartState {
        let quantity = i64::from(self.state.quantity_of(id)) + 1;
        self.update_quantity(id, quantity)
    }

    /// Decrease a line by one; reaching zero removes it.
    pub fn decrement(&mut self, id: &CardId) -> &CartState {
        let quantity = i64::from(self.state.quantity_of(id)) - 1;
        self.update_quantity(id, quantity)
    }

    /// Write the current snapshot now, surfacing any failure.
    ///
    /// `dispatch` already saves after every transition; use this when the
    /// caller needs to know the write landed (e.g. before navigating away).
    pub fn flush(&mut self) -> Result<(), ShopError> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.flush() {
            tracing::warn!(key = %self.key, "Failed to save cart: {}", e);
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    pub fn line(&self, id: &CardId) -> Option<&CartLine> {
        self.state.line(id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.state.contains(id)
    }

    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }

    pub fn total_price(&self) -> Decimal {
        self.state.total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
