//! Cart domain — lines, reducer, persistent store, provider slot.

pub mod provider;
pub mod state;
pub mod store;

use crate::domain::card::Card;
use crate::shared::CardId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use provider::{try_use_cart, use_cart, CartProvider, CartProviderGuard};
pub use state::{reduce, CartState};
pub use store::{CartStore, Snapshot, CART_STORAGE_KEY};

/// One cart entry: a distinct card and how many of it.
///
/// The card is the snapshot taken when the line was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub card: Card,
    pub quantity: u32,
}

impl CartLine {
    pub fn id(&self) -> &CardId {
        &self.card.id
    }

    pub fn unit_price(&self) -> Decimal {
        self.card.unit_price()
    }

    /// `unit_price × quantity`.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}

/// Cart mutations. Every state change goes through one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(Card),
    Remove(CardId),
    UpdateQuantity { id: CardId, quantity: i64 },
    Clear,
}

impl CartAction {
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add",
            CartAction::Remove(_) => "remove",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }
}
