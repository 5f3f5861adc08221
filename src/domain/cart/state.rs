//! Cart state and its reducer.
//!
//! Totals are a pure function of the lines. The only way to build a
//! `CartState` is from a line list, which recomputes them.

use super::{CartAction, CartLine};
use crate::domain::card::Card;
use crate::shared::CardId;
use rust_decimal::Decimal;
use serde::Serialize;

/// Ordered cart lines (insertion order, unique by card id) plus derived totals.
///
/// Serializes as `{"items": [...], "totalItems": n, "totalPrice": n}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartLine>,
    total_items: u64,
    #[serde(with = "rust_decimal::serde::float")]
    total_price: Decimal,
}

impl CartState {
    /// The canonical empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_lines(items: Vec<CartLine>) -> Self {
        let (total_items, total_price) = items.iter().fold(
            (0u64, Decimal::ZERO),
            |(count, price), line| (count + u64::from(line.quantity), price + line.subtotal()),
        );
        Self {
            items,
            total_items,
            total_price,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn line(&self, id: &CardId) -> Option<&CartLine> {
        self.items.iter().find(|line| &line.card.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.line(id).is_some()
    }

    pub fn quantity_of(&self, id: &CardId) -> u32 {
        self.line(id).map(|line| line.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Existing id: quantity + 1, stored card kept as first added.
    /// New id: appended with quantity 1.
    pub fn add(&self, card: Card) -> Self {
        let mut items = self.items.clone();
        match items.iter_mut().find(|line| line.card.id == card.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => items.push(CartLine { card, quantity: 1 }),
        }
        Self::from_lines(items)
    }

    /// Drop the line for `id`. Absent ids leave the lines untouched.
    pub fn remove(&self, id: &CardId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|line| &line.card.id != id)
            .cloned()
            .collect();
        Self::from_lines(items)
    }

    /// `quantity <= 0` removes the line. Otherwise sets the quantity of an
    /// existing line (saturating at `u32::MAX`); absent ids add nothing.
    pub fn update_quantity(&self, id: &CardId, quantity: i64) -> Self {
        if quantity <= 0 {
            return self.remove(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let items = self
            .items
            .iter()
            .map(|line| {
                if &line.card.id == id {
                    CartLine {
                        card: line.card.clone(),
                        quantity,
                    }
                } else {
                    line.clone()
                }
            })
            .collect();
        Self::from_lines(items)
    }

    pub fn clear(&self) -> Self {
        Self::empty()
    }
}

/// Apply one action to `state`, producing the next state.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::Add(card) => state.add(card),
        CartAction::Remove(id) => state.remove(&id),
        CartAction::UpdateQuantity { id, quantity } => state.update_quantity(&id, quantity),
        CartAction::Clear => state.clear(),
    }
}
