//! Card domain — catalog cards, market prices, facets, queries.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod query;
pub mod wire;

use crate::shared::CardId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use query::{build_query, CardFilters, CardQuery, Facet};

// ─── Card ────────────────────────────────────────────────────────────────────

/// A catalog card.
///
/// Serializes in the catalog API's camelCase shape, which is also the shape
/// stored in cart snapshots. Only `id` is required on input; older snapshots
/// missing the other fields still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub supertype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtypes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default)]
    pub images: CardImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<CardMarket>,
    #[serde(default)]
    pub set: CardSet,
}

impl Card {
    /// Unit price under the storefront's fixed fallback order:
    /// average sell price, then trend price, then low price, else zero.
    pub fn unit_price(&self) -> Decimal {
        self.cardmarket
            .as_ref()
            .map(|m| m.prices.resolve())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn has_type(&self, ty: &str) -> bool {
        self.types
            .as_ref()
            .map(|types| types.iter().any(|t| t == ty))
            .unwrap_or(false)
    }
}

/// Card image URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardImages {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}

/// The set a card was printed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub total: u32,
}

/// Cardmarket listing block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub prices: MarketPrices,
}

/// The three market prices the storefront reads. Any may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrices {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub average_sell_price: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub trend_price: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub low_price: Option<Decimal>,
}

impl MarketPrices {
    /// First non-zero price in average → trend → low order, else zero.
    ///
    /// Cardmarket reports `0` for "no sales", so a zero counts as absent.
    pub fn resolve(&self) -> Decimal {
        [self.average_sell_price, self.trend_price, self.low_price]
            .into_iter()
            .flatten()
            .find(|price| !price.is_zero())
            .unwrap_or(Decimal::ZERO)
    }
}

// ─── Facets ──────────────────────────────────────────────────────────────────

/// A selectable set in the sets facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOption {
    pub id: String,
    pub name: String,
}

/// The full vocabulary of selectable facet values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub types: Vec<String>,
    pub rarities: Vec<String>,
    pub sets: Vec<SetOption>,
}

// ─── CardPage ────────────────────────────────────────────────────────────────

/// One page of catalog results with paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPage {
    pub cards: Vec<Card>,
    pub page: u32,
    pub page_size: u32,
    pub count: u32,
    pub total_count: u32,
    pub total_pages: u32,
}

/// `ceil(total_count / page_size)`; zero page size yields zero pages.
pub fn total_pages(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
