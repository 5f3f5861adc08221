//! Wire types for catalog responses (REST).

use super::Card;
use serde::{Deserialize, Serialize};

/// `GET /cards` — one page of search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardsResponse {
    pub data: Vec<Card>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub count: u32,
    pub total_count: u32,
}

/// `GET /cards/{id}` — a single card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardResponse {
    pub data: Card,
}

/// `GET /types`, `GET /rarities` — a flat vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValuesResponse {
    pub data: Vec<String>,
}

/// Raw set as returned by `GET /sets`. Only the fields the storefront reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetResponse {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printed_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// `GET /sets` — all sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetsResponse {
    pub data: Vec<SetResponse>,
}
