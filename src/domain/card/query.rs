//! Catalog query construction — search term + facet filters → `q` string.

use serde::{Deserialize, Serialize};

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size the catalog accepts.
pub const MAX_PAGE_SIZE: u32 = 250;

// ─── Facet ───────────────────────────────────────────────────────────────────

/// A filterable card attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Types,
    Rarities,
    Sets,
}

impl Facet {
    /// The catalog query field this facet filters on.
    pub fn field(&self) -> &'static str {
        match self {
            Facet::Types => "types",
            Facet::Rarities => "rarity",
            Facet::Sets => "set.id",
        }
    }
}

// ─── CardFilters ─────────────────────────────────────────────────────────────

/// Selected facet values. An empty list places no constraint on that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFilters {
    pub types: Vec<String>,
    pub rarities: Vec<String>,
    pub sets: Vec<String>,
}

impl CardFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Types => &self.types,
            Facet::Rarities => &self.rarities,
            Facet::Sets => &self.sets,
        }
    }

    fn values_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Types => &mut self.types,
            Facet::Rarities => &mut self.rarities,
            Facet::Sets => &mut self.sets,
        }
    }

    /// Select `value` if unselected, deselect it otherwise.
    ///
    /// Returns `true` if the value is selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let values = self.values_mut(facet);
        match values.iter().position(|v| v == value) {
            Some(index) => {
                values.remove(index);
                false
            }
            None => {
                values.push(value.to_string());
                true
            }
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.values(facet).iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.rarities.is_empty() && self.sets.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.rarities.clear();
        self.sets.clear();
    }
}

// ─── Query string ────────────────────────────────────────────────────────────

/// Build the catalog `q` parameter.
///
/// The search term becomes a wildcard substring match on the card name. Each
/// non-empty facet is AND-ed in as an OR of its selected values. No term and
/// no filters yields an empty string (browse-all).
pub fn build_query(search: &str, filters: &CardFilters) -> String {
    let mut clauses: Vec<String> = Vec::new();

    let term: String = search.trim().chars().filter(|c| *c != '"').collect();
    if !term.is_empty() {
        clauses.push(format!("name:\"*{}*\"", term));
    }

    for facet in [Facet::Types, Facet::Rarities, Facet::Sets] {
        if let Some(clause) = facet_clause(facet, filters.values(facet)) {
            clauses.push(clause);
        }
    }

    clauses.join(" AND ")
}

fn facet_clause(facet: Facet, values: &[String]) -> Option<String> {
    let terms: Vec<String> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| format!("{}:{}", facet.field(), quote_value(v)))
        .collect();

    match terms.len() {
        0 => None,
        1 => terms.into_iter().next(),
        _ => Some(format!("({})", terms.join(" OR "))),
    }
}

fn quote_value(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value.replace('"', ""))
    } else {
        value.to_string()
    }
}

// ─── CardQuery ───────────────────────────────────────────────────────────────

/// A complete `/cards` request: paging, search term and filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    page: u32,
    page_size: u32,
    pub search: String,
    pub filters: CardFilters,
}

impl Default for CardQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            filters: CardFilters::default(),
        }
    }
}

impl CardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based page; zero is clamped to 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Clamped to `1..=MAX_PAGE_SIZE`.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn filters(mut self, filters: CardFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn current_page_size(&self) -> u32 {
        self.page_size
    }

    /// The `q` parameter for this query.
    pub fn q(&self) -> String {
        build_query(&self.search, &self.filters)
    }

    /// URL query string (without the leading `?`). `q` is omitted when empty.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("page={}", self.page),
            format!("pageSize={}", self.page_size),
        ];
        let q = self.q();
        if !q.is_empty() {
            params.push(format!("q={}", urlencoding::encode(&q)));
        }
        params.join("&")
    }
}
