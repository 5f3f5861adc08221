//! High-level client — `PokeshopClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::card::client::{Cards, Facets};
use crate::domain::card::query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::ShopError;
use crate::http::PokemonTcgHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::card::client::Cards as CardsClient;
pub use crate::domain::card::client::Facets as FacetsClient;

/// The primary entry point for catalog access.
///
/// Provides nested sub-client accessors: `client.cards()`, `client.facets()`.
#[derive(Clone)]
pub struct PokeshopClient {
    pub(crate) http: PokemonTcgHttp,
    /// Page size used by `cards().browse()` and new browse sessions.
    pub(crate) page_size: u32,
}

impl PokeshopClient {
    pub fn builder() -> PokeshopClientBuilder {
        PokeshopClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn cards(&self) -> Cards<'_> {
        Cards { client: self }
    }

    pub fn facets(&self) -> Facets<'_> {
        Facets { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Start a browse session using this client's page size.
    pub fn browse_session(&self) -> crate::domain::browse::BrowseSession {
        crate::domain::browse::BrowseSession::new(self.page_size)
    }

    /// Replace (or clear) the API key sent with every request.
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.http.set_api_key(key);
    }

    pub fn has_api_key(&self) -> bool {
        self.http.has_api_key()
    }
}


// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PokeshopClientBuilder {
    base_url: String,
    api_key: Option<String>,
    page_size: u32,
}

impl Default for PokeshopClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PokeshopClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Clamped to `1..=250`.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn build(self) -> Result<PokeshopClient, ShopError> {
        let http = PokemonTcgHttp::new(&self.base_url)?.with_api_key(self.api_key);
        Ok(PokeshopClient {
            http,
            page_size: self.page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = PokeshopClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "https://api.pokemontcg.io/v2");
        assert_eq!(client.page_size(), 20);
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_builder_overrides() {
        let client = PokeshopClient::builder()
            .base_url("http://localhost:8080/v2/")
            .api_key("k")
            .page_size(0)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v2");
        assert_eq!(client.page_size(), 1);
        assert!(client.has_api_key());
    }

    #[test]
    fn test_set_api_key_after_build() {
        let mut client = PokeshopClient::builder().build().unwrap();
        client.set_api_key(Some("k".into()));
        assert!(client.has_api_key());
        client.set_api_key(None);
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_browse_session_inherits_page_size() {
        let client = PokeshopClient::builder().page_size(50).build().unwrap();
        assert_eq!(client.browse_session().query().current_page_size(), 50);
    }
}
