//! Low-level HTTP client — `PokemonTcgHttp`.
//!
//! One method per catalog endpoint. Returns wire types; conversion to domain
//! types happens in the sub-clients. Every call is a single attempt.

use crate::domain::card::query::CardQuery;
use crate::domain::card::wire::{CardResponse, CardsResponse, FacetValuesResponse, SetsResponse};
use crate::error::HttpError;
use crate::network::API_KEY_HEADER;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Low-level HTTP client for the Pokémon TCG catalog API.
#[derive(Clone)]
pub struct PokemonTcgHttp {
    base_url: String,
    client: Client,
    /// Sent as `X-Api-Key` when set. Never exposed publicly.
    api_key: Option<String>,
}

impl PokemonTcgHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder().build()?,
            api_key: None,
        })
    }

    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn set_api_key(&mut self, key: Option<String>) {
        self.api_key = key;
    }

    pub(crate) fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    // ── Cards ────────────────────────────────────────────────────────────

    pub fn cards_url(&self, query: &CardQuery) -> String {
        format!("{}/cards?{}", self.base_url, query.to_query_string())
    }

    pub async fn get_cards(&self, query: &CardQuery) -> Result<CardsResponse, HttpError> {
        let url = self.cards_url(query);
        tracing::debug!(q = %query.q(), page = query.current_page(), "Fetching cards");
        let resp: CardsResponse = self.get(&url).await?;
        tracing::debug!(total_count = resp.total_count, count = resp.data.len(), "Cards fetched");
        Ok(resp)
    }

    pub async fn get_card(&self, card_id: &str) -> Result<CardResponse, HttpError> {
        let url = format!("{}/cards/{}", self.base_url, urlencoding::encode(card_id));
        self.get(&url).await
    }

    // ── Facets ───────────────────────────────────────────────────────────

    pub async fn get_types(&self) -> Result<FacetValuesResponse, HttpError> {
        let url = format!("{}/types", self.base_url);
        self.get(&url).await
    }

    pub async fn get_rarities(&self) -> Result<FacetValuesResponse, HttpError> {
        let url = format!("{}/rarities", self.base_url);
        self.get(&url).await
    }

    pub async fn get_sets(&self) -> Result<SetsResponse, HttpError> {
        let url = format!("{}/sets", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self.client.get(url);

        if let Some(key) = self.api_key.as_deref() {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let retry_after_ms = resp
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(retry_after_ms);
        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        tracing::debug!(status = status_code, "Request to {} failed", url);
        Err(status_error(status_code, body_text, retry_after_ms))
    }
}

/// `Retry-After` in delta-seconds, as milliseconds. Huge values saturate;
/// HTTP-date values are not parsed.
fn retry_after_ms(header: &str) -> Option<u64> {
    header
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

/// Map a non-success status to an `HttpError`.
fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        408 | 504 if body.is_empty() => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::query::CardFilters;

    #[test]
    fn test_cards_url_trims_trailing_slash() {
        let http = PokemonTcgHttp::new("https://api.pokemontcg.io/v2/").unwrap();
        assert_eq!(http.base_url(), "https://api.pokemontcg.io/v2");
        assert_eq!(
            http.cards_url(&CardQuery::new()),
            "https://api.pokemontcg.io/v2/cards?page=1&pageSize=20"
        );
    }

    #[test]
    fn test_cards_url_carries_filters() {
        let http = PokemonTcgHttp::new("https://api.pokemontcg.io/v2").unwrap();
        let mut filters = CardFilters::new();
        filters.sets.push("base1".into());
        let url = http.cards_url(&CardQuery::new().page(4).filters(filters));
        assert_eq!(
            url,
            "https://api.pokemontcg.io/v2/cards?page=4&pageSize=20&q=set.id%3Abase1"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(status_error(404, "gone".into(), None), HttpError::NotFound(b) if b == "gone"));
        assert!(matches!(
            status_error(429, String::new(), Some(2000)),
            HttpError::RateLimited { retry_after_ms: Some(2000) }
        ));
        assert!(matches!(status_error(400, "bad q".into(), None), HttpError::BadRequest(_)));
        assert!(matches!(status_error(504, String::new(), None), HttpError::Timeout));
        assert!(matches!(
            status_error(500, "boom".into(), None),
            HttpError::ServerError { status: 500, .. }
        ));
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(retry_after_ms("2"), Some(2000));
        assert_eq!(retry_after_ms(" 30 "), Some(30_000));
        assert_eq!(retry_after_ms("99999999999999999"), Some(u64::MAX));
        assert_eq!(retry_after_ms("Wed, 21 Oct 2015 07:28:00 GMT"), None);
        assert_eq!(retry_after_ms("-1"), None);
    }

    #[test]
    fn test_api_key_is_stored() {
        let mut http = PokemonTcgHttp::new("https://api.pokemontcg.io/v2").unwrap();
        assert!(!http.has_api_key());
        http.set_api_key(Some("secret".into()));
        assert!(http.has_api_key());
        assert!(!http.with_api_key(None).has_api_key());
    }
}
