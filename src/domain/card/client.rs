//! Cards and facets sub-clients — search, lookup, facet vocabulary.

use crate::client::PokeshopClient;
use crate::domain::browse::BrowseSession;
use crate::domain::card::query::CardQuery;
use crate::domain::card::{Card, CardPage, FilterOptions};
use crate::error::ShopError;

/// Sub-client for card queries.
pub struct Cards<'a> {
    pub(crate) client: &'a PokeshopClient,
}

impl<'a> Cards<'a> {
    /// Fetch one page of cards matching `query`.
    pub async fn search(&self, query: &CardQuery) -> Result<CardPage, ShopError> {
        let resp = self.client.http.get_cards(query).await?;
        Ok(CardPage::from_response(
            resp,
            query.current_page(),
            query.current_page_size(),
        ))
    }

    /// Browse all cards, unfiltered.
    pub async fn browse(&self, page: u32) -> Result<CardPage, ShopError> {
        let query = CardQuery::new()
            .page(page)
            .page_size(self.client.page_size);
        self.search(&query).await
    }

    /// Fetch a single card by id.
    pub async fn get(&self, card_id: &str) -> Result<Card, ShopError> {
        let card_id = card_id.trim();
        if card_id.is_empty() {
            return Err(ShopError::Validation("card id must not be empty".to_string()));
        }
        Ok(self.client.http.get_card(card_id).await?.data)
    }

    /// Run the session's current query and hand the result back to it.
    ///
    /// Returns `true` if the session accepted the response. A response is
    /// rejected when a newer request was issued on the session meanwhile.
    pub async fn refresh(&self, session: &mut BrowseSession) -> bool {
        let (ticket, query) = session.begin_request();
        let result = self.search(&query).await;
        session.complete(ticket, result)
    }
}

/// Sub-client for the facet vocabulary (types, rarities, sets).
pub struct Facets<'a> {
    pub(crate) client: &'a PokeshopClient,
}

impl<'a> Facets<'a> {
    /// Fetch all three vocabularies concurrently.
    pub async fn all(&self) -> Result<FilterOptions, ShopError> {
        let http = &self.client.http;
        let (types, rarities, sets) =
            futures_util::try_join!(http.get_types(), http.get_rarities(), http.get_sets())?;
        Ok(FilterOptions::from_responses(types, rarities, sets))
    }

    /// Like [`Facets::all`], but a failure yields empty options.
    ///
    /// Filters then simply offer nothing to select.
    pub async fn all_or_default(&self) -> FilterOptions {
        match self.all().await {
            Ok(options) => options,
            Err(e) => {
                tracing::error!("Failed to load filter options: {}", e);
                FilterOptions::default()
            }
        }
    }

    pub async fn types(&self) -> Result<Vec<String>, ShopError> {
        Ok(self.client.http.get_types().await?.data)
    }

    pub async fn rarities(&self) -> Result<Vec<String>, ShopError> {
        Ok(self.client.http.get_rarities().await?.data)
    }

    pub async fn sets(&self) -> Result<Vec<crate::domain::card::SetOption>, ShopError> {
        let resp = self.client.http.get_sets().await?;
        Ok(resp.data.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_rejects_empty_id() {
        let client = PokeshopClient::builder().build().unwrap();
        let err = client.cards().get("  ").await.unwrap_err();
        assert!(matches!(err, ShopError::Validation(_)));
    }
}
