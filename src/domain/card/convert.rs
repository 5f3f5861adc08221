//! Conversion: wire responses → domain types.

use super::wire;
use super::{total_pages, CardPage, FilterOptions, SetOption};

impl From<wire::SetResponse> for SetOption {
    fn from(source: wire::SetResponse) -> Self {
        Self {
            id: source.id,
            name: source.name,
        }
    }
}

impl CardPage {
    /// Build a page from a `/cards` response.
    ///
    /// Total pages are derived from the page size the query asked for.
    pub fn from_response(
        source: wire::CardsResponse,
        requested_page: u32,
        requested_page_size: u32,
    ) -> Self {
        let count = if source.count == 0 {
            source.data.len() as u32
        } else {
            source.count
        };
        let page = if source.page == 0 {
            requested_page
        } else {
            source.page
        };

        Self {
            total_pages: total_pages(source.total_count, requested_page_size),
            page,
            page_size: requested_page_size,
            count,
            total_count: source.total_count,
            cards: source.data,
        }
    }
}

impl FilterOptions {
    /// Assemble the facet vocabulary from the three facet responses.
    pub fn from_responses(
        types: wire::FacetValuesResponse,
        rarities: wire::FacetValuesResponse,
        sets: wire::SetsResponse,
    ) -> Self {
        Self {
            types: types.data,
            rarities: rarities.data,
            sets: sets.data.into_iter().map(SetOption::from).collect(),
        }
    }
}
