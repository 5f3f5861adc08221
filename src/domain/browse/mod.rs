//! Browse domain — search/filter/page state driving catalog requests.
//!
//! `BrowseSession` is app-owned state. Every request it issues carries a
//! ticket; only the response for the newest ticket is applied, so a slow
//! response to an old search never overwrites a newer one.
//!
//! Typed search input is debounced: `set_search` only records the input and
//! hands back a `SearchTicket`. Once the input has been idle for
//! `SEARCH_DEBOUNCE`, `settle_search` applies it to the query.
//!
//! ```rust,ignore
//! let ticket = session.set_search("pika");
//! search_debounce().await;
//! if session.settle_search(ticket) {
//!     client.cards().refresh(&mut session).await;
//! }
//! ```

pub mod pagination;

use crate::domain::card::query::{CardFilters, CardQuery, Facet};
use crate::domain::card::CardPage;
use std::time::Duration;

pub use pagination::{page_links, PageLink};

/// Shown in place of results when a card load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load Pokémon cards. Please try again later.";

/// How long search input must stay unchanged before it is applied.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one issued catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Identifies one edit of the search input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

/// Wait out the search debounce window.
#[cfg(feature = "http")]
pub async fn search_debounce() {
    futures_timer::Delay::new(SEARCH_DEBOUNCE).await;
}

/// What the result area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    Idle,
    Loading,
    Loaded(CardPage),
    /// The single user-facing error message; no stale or partial cards.
    Failed(&'static str),
}

/// Current page, search term and selected facets.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    query: CardQuery,
    /// What the user has typed; applied to `query` once settled.
    search_input: String,
    search_edits: u64,
    total_pages: u32,
    latest: u64,
    status: LoadStatus,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(crate::domain::card::query::DEFAULT_PAGE_SIZE)
    }
}

impl BrowseSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: CardQuery::new().page_size(page_size),
            search_input: String::new(),
            search_edits: 0,
            total_pages: 1,
            latest: 0,
            status: LoadStatus::Idle,
        }
    }

    // ── Inputs ───────────────────────────────────────────────────────────

    /// Record new search input. The query is unchanged until the returned
    /// ticket is settled.
    pub fn set_search(&mut self, term: impl Into<String>) -> SearchTicket {
        self.search_input = term.into();
        self.search_edits += 1;
        SearchTicket(self.search_edits)
    }

    /// Apply the search input if `ticket` is still the latest edit. Returns
    /// to page 1 and returns `true` when the search term changed.
    pub fn settle_search(&mut self, ticket: SearchTicket) -> bool {
        if ticket.0 != self.search_edits {
            tracing::trace!(
                ticket = ticket.0,
                latest = self.search_edits,
                "Search input still changing"
            );
            return false;
        }
        self.apply_search()
    }

    /// Apply the search input now, skipping the debounce (e.g. on Enter).
    /// Outstanding tickets become stale.
    pub fn submit_search(&mut self) -> bool {
        self.search_edits += 1;
        self.apply_search()
    }

    fn apply_search(&mut self) -> bool {
        if self.search_input == self.query.search {
            return false;
        }
        self.query.search = self.search_input.clone();
        self.go_to_first_page();
        true
    }

    /// Select or deselect a facet value. Returns to page 1.
    pub fn toggle_filter(&mut self, facet: Facet, value: &str) -> bool {
        let selected = self.query.filters.toggle(facet, value);
        self.go_to_first_page();
        selected
    }

    /// Drop every facet selection. Returns to page 1.
    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.go_to_first_page();
    }

    /// Jump to `page` (1-based; zero is treated as 1).
    pub fn set_page(&mut self, page: u32) {
        self.query = self.query.clone().page(page);
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.set_page(self.page() + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.set_page(self.page() - 1);
        }
    }

    fn go_to_first_page(&mut self) {
        self.set_page(1);
    }

    // ── Requests ─────────────────────────────────────────────────────────

    /// Issue a new request for the current query. Supersedes any in flight.
    pub fn begin_request(&mut self) -> (RequestTicket, CardQuery) {
        self.latest += 1;
        self.status = LoadStatus::Loading;
        (RequestTicket(self.latest), self.query.clone())
    }

    /// Apply a response. Returns `false` (and changes nothing) when `ticket`
    /// is not the newest request issued.
    pub fn complete<E: std::fmt::Display>(
        &mut self,
        ticket: RequestTicket,
        result: Result<CardPage, E>,
    ) -> bool {
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "Ignoring stale card response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.total_pages = page.total_pages.max(1);
                self.status = LoadStatus::Loaded(page);
            }
            Err(e) => {
                tracing::error!("Failed to fetch cards: {}", e);
                self.status = LoadStatus::Failed(LOAD_ERROR_MESSAGE);
            }
        }
        true
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn query(&self) -> &CardQuery {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.query.current_page()
    }

    /// The search term the query uses.
    pub fn search(&self) -> &str {
        &self.query.search
    }

    /// The search input as typed, settled or not.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn has_pending_search(&self) -> bool {
        self.search_input != self.query.search
    }

    pub fn filters(&self) -> &CardFilters {
        &self.query.filters
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Cards to render; empty unless the last load succeeded.
    pub fn cards(&self) -> &[crate::domain::card::Card] {
        match &self.status {
            LoadStatus::Loaded(page) => &page.cards,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.total_pages
    }

    /// Pagination links for the current page.
    pub fn page_links(&self) -> Vec<PageLink> {
        page_links(self.page(), self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Card;

    fn page_of(total_count: u32, page: u32) -> CardPage {
        let cards: Vec<Card> = vec![serde_json::from_value(serde_json::json!({ "id": "c1" })).unwrap()];
        CardPage {
            count: cards.len() as u32,
            cards,
            page,
            page_size: 20,
            total_count,
            total_pages: crate::domain::card::total_pages(total_count, 20),
        }
    }

    #[test]
    fn test_new_session_starts_on_page_one() {
        let session = BrowseSession::new(20);
        assert_eq!(session.page(), 1);
        assert_eq!(session.status(), &LoadStatus::Idle);
        assert_eq!(session.total_pages(), 1);
        assert!(!session.has_previous());
        assert!(!session.has_next());
    }

    #[test]
    fn test_search_and_filters_reset_page() {
        let mut session = BrowseSession::new(20);
        session.set_page(4);
        let ticket = session.set_search("char");
        assert!(session.settle_search(ticket));
        assert_eq!(session.page(), 1);
        assert_eq!(session.search(), "char");

        session.set_page(3);
        assert!(session.toggle_filter(Facet::Types, "Fire"));
        assert_eq!(session.page(), 1);
        assert_eq!(session.query().q(), r#"name:"*char*" AND types:Fire"#);

        session.set_page(2);
        assert!(!session.toggle_filter(Facet::Types, "Fire"));
        assert_eq!(session.page(), 1);
        assert!(session.filters().is_empty());
    }

    #[test]
    fn test_latest_response_wins() {
        let mut session = BrowseSession::new(20);
        let (first, _) = session.begin_request();
        session.set_search("mew");
        session.submit_search();
        let (second, query) = session.begin_request();
        assert_eq!(query.search, "mew");

        assert!(session.complete::<String>(second, Ok(page_of(45, 1))));
        assert!(!session.complete::<String>(first, Ok(page_of(1000, 1))));
        assert_eq!(session.total_pages(), 3);
        assert_eq!(session.cards().len(), 1);
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut session = BrowseSession::new(20);
        let (stale, _) = session.begin_request();
        let (fresh, _) = session.begin_request();
        assert!(!session.complete::<String>(stale, Err("boom".into())));
        assert!(session.is_loading());
        assert!(session.complete::<String>(fresh, Ok(page_of(10, 1))));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_failure_shows_message_without_cards() {
        let mut session = BrowseSession::new(20);
        let (t1, _) = session.begin_request();
        session.complete::<String>(t1, Ok(page_of(10, 1)));
        let (t2, _) = session.begin_request();
        assert!(session.cards().is_empty());
        session.complete::<String>(t2, Err("connection reset".into()));
        assert_eq!(session.error(), Some(LOAD_ERROR_MESSAGE));
        assert!(session.cards().is_empty());
    }

    #[test]
    fn test_only_latest_search_edit_settles() {
        let mut session = BrowseSession::new(20);
        session.set_page(3);
        let p = session.set_search("p");
        let pi = session.set_search("pi");
        let pika = session.set_search("pika");

        assert!(!session.settle_search(p));
        assert!(!session.settle_search(pi));
        assert_eq!(session.search(), "");
        assert_eq!(session.search_input(), "pika");
        assert!(session.has_pending_search());
        assert_eq!(session.page(), 3);

        assert!(session.settle_search(pika));
        assert_eq!(session.search(), "pika");
        assert_eq!(session.page(), 1);
        assert!(!session.has_pending_search());
    }

    #[test]
    fn test_settling_unchanged_term_keeps_page() {
        let mut session = BrowseSession::new(20);
        let t = session.set_search("mew");
        session.settle_search(t);
        session.set_page(2);

        let t = session.set_search("mew");
        assert!(!session.settle_search(t));
        assert_eq!(session.page(), 2);
    }

    #[test]
    fn test_submit_skips_debounce() {
        let mut session = BrowseSession::new(20);
        let pending = session.set_search("eevee");
        assert!(session.submit_search());
        assert_eq!(session.search(), "eevee");
        assert!(!session.settle_search(pending));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_search_debounce_waits() {
        let start = std::time::Instant::now();
        search_debounce().await;
        assert!(start.elapsed() >= SEARCH_DEBOUNCE);
    }

    #[test]
    fn test_next_previous_respect_bounds() {
        let mut session = BrowseSession::new(20);
        let (t, _) = session.begin_request();
        session.complete::<String>(t, Ok(page_of(45, 1)));
        session.previous_page();
        assert_eq!(session.page(), 1);
        session.next_page();
        session.next_page();
        session.next_page();
        assert_eq!(session.page(), 3);
        assert!(!session.has_next());
        assert_eq!(
            session.page_links(),
            vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
        );
    }

    #[test]
    fn test_empty_result_keeps_one_page() {
        let mut session = BrowseSession::new(20);
        let (t, _) = session.begin_request();
        let mut empty = page_of(0, 1);
        empty.cards.clear();
        session.complete::<String>(t, Ok(empty));
        assert_eq!(session.total_pages(), 1);
        assert!(session.cards().is_empty());
    }
}
