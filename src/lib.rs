//! # Pokeshop
//!
//! Catalog, cart and browse logic for a Pokémon trading-card storefront,
//! usable from native and WASM front ends.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Card types, cart reducer, browse session (always available, WASM-safe)
//! 2. **Storage** — Key/value backends for the persisted cart: memory, files (native), `localStorage` (WASM)
//! 3. **HTTP API** — `PokemonTcgHttp` against the Pokémon TCG API (single attempt per call)
//! 4. **High-Level Client** — `PokeshopClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokeshop::prelude::*;
//!
//! let client = PokeshopClient::builder().build()?;
//! let mut session = client.browse_session();
//! let ticket = session.set_search("pikachu");
//! search_debounce().await;
//! if session.settle_search(ticket) {
//!     client.cards().refresh(&mut session).await;
//! }
//!
//! let mut cart = CartStore::restore(MemoryStore::new());
//! if let Some(card) = session.cards().first() {
//!     cart.add(card.clone());
//! }
//! println!("{}", format_price(cart.total_price()));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// API URL constants.
pub mod network;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Key/value storage backends for cart persistence.
pub mod storage;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client for the catalog API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `PokeshopClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::{format_price, CardId};

    // Domain types — card catalog
    pub use crate::domain::card::{
        Card, CardFilters, CardImages, CardMarket, CardPage, CardQuery, CardSet, Facet,
        FilterOptions, MarketPrices, SetOption,
    };

    // Domain types — cart
    pub use crate::domain::cart::{
        try_use_cart, use_cart, CartAction, CartLine, CartProvider, CartProviderGuard, CartState,
        CartStore, CART_STORAGE_KEY,
    };

    // Domain types — browse
    pub use crate::domain::browse::{
        BrowseSession, LoadStatus, PageLink, SearchTicket, LOAD_ERROR_MESSAGE, SEARCH_DEBOUNCE,
    };

    // Errors
    pub use crate::error::{CartError, ShopError, StorageError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Storage backends
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::storage::FileStore;
    #[cfg(feature = "wasm-storage")]
    pub use crate::storage::LocalStorage;
    pub use crate::storage::{KeyValueStore, MemoryStore};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::domain::browse::search_debounce;
    #[cfg(feature = "http")]
    pub use crate::client::{CardsClient, FacetsClient, PokeshopClient, PokeshopClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::error::HttpError;
}
