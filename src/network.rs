//! Network URL constants for the Pokémon TCG catalog.

/// Default catalog REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.pokemontcg.io/v2";

/// Header carrying the optional catalog API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";
