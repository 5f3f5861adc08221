//! Domain modules organized as vertical slices.
//!
//! - `card` — Catalog types, wire types, query building, and the catalog sub-client
//! - `cart` — Cart state, reducer, persisted store, and the active-cart provider
//! - `browse` — Search/filter/page session state and pagination links

pub mod browse;
pub mod card;
pub mod cart;
