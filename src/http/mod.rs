pub mod client;

pub use client::PokemonTcgHttp;
