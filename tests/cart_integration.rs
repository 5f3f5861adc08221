//! Integration tests for the persisted cart.
//!
//! Drives `CartStore` through the public API the way a storefront would:
//! add from search results, adjust quantities, reload from storage.

use std::str::FromStr;

use rust_decimal::Decimal;
use tokio_test::{assert_err, assert_ok};

use pokeshop::prelude::*;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A card as the catalog API returns it.
fn api_card(id: &str, name: &str, prices: serde_json::Value) -> Card {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "supertype": "Pokémon",
        "hp": "60",
        "types": ["Lightning"],
        "rarity": "Common",
        "images": {
            "small": format!("https://images.pokemontcg.io/{id}.png"),
            "large": format!("https://images.pokemontcg.io/{id}_hires.png")
        },
        "set": { "id": "base1", "name": "Base", "total": 102 },
        "cardmarket": {
            "url": format!("https://prices.pokemontcg.io/cardmarket/{id}"),
            "updatedAt": "2024/01/01",
            "prices": prices
        }
    }))
    .unwrap()
}

fn pikachu() -> Card {
    api_card(
        "test-id-1",
        "Pikachu",
        serde_json::json!({ "averageSellPrice": 10.99, "trendPrice": 11.50, "lowPrice": 9.99 }),
    )
}

fn charizard() -> Card {
    api_card(
        "test-id-2",
        "Charizard",
        serde_json::json!({ "averageSellPrice": 99.99, "trendPrice": 105.50, "lowPrice": 89.99 }),
    )
}

mod totals {
    use super::*;

    #[test]
    fn test_add_increment_update_remove() {
        let mut cart = CartStore::new(MemoryStore::new());
        let id = CardId::from("test-id-1");

        cart.add(pikachu());
        assert_eq!((cart.total_items(), cart.total_price()), (1, d("10.99")));

        cart.add(pikachu());
        assert_eq!((cart.total_items(), cart.total_price()), (2, d("21.98")));
        assert_eq!(cart.lines().len(), 1);

        cart.update_quantity(&id, 5);
        assert_eq!((cart.total_items(), cart.total_price()), (5, d("54.95")));

        cart.remove(&id);
        assert!(cart.is_empty());
        assert_eq!(cart.state(), &CartState::empty());
    }

    #[test]
    fn test_mixed_cart() {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.add(pikachu());
        cart.add(charizard());
        cart.add(pikachu());
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), d("121.97"));
        assert_eq!(format_price(cart.total_price()), "$ 121.97");

        let subtotals: Vec<_> = cart
            .lines()
            .iter()
            .map(|l| format_price(l.subtotal()))
            .collect();
        assert_eq!(subtotals, ["$ 21.98", "$ 99.99"]);
    }

    #[test]
    fn test_unpriced_card_is_free() {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.add(api_card("promo-1", "Promo", serde_json::json!({})));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(format_price(cart.total_price()), "$ 0.00");
    }
}

mod persistence {
    use super::*;

    #[test]
    fn test_reload_from_memory() {
        let storage = MemoryStore::new();
        {
            let mut cart = CartStore::restore(storage.clone());
            cart.add(charizard());
            cart.add(pikachu());
            cart.update_quantity(&CardId::from("test-id-1"), 4);
        }

        let cart = CartStore::restore(storage);
        let lines: Vec<_> = cart
            .lines()
            .iter()
            .map(|l| (l.id().as_str(), l.quantity))
            .collect();
        assert_eq!(lines, [("test-id-2", 1), ("test-id-1", 4)]);
        assert_eq!(cart.total_price(), d("143.95"));
        assert_eq!(cart.lines()[0].card, charizard());
    }

    #[test]
    fn test_clear_persists_empty_snapshot() {
        let storage = MemoryStore::new();
        let mut cart = CartStore::new(storage.clone());
        cart.add(pikachu());
        cart.clear();

        let raw = assert_ok!(storage.get(CART_STORAGE_KEY)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["totalItems"], 0);
        assert!(CartStore::restore(storage).is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty_and_recovers() {
        let storage = MemoryStore::with_entry(CART_STORAGE_KEY, "{\"items\": [");
        let mut cart = CartStore::restore(storage.clone());
        assert!(cart.is_empty());

        cart.add(pikachu());
        assert_eq!(CartStore::restore(storage).total_items(), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_reload_from_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("cart");
        {
            let mut cart = CartStore::restore(assert_ok!(FileStore::open(&dir)));
            cart.add(pikachu());
            cart.add(pikachu());
        }
        assert!(dir.join("pokemonCart.json").exists());

        let cart = CartStore::restore(assert_ok!(FileStore::open(&dir)));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), d("21.98"));
    }
}

mod provider {
    use super::*;

    #[test]
    fn test_components_share_the_mounted_cart() {
        let storage = MemoryStore::new();
        let guard = CartProvider::mount(CartStore::restore(storage.clone()));

        use_cart(|cart| {
            cart.add(pikachu());
        });
        let badge = use_cart(|cart| cart.total_items());
        assert_eq!(badge, 1);

        drop(guard);
        let err = assert_err!(try_use_cart(|cart| cart.total_items()));
        assert_eq!(err, CartError::NoActiveStore);
        assert_eq!(CartStore::restore(storage).total_items(), 1);
    }
}
