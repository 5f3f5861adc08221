//! Active cart slot for single-threaded UIs.
//!
//! The UI mounts a `CartStore` per thread (WASM is single-threaded) and
//! components reach it through `use_cart`. Reaching for the cart with
//! nothing mounted is an integration bug, so `use_cart` panics.
//!
//! Mounts nest: the innermost live mount is active, and dropping a guard
//! removes only its own store.

use super::store::CartStore;
use crate::error::CartError;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

thread_local! {
    static MOUNTED_CARTS: RefCell<Vec<(u64, CartStore)>> = const { RefCell::new(Vec::new()) };
    static NEXT_MOUNT: Cell<u64> = const { Cell::new(0) };
}

/// Installs a `CartStore` as this thread's active cart.
pub struct CartProvider;

impl CartProvider {
    /// Mount `store`. It stays mounted until the guard drops, and is active
    /// while no later mount is alive.
    pub fn mount(store: CartStore) -> CartProviderGuard {
        let id = NEXT_MOUNT.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        MOUNTED_CARTS.with(|carts| {
            let mut carts = carts.borrow_mut();
            if !carts.is_empty() {
                tracing::debug!(depth = carts.len(), "CartProvider nested inside another");
            }
            carts.push((id, store));
        });
        CartProviderGuard {
            id,
            _not_send: PhantomData,
        }
    }

    pub fn is_mounted() -> bool {
        MOUNTED_CARTS.with(|carts| carts.try_borrow().map(|c| !c.is_empty()).unwrap_or(true))
    }
}

/// Unmounts its cart on drop.
#[must_use = "the cart is unmounted as soon as the guard is dropped"]
pub struct CartProviderGuard {
    id: u64,
    _not_send: PhantomData<*const ()>,
}

impl CartProviderGuard {
    /// Unmount now and hand back the store.
    pub fn unmount(self) -> Option<CartStore> {
        let store = take_mount(self.id);
        std::mem::forget(self);
        store
    }
}

impl Drop for CartProviderGuard {
    fn drop(&mut self) {
        take_mount(self.id);
    }
}

fn take_mount(id: u64) -> Option<CartStore> {
    MOUNTED_CARTS.with(|carts| {
        let mut carts = carts.try_borrow_mut().ok()?;
        let index = carts.iter().position(|(mount, _)| *mount == id)?;
        Some(carts.remove(index).1)
    })
}

/// Run `f` against the active cart, or `CartError::NoActiveStore`.
///
/// Calling back into the cart from inside `f` panics (the carts are borrowed).
pub fn try_use_cart<R>(f: impl FnOnce(&mut CartStore) -> R) -> Result<R, CartError> {
    MOUNTED_CARTS.with(|carts| {
        let mut carts = carts.borrow_mut();
        match carts.last_mut() {
            Some((_, store)) => Ok(f(store)),
            None => Err(CartError::NoActiveStore),
        }
    })
}

/// Run `f` against the active cart.
///
/// # Panics
///
/// Panics if no cart is mounted on this thread.
pub fn use_cart<R>(f: impl FnOnce(&mut CartStore) -> R) -> R {
    match try_use_cart(f) {
        Ok(result) => result,
        Err(e) => panic!("{}", e),
    }
}
