// src/application/commands/cart/service.rs
use std::sync::Arc;

use crate::domain::{
    cart::{Cart, CartId, CartStorage},
    product::ProductReadRepository,
};

/// Shopper-facing cart operations. Every operation loads the stored cart,
/// applies one aggregate operation and writes the result back.
pub struct CartService {
    pub(super) storage: Arc<dyn CartStorage>,
    pub(super) products: Arc<dyn ProductReadRepository>,
}

/// A cart as read from storage. `readable` is false when the read failed and
/// the cart was started empty in its place.
pub(super) struct LoadedCart {
    pub(super) cart: Cart,
    readable: bool,
}

impl CartService {
    pub fn new(storage: Arc<dyn CartStorage>, products: Arc<dyn ProductReadRepository>) -> Self {
        Self { storage, products }
    }

    /// A missing or unreadable cart is treated as empty.
    pub(super) async fn load(&self, id: CartId) -> LoadedCart {
        match self.storage.load(&id).await {
            Ok(lines) => LoadedCart {
                cart: lines.map(Cart::from_lines).unwrap_or_default(),
                readable: true,
            },
            Err(err) => {
                tracing::warn!(cart_id = %id, error = %err, "cart storage read failed, starting empty");
                LoadedCart {
                    cart: Cart::new(),
                    readable: false,
                }
            }
        }
    }

    /// Write a mutated cart back. A cart whose read failed is never written:
    /// the stored copy may still exist and must not be overwritten by a
    /// stand-in.
    pub(super) async fn write_back(&self, id: CartId, loaded: &LoadedCart) {
        if !loaded.readable {
            tracing::warn!(cart_id = %id, "skipping cart write after failed read");
            return;
        }
        self.persist(id, &loaded.cart).await;
    }

    /// Write failures are logged; the in-memory result is still returned to
    /// the caller.
    pub(super) async fn persist(&self, id: CartId, cart: &Cart) {
        let result = if cart.is_empty() {
            self.storage.remove(&id).await
        } else {
            self.storage.save(&id, cart.lines()).await
        };
        if let Err(err) = result {
            tracing::warn!(cart_id = %id, error = %err, "cart storage write failed");
        }
    }
}
