//! Cart state and reducer.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::CheckoutResponse;
use crate::ids::ProductId;

/// Quantity per product. Quantities are not validated: zero and negative
/// values set through [`CartAction::UpdateQuantity`] are kept as given.
pub type CartItems = HashMap<ProductId, i64>;

/// Checkout lifecycle.
///
/// `Ready -> Loading` when a checkout starts (also from `Error`);
/// `Loading -> Ready` on an accepted checkout;
/// `Loading -> Error` when declined or when the request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutState {
    /// A checkout request is outstanding.
    Loading,
    /// Idle.
    #[default]
    Ready,
    /// The last checkout was declined or failed.
    Error,
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Loading => "LOADING",
            CheckoutState::Ready => "READY",
            CheckoutState::Error => "ERROR",
        }
    }
}

impl fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State owned by the cart container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Quantity per product.
    ///
    /// Shared so that selectors can detect changes by identity. Every
    /// intent that changes the map goes through `Arc::make_mut`; intents
    /// that change nothing leave the `Arc` untouched.
    pub items: Arc<CartItems>,
    /// Checkout lifecycle status.
    pub checkout_state: CheckoutState,
    /// Failure message of the last checkout; empty unless `Error`.
    pub error_message: String,
}

impl CartState {
    /// Quantity recorded for a product.
    pub fn quantity(&self, id: &str) -> Option<i64> {
        self.items.get(id).copied()
    }

    /// Whether the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Intents accepted by the cart container.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one unit of a product.
    AddToCart(ProductId),
    /// Drop a product entirely.
    RemoveFromCart(ProductId),
    /// Overwrite a product's quantity.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// A checkout request was sent.
    CheckoutPending,
    /// The checkout backend answered.
    CheckoutFulfilled(CheckoutResponse),
    /// The checkout request failed.
    CheckoutRejected { message: String },
}

/// Apply a cart intent.
pub fn reduce(state: &mut CartState, action: CartAction) {
    match action {
        CartAction::AddToCart(id) => {
            let quantity = Arc::make_mut(&mut state.items).entry(id).or_insert(0);
            *quantity = quantity.saturating_add(1);
        }
        CartAction::RemoveFromCart(id) => {
            if state.items.contains_key(&id) {
                Arc::make_mut(&mut state.items).remove(&id);
            }
        }
        CartAction::UpdateQuantity { id, quantity } => {
            if state.items.get(&id) != Some(&quantity) {
                Arc::make_mut(&mut state.items).insert(id, quantity);
            }
        }
        CartAction::CheckoutPending => {
            transition(state, CheckoutState::Loading);
            state.error_message.clear();
        }
        CartAction::CheckoutFulfilled(response) => {
            if response.success {
                transition(state, CheckoutState::Ready);
                state.items = Arc::new(CartItems::new());
            } else {
                transition(state, CheckoutState::Error);
            }
        }
        CartAction::CheckoutRejected { message } => {
            transition(state, CheckoutState::Error);
            state.error_message = message;
        }
    }
}

fn transition(state: &mut CartState, to: CheckoutState) {
    tracing::debug!(from = %state.checkout_state, to = %to, "checkout state");
    state.checkout_state = to;
}
