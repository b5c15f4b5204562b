//! Shopping cart module.
//!
//! Contains the cart state, its intents and the reducer applying them.

mod state;

pub use state::{reduce, CartAction, CartItems, CartState, CheckoutState};
