//! Checkout module.
//!
//! Bridges the cart container to the external checkout backend.

mod flow;

pub use flow::checkout_cart;
