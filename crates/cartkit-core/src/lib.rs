//! Core state-container primitives for cartkit.
//!
//! This crate provides:
//! - `Reducer` - Pure, synchronous state-transition trait
//! - `Store` - Explicit state container with `dispatch` / `select`
//! - `Selector` - Memoized projection keyed on input identity

mod reducer;
mod selector;
mod store;

pub use reducer::*;
pub use selector::*;
pub use store::*;
