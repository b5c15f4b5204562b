//! Storefront state for cartkit.
//!
//! Two containers share one [`AppStore`]:
//!
//! - **Cart**: quantity per product, checkout lifecycle, last error
//! - **Catalog**: products keyed by id, filled by a one-shot fetch
//!
//! Intents go in through `dispatch`, views come out through `select` and
//! the memoized [`Selectors`]. Checkout and catalog fetch are delegated to
//! the [`CheckoutApi`] and [`ProductsApi`] collaborators.
//!
//! # Example
//!
//! ```rust,ignore
//! use cartkit_commerce::prelude::*;
//!
//! let store = create_store();
//! let selectors = Selectors::new();
//!
//! load_products(&store, &products_api).await?;
//! store.dispatch(CartAction::AddToCart(ProductId::new("a")));
//!
//! let total = store.select(|s| selectors.total_price(s))?;
//! checkout_cart(&store, &checkout_api).await?;
//! ```

pub mod api;
pub mod app;
pub mod error;
pub mod ids;
pub mod money;
pub mod selectors;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::{ApiError, CommerceError};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::api::{CheckoutApi, CheckoutResponse, ProductsApi};
    pub use crate::app::{create_store, AppAction, AppReducer, AppState, AppStore};
    pub use crate::error::{ApiError, CommerceError};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
    pub use crate::selectors::{get_num_items, Selectors};

    // Cart
    pub use crate::cart::{CartAction, CartItems, CartState, CheckoutState};

    // Catalog
    pub use crate::catalog::{load_products, Catalog, Product, ProductsAction, ProductsState};

    // Checkout
    pub use crate::checkout::checkout_cart;
}
