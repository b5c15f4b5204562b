//! Root state combining the cart and product containers.

use cartkit_core::{Reducer, Store};
use serde::{Deserialize, Serialize};

use crate::cart::{self, CartAction, CartState};
use crate::catalog::{self, ProductsAction, ProductsState};

/// Whole application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub cart: CartState,
    pub products: ProductsState,
}

/// Any intent the application store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Cart(CartAction),
    Products(ProductsAction),
}

impl From<CartAction> for AppAction {
    fn from(action: CartAction) -> Self {
        AppAction::Cart(action)
    }
}

impl From<ProductsAction> for AppAction {
    fn from(action: ProductsAction) -> Self {
        AppAction::Products(action)
    }
}

/// Routes each intent to the container that owns it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;

    fn reduce(&self, state: &mut AppState, action: AppAction) {
        match action {
            AppAction::Cart(action) => cart::reduce(&mut state.cart, action),
            AppAction::Products(action) => catalog::reduce(&mut state.products, action),
        }
    }
}

/// The application store.
pub type AppStore = Store<AppReducer>;

/// Create the store with empty cart and catalog.
pub fn create_store() -> AppStore {
    Store::with_default_state(AppReducer)
}
