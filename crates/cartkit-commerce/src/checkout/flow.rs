//! Checkout orchestration.

use crate::api::{CheckoutApi, CheckoutResponse};
use crate::app::AppStore;
use crate::cart::CartAction;
use crate::error::ApiError;

/// Run one checkout attempt against `api`.
///
/// Marks the cart `Loading`, submits the current items exactly once and
/// feeds the outcome back into the cart. Items are sent as they are, an
/// empty cart included. Nothing is retried, and a second call while one is
/// in flight is not prevented.
///
/// The store lock is only taken for the dispatches and the item snapshot,
/// so the cart stays readable and writable while the request is pending.
pub async fn checkout_cart<A>(store: &AppStore, api: &A) -> Result<CheckoutResponse, ApiError>
where
    A: CheckoutApi + ?Sized,
{
    store.dispatch(CartAction::CheckoutPending);
    let items = store.select(|s| std::sync::Arc::clone(&s.cart.items));
    tracing::debug!(entries = items.len(), "submitting checkout");

    match api.checkout(&items).await {
        Ok(response) => {
            if response.success {
                tracing::info!("checkout accepted");
            } else {
                tracing::warn!("checkout declined");
            }
            store.dispatch(CartAction::CheckoutFulfilled(response));
            Ok(response)
        }
        Err(e) => {
            tracing::warn!(error = %e, "checkout failed");
            store.dispatch(CartAction::CheckoutRejected {
                message: e.message(),
            });
            Err(e)
        }
    }
}
