//! One-shot catalog fetch.

use crate::api::ProductsApi;
use crate::app::AppStore;
use crate::catalog::ProductsAction;
use crate::error::ApiError;

/// Fetch the catalog and hand it to the product container.
///
/// On failure the catalog is left as it was and the error goes back to the
/// caller; nothing is retried. Returns the number of products loaded.
pub async fn load_products<A>(store: &AppStore, api: &A) -> Result<usize, ApiError>
where
    A: ProductsApi + ?Sized,
{
    match api.get_products().await {
        Ok(products) => {
            let count = products.len();
            store.dispatch(ProductsAction::Received(products));
            tracing::info!(count, "catalog loaded");
            Ok(count)
        }
        Err(e) => {
            tracing::warn!(error = %e, "catalog fetch failed");
            Err(e)
        }
    }
}
