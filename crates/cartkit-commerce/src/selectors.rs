//! Derived views over cart and catalog state.

use std::sync::Arc;

use cartkit_core::Selector;

use crate::app::AppState;
use crate::cart::CartItems;
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Total number of units in the cart. Not cached.
pub fn get_num_items(state: &AppState) -> i64 {
    tracing::trace!("calling num items");
    count_items(&state.cart.items)
}

/// Sum of all quantities.
pub fn count_items(items: &CartItems) -> i64 {
    items.values().fold(0, |acc, q| acc.saturating_add(*q))
}

/// Price of the cart: `sum(price * quantity)`.
///
/// Fails with `ProductNotFound` when an entry has no catalog record. An
/// empty cart totals zero USD. Positive and negative lines are summed
/// separately, so whether the result overflows does not depend on the
/// iteration order of `items`.
pub fn total_price(items: &CartItems, products: &Catalog) -> Result<Money, CommerceError> {
    let mut credit: u128 = 0;
    let mut debit: u128 = 0;

    for (id, quantity) in items {
        let product = products
            .get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
        let line = i128::from(product.price.amount_cents) * i128::from(*quantity);

        let side = if line < 0 { &mut debit } else { &mut credit };
        *side = side
            .checked_add(line.unsigned_abs())
            .ok_or(CommerceError::Overflow)?;
    }

    let credit = i128::try_from(credit).map_err(|_| CommerceError::Overflow)?;
    let debit = i128::try_from(debit).map_err(|_| CommerceError::Overflow)?;
    let cents = i64::try_from(credit - debit).map_err(|_| CommerceError::Overflow)?;

    Ok(Money::new(cents, Currency::USD))
}

type ItemsInput = Arc<CartItems>;
type PriceInput = (Arc<CartItems>, Arc<Catalog>);

/// Memoized selectors for one store.
///
/// Built once at the composition root next to the store; each cache keys on
/// the identity of the `Arc`s it reads.
#[derive(Debug)]
pub struct Selectors {
    num_items: Selector<AppState, ItemsInput, i64>,
    total_price: Selector<AppState, PriceInput, Result<String, CommerceError>>,
}

impl Selectors {
    pub fn new() -> Self {
        Self {
            num_items: Selector::new(
                "memoized_num_items",
                |s: &AppState| Arc::clone(&s.cart.items),
                |items: &ItemsInput| count_items(items),
            ),
            total_price: Selector::new(
                "total_price",
                |s: &AppState| {
                    (
                        Arc::clone(&s.cart.items),
                        Arc::clone(&s.products.products),
                    )
                },
                |(items, products): &PriceInput| {
                    total_price(items, products).map(|total| total.display_amount())
                },
            ),
        }
    }

    /// Total number of units, recomputed only when the cart items change.
    pub fn memoized_num_items(&self, state: &AppState) -> i64 {
        self.num_items.select(state)
    }

    /// Cart price with two decimals (e.g. `"6.00"`), recomputed only when
    /// the cart items or the catalog change.
    pub fn total_price(&self, state: &AppState) -> Result<String, CommerceError> {
        self.total_price.select(state)
    }

    /// The underlying item-count selector.
    pub fn num_items_selector(&self) -> &Selector<AppState, ItemsInput, i64> {
        &self.num_items
    }

    /// The underlying total-price selector.
    pub fn total_price_selector(
        &self,
    ) -> &Selector<AppState, PriceInput, Result<String, CommerceError>> {
        &self.total_price
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}
