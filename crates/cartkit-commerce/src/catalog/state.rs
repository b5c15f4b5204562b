//! Product container state.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::ProductId;

/// Products keyed by id.
pub type Catalog = HashMap<ProductId, Product>;

/// State of the product container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductsState {
    /// Loaded catalog. Replaced wholesale on each load.
    pub products: Arc<Catalog>,
}

impl ProductsState {
    /// Look up a product.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Products sorted by id, for stable listing.
    pub fn sorted(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }

    /// Whether anything has been loaded.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Intents accepted by the product container.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    /// A catalog fetch completed.
    Received(Catalog),
}

/// Apply a products intent.
pub fn reduce(state: &mut ProductsState, action: ProductsAction) {
    match action {
        ProductsAction::Received(products) => {
            state.products = Arc::new(products);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog(ids: &[&str]) -> Catalog {
        ids.iter()
            .map(|id| {
                (
                    ProductId::new(*id),
                    Product::new(*id, format!("Product {id}"), Money::new(100, Currency::USD)),
                )
            })
            .collect()
    }

    #[test]
    fn test_received_replaces_catalog() {
        let mut state = ProductsState::default();
        reduce(&mut state, ProductsAction::Received(catalog(&["a", "b"])));
        assert_eq!(state.products.len(), 2);

        reduce(&mut state, ProductsAction::Received(catalog(&["c"])));
        assert_eq!(state.products.len(), 1);
        assert!(state.get("a").is_none());
        assert!(state.get("c").is_some());
    }

    #[test]
    fn test_received_new_allocation() {
        let mut state = ProductsState::default();
        let before = Arc::clone(&state.products);
        reduce(&mut state, ProductsAction::Received(catalog(&["a"])));
        assert!(!Arc::ptr_eq(&before, &state.products));
    }

    #[test]
    fn test_sorted_listing() {
        let mut state = ProductsState::default();
        reduce(&mut state, ProductsAction::Received(catalog(&["b", "c", "a"])));
        let ids: Vec<&str> = state.sorted().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
