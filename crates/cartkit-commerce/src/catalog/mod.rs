//! Product catalog module.
//!
//! Contains the product record, the catalog container and its loader.

mod loader;
mod product;
mod state;

pub use loader::load_products;
pub use product::Product;
pub use state::{reduce, Catalog, ProductsAction, ProductsState};
