//! List the catalog.

use anyhow::{Context as _, Result};

use cartkit_commerce::prelude::*;

use super::ProductsArgs;
use crate::backend::JsonCatalog;
use crate::context::Context;
use crate::output::truncate;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let store = create_store();
    let catalog = catalog_source(args.file.as_deref(), ctx);

    load_products(&store, &catalog)
        .await
        .context("Failed to load catalog")?;

    let products = store.select(|s| s.products.sorted().into_iter().cloned().collect::<Vec<_>>());

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    let widths = [10, 28, 10, 40];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "DESCRIPTION"], &widths);
    for product in &products {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &truncate(&product.name, widths[1]),
                &product.price.display(),
                &truncate(&product.description, widths[3]),
            ],
            &widths,
        );
    }

    Ok(())
}

/// Catalog source: explicit file, else the configured path.
pub fn catalog_source(file: Option<&str>, ctx: &Context) -> JsonCatalog {
    let path = file.unwrap_or(&ctx.config.catalog.path);
    JsonCatalog::new(ctx.resolve_path(path))
}
