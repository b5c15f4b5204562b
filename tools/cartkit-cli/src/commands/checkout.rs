//! Build a cart from intents and check it out.

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use cartkit_commerce::prelude::*;

use super::products::catalog_source;
use super::CheckoutArgs;
use crate::backend::SimulatedCheckout;
use crate::context::Context;
use crate::output::checkout_badge;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    cart: CartState,
    num_items: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_error: Option<String>,
}

impl Report {
    fn new(state: &AppState, selectors: &Selectors) -> Self {
        let (total_price, total_error) = match selectors.total_price(state) {
            Ok(total) => (Some(total), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            cart: state.cart.clone(),
            num_items: selectors.memoized_num_items(state),
            total_price,
            total_error,
        }
    }
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let store = create_store();
    let selectors = Selectors::new();

    load_products(&store, &catalog_source(args.file.as_deref(), ctx))
        .await
        .context("Failed to load catalog")?;

    for intent in args.intents {
        store.dispatch(intent.0);
    }

    print_cart(&store, &selectors, ctx, "Cart");

    if args.dry_run {
        ctx.output.info("Dry run, checkout skipped");
        return report(&store, &selectors, ctx);
    }

    let mut backend_config = ctx.config.checkout.clone();
    if let Some(outcome) = args.outcome {
        backend_config.outcome = outcome;
    }
    if let Some(latency_ms) = args.latency_ms {
        backend_config.latency_ms = latency_ms;
    }
    let backend = SimulatedCheckout::from_config(&backend_config);

    let spinner = ctx.output.spinner("Checking out...");
    let result = checkout_cart(&store, &backend).await;
    spinner.finish_and_clear();

    report(&store, &selectors, ctx)?;

    match result {
        Ok(response) if response.success => {
            ctx.output.success("Checkout complete");
            Ok(())
        }
        Ok(_) => bail!("Checkout declined"),
        Err(e) if e.message().is_empty() => bail!("Checkout failed"),
        Err(e) => bail!("Checkout failed: {}", e),
    }
}

fn print_cart(store: &AppStore, selectors: &Selectors, ctx: &Context, title: &str) {
    if ctx.output.is_json() {
        return;
    }

    let cart = store.select(|s| s.cart.clone());
    ctx.output.header(title);

    let mut entries: Vec<(&ProductId, &i64)> = cart.items.iter().collect();
    entries.sort();
    for (id, quantity) in entries {
        let name = store.select(|s| s.products.get(id.as_str()).map(|p| p.name.clone()));
        match name {
            Some(name) => ctx.output.list_item(&format!("{} x {} ({})", quantity, name, id)),
            None => ctx.output.list_item(&format!("{} x {} (not in catalog)", quantity, id)),
        }
    }

    ctx.output.kv(
        "items",
        &store.select(|s| selectors.memoized_num_items(s)).to_string(),
    );
    match store.select(|s| selectors.total_price(s)) {
        Ok(total) => ctx.output.kv("total", &total),
        Err(e) => ctx.output.warn(&format!("Total unavailable: {}", e)),
    }
}

fn report(store: &AppStore, selectors: &Selectors, ctx: &Context) -> Result<()> {
    let state = store.snapshot();

    if ctx.output.is_json() {
        ctx.output.json(&Report::new(&state, selectors));
        return Ok(());
    }

    ctx.output.header("Checkout");
    ctx.output
        .kv("state", &checkout_badge(state.cart.checkout_state));
    if !state.cart.error_message.is_empty() {
        ctx.output.kv("error", &state.cart.error_message);
    }
    if ctx.output.is_verbose() {
        ctx.output.kv("dispatches", &store.version().to_string());
    }
    ctx.output.kv(
        "remaining items",
        &selectors.memoized_num_items(&state).to_string(),
    );
    Ok(())
}
