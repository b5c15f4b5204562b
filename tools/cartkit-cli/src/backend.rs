//! Local stand-ins for the catalog and checkout services.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use cartkit_commerce::api::{CheckoutApi, CheckoutResponse, ProductsApi};
use cartkit_commerce::cart::CartItems;
use cartkit_commerce::catalog::{Catalog, Product};
use cartkit_commerce::ApiError;

use crate::config::{CheckoutConfig, SimulatedOutcome};

/// Catalog read from a JSON file.
///
/// Accepts either the feed shape (`{"id": {...}, ...}`) or a plain list of
/// product records.
pub struct JsonCatalog {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Keyed(Catalog),
    List(Vec<Product>),
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(content: &str) -> Result<Catalog, ApiError> {
        let catalog = match serde_json::from_str::<CatalogFile>(content)? {
            CatalogFile::Keyed(catalog) => catalog,
            CatalogFile::List(products) => products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        };
        Ok(catalog)
    }
}

#[async_trait]
impl ProductsApi for JsonCatalog {
    async fn get_products(&self) -> Result<Catalog, ApiError> {
        tracing::debug!(path = %self.path.display(), "reading catalog");
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ApiError::Transport(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        Self::parse(&content)
    }
}

/// Checkout backend answering from configuration after a fixed delay.
pub struct SimulatedCheckout {
    outcome: SimulatedOutcome,
    error_message: String,
    latency: Duration,
}

impl SimulatedCheckout {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self {
            outcome: config.outcome,
            error_message: config.error_message.clone(),
            latency: config.latency(),
        }
    }
}

#[async_trait]
impl CheckoutApi for SimulatedCheckout {
    async fn checkout(&self, items: &CartItems) -> Result<CheckoutResponse, ApiError> {
        tracing::debug!(entries = items.len(), outcome = ?self.outcome, "simulated checkout");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.outcome {
            SimulatedOutcome::Success => Ok(CheckoutResponse::accepted()),
            SimulatedOutcome::Declined => Ok(CheckoutResponse::declined()),
            SimulatedOutcome::Error if self.error_message.is_empty() => Err(ApiError::Unknown),
            SimulatedOutcome::Error => Err(ApiError::Transport(self.error_message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartkit_commerce::{Currency, Money};
    use std::io::Write;

    #[test]
    fn test_parse_keyed_catalog() {
        let catalog = JsonCatalog::parse(
            r#"{"a": {"id": "a", "name": "Alpha", "description": "", "price": 3,
                      "imageURL": "", "imageAlt": "", "imageCredit": ""}}"#,
        )
        .unwrap();
        assert_eq!(catalog["a"].price, Money::new(300, Currency::USD));
    }

    #[test]
    fn test_parse_list_catalog() {
        let catalog = JsonCatalog::parse(
            r#"[{"id": "a", "name": "Alpha", "price": 1.25},
                {"id": "b", "name": "Beta", "price": 2}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["a"].price, Money::new(125, Currency::USD));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            JsonCatalog::parse("not json"),
            Err(ApiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_fraction_of_cent() {
        assert!(matches!(
            JsonCatalog::parse(r#"[{"id": "a", "name": "Alpha", "price": 0.125}]"#),
            Err(ApiError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_read_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "x", "name": "X", "price": 0.5}}]"#).unwrap();

        let catalog = JsonCatalog::new(file.path()).get_products().await.unwrap();
        assert_eq!(catalog["x"].price, Money::new(50, Currency::USD));
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let err = JsonCatalog::new("/definitely/not/here.json")
            .get_products()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_simulated_outcomes() {
        let items = CartItems::new();
        let mut config = CheckoutConfig {
            latency_ms: 0,
            ..CheckoutConfig::default()
        };

        let ok = SimulatedCheckout::from_config(&config).checkout(&items).await;
        assert_eq!(ok, Ok(CheckoutResponse::accepted()));

        config.outcome = SimulatedOutcome::Declined;
        let declined = SimulatedCheckout::from_config(&config).checkout(&items).await;
        assert_eq!(declined, Ok(CheckoutResponse::declined()));

        config.outcome = SimulatedOutcome::Error;
        config.error_message = "network down".to_string();
        let err = SimulatedCheckout::from_config(&config)
            .checkout(&items)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "network down");

        config.error_message.clear();
        let err = SimulatedCheckout::from_config(&config)
            .checkout(&items)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Unknown);
    }
}
