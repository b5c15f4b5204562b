//! Product record.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product as delivered by the catalog source.
///
/// Wire names follow the catalog feed: `imageURL`, `imageAlt`, `imageCredit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Image location.
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    /// Image alt text.
    #[serde(default)]
    pub image_alt: String,
    /// Image attribution.
    #[serde(default)]
    pub image_credit: String,
}

impl Product {
    /// Create a product with a name and price; other fields empty.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            image_url: String::new(),
            image_alt: String::new(),
            image_credit: String::new(),
        }
    }

    /// Set the image fields.
    pub fn with_image(
        mut self,
        url: impl Into<String>,
        alt: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        self.image_url = url.into();
        self.image_alt = alt.into();
        self.image_credit = credit.into();
        self
    }
}
