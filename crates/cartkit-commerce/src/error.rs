//! Commerce error types.

use thiserror::Error;

/// Errors raised while deriving views over cart and catalog state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A cart entry references a product the catalog does not contain.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

/// Failure reported by an external collaborator (checkout or catalog fetch).
///
/// The `Display` output is the human-readable message captured into cart
/// state when a checkout fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be completed.
    #[error("{0}")]
    Transport(String),

    /// The collaborator answered with something unreadable.
    #[error("{0}")]
    InvalidResponse(String),

    /// The collaborator failed without giving a reason.
    #[error("")]
    Unknown,
}

impl ApiError {
    /// Message suitable for display; empty when none is available.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidResponse(e.to_string())
    }
}
