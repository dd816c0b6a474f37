//! Catalog error model.

use thiserror::Error;

use crate::id::{CombinationId, ProductId};

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Reason tag carried by a rejected partial update.
///
/// Lets callers distinguish which write was refused when several stores are
/// touched during one logical operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UpdateReason {
    /// The product-type change itself was refused.
    ProductType,
    /// The default-combination pointer update was refused.
    DefaultCombination,
    /// A combination row update was refused.
    CombinationDetails,
    /// A pack-contents update was refused.
    PackContents,
    /// A stock-quantity update was refused.
    StockQuantity,
}

impl UpdateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateReason::ProductType => "product type",
            UpdateReason::DefaultCombination => "default combination",
            UpdateReason::CombinationDetails => "combination details",
            UpdateReason::PackContents => "pack contents",
            UpdateReason::StockQuantity => "stock quantity",
        }
    }
}

impl core::fmt::Display for UpdateReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing records, refused writes). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A value failed validation (e.g. unknown product type).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure, zero id).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The product does not exist in the product store.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// The combination does not exist in the combination store.
    #[error("combination {0} not found")]
    CombinationNotFound(CombinationId),

    /// The persistence layer refused a write.
    #[error("failed update ({reason}): {message}")]
    ConstraintViolation {
        reason: UpdateReason,
        message: String,
    },

    /// The backing store failed internally (e.g. poisoned lock).
    #[error("store failure: {0}")]
    Store(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn product_not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }

    pub fn combination_not_found(id: CombinationId) -> Self {
        Self::CombinationNotFound(id)
    }

    pub fn constraint(reason: UpdateReason, msg: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            reason,
            message: msg.into(),
        }
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
