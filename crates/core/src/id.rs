//! Strongly-typed identifiers used across the catalog.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(NonZeroU64);

/// Identifier of a combination (product variant).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinationId(NonZeroU64);

/// Identifier of a pack. A pack is addressed by the id of its product record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackId(NonZeroU64);

/// Identifier of a shop (multi-shop deployments).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(NonZeroU64);

/// Identifier of an attribute value (e.g. "red", "XL").
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(NonZeroU64);

/// Identifier of an attribute group (e.g. "color", "size").
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeGroupId(NonZeroU64);

macro_rules! impl_numeric_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier from a raw value. Rejects zero.
            pub fn new(value: u64) -> Result<Self, CatalogError> {
                NonZeroU64::new(value).map(Self).ok_or_else(|| {
                    CatalogError::invalid_id(concat!($name, " must be a positive integer"))
                })
            }

            pub fn value(&self) -> u64 {
                self.0.get()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $t {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw: u64 = s
                    .parse()
                    .map_err(|e| CatalogError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::new(raw)
            }
        }
    };
}

impl_numeric_id!(ProductId, "ProductId");
impl_numeric_id!(CombinationId, "CombinationId");
impl_numeric_id!(PackId, "PackId");
impl_numeric_id!(ShopId, "ShopId");
impl_numeric_id!(AttributeId, "AttributeId");
impl_numeric_id!(AttributeGroupId, "AttributeGroupId");

impl From<ProductId> for PackId {
    fn from(value: ProductId) -> Self {
        PackId(value.0)
    }
}
