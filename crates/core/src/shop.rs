//! Shop scoping for multi-shop deployments.

use serde::{Deserialize, Serialize};

use crate::id::ShopId;
use crate::value_object::ValueObject;

/// Selects the set of shops an operation applies to.
///
/// Shop-independent attributes (such as the product type) always operate with
/// [`ShopConstraint::AllShops`], whatever shop the caller happens to be in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopConstraint {
    /// Every shop the product is associated with.
    AllShops,
    /// A single shop.
    Shop(ShopId),
}

impl ShopConstraint {
    pub fn all_shops() -> Self {
        Self::AllShops
    }

    pub fn shop(id: ShopId) -> Self {
        Self::Shop(id)
    }

    pub fn is_all_shops(&self) -> bool {
        matches!(self, Self::AllShops)
    }
}

impl ValueObject for ShopConstraint {}
