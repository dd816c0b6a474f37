//! Store and collaborator ports consumed by the catalog services.
//!
//! All ports are synchronous and object-safe; each one gets a blanket
//! implementation for `Arc<S>` so a single backing store can be shared across
//! services without wrapper types.

use std::sync::Arc;

use shopkeep_core::{CatalogResult, PackId, ProductId, ShopConstraint, UpdateReason};

use crate::product::{Product, ProductField};

/// Product persistence.
pub trait ProductStore: Send + Sync {
    /// Load a product. Fails with `ProductNotFound` if the id does not resolve.
    fn get(&self, id: ProductId) -> CatalogResult<Product>;

    /// Create a product record.
    fn insert(&self, product: Product) -> CatalogResult<()>;

    /// Write back exactly the named fields of `product`.
    ///
    /// A rejected write surfaces as `ConstraintViolation` tagged with the
    /// given reason.
    fn partial_update(
        &self,
        product: &Product,
        fields: &[ProductField],
        reason: UpdateReason,
    ) -> CatalogResult<()>;
}

/// Pack-to-product association management.
pub trait PackStore: Send + Sync {
    /// Replace the pack's contents. Idempotent; an empty slice clears all
    /// associations.
    fn set_contents(&self, pack: PackId, products: &[ProductId]) -> CatalogResult<()>;
}

/// Removal of every combination a product carries. Idempotent.
pub trait CombinationDeleter: Send + Sync {
    fn delete_all(&self, product: ProductId) -> CatalogResult<()>;
}

/// Downloadable-file storage for virtual products.
pub trait VirtualAssetStore: Send + Sync {
    /// Remove the product's downloadable file. No-op when none exists.
    fn delete_file(&self, product: ProductId) -> CatalogResult<()>;
}

/// Inventory zeroing across a shop scope.
pub trait StockResetter: Send + Sync {
    fn reset_stock(&self, product: ProductId, scope: ShopConstraint) -> CatalogResult<()>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get(&self, id: ProductId) -> CatalogResult<Product> {
        (**self).get(id)
    }

    fn insert(&self, product: Product) -> CatalogResult<()> {
        (**self).insert(product)
    }

    fn partial_update(
        &self,
        product: &Product,
        fields: &[ProductField],
        reason: UpdateReason,
    ) -> CatalogResult<()> {
        (**self).partial_update(product, fields, reason)
    }
}

impl<S> PackStore for Arc<S>
where
    S: PackStore + ?Sized,
{
    fn set_contents(&self, pack: PackId, products: &[ProductId]) -> CatalogResult<()> {
        (**self).set_contents(pack, products)
    }
}

impl<S> CombinationDeleter for Arc<S>
where
    S: CombinationDeleter + ?Sized,
{
    fn delete_all(&self, product: ProductId) -> CatalogResult<()> {
        (**self).delete_all(product)
    }
}

impl<S> VirtualAssetStore for Arc<S>
where
    S: VirtualAssetStore + ?Sized,
{
    fn delete_file(&self, product: ProductId) -> CatalogResult<()> {
        (**self).delete_file(product)
    }
}

impl<S> StockResetter for Arc<S>
where
    S: StockResetter + ?Sized,
{
    fn reset_stock(&self, product: ProductId, scope: ShopConstraint) -> CatalogResult<()> {
        (**self).reset_stock(product, scope)
    }
}
