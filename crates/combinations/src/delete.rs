//! Combination removal, single, bulk, and whole-product.

use tracing::{debug, info};

use shopkeep_catalog::{CombinationDeleter, ProductStore};
use shopkeep_core::{CatalogError, CatalogResult, CombinationId, ProductId, UpdateReason};

use crate::combination::CombinationStore;

/// Removes combinations while keeping the owning product's
/// default-combination pointer valid: removing the default promotes the
/// lowest-id survivor, removing the last combination clears the pointer.
pub struct CombinationDeletion<P, C> {
    products: P,
    combinations: C,
}

impl<P, C> CombinationDeletion<P, C>
where
    P: ProductStore,
    C: CombinationStore,
{
    pub fn new(products: P, combinations: C) -> Self {
        Self {
            products,
            combinations,
        }
    }

    /// Remove one combination. Fails with `CombinationNotFound` if absent.
    pub fn delete(&self, id: CombinationId) -> CatalogResult<()> {
        let combination = self.combinations.get(id)?;
        self.combinations.remove(id)?;
        debug!(combination = %id, product = %combination.product_id(), "combination removed");

        if combination.is_default() {
            self.reassign_default(combination.product_id())?;
        }
        Ok(())
    }

    /// Remove several combinations of one product.
    ///
    /// Every id must resolve and belong to `product_id`; the batch is
    /// validated up front so a bad id removes nothing.
    pub fn delete_many(&self, product_id: ProductId, ids: &[CombinationId]) -> CatalogResult<()> {
        let mut batch = Vec::with_capacity(ids.len());
        for id in ids {
            let combination = self.combinations.get(*id)?;
            if combination.product_id() != product_id {
                return Err(CatalogError::validation(format!(
                    "combination {id} does not belong to product {product_id}"
                )));
            }
            batch.push(combination);
        }

        let mut removed_default = false;
        for combination in &batch {
            self.combinations.remove(combination.id())?;
            removed_default |= combination.is_default();
        }
        info!(product = %product_id, removed = batch.len(), "combinations removed");

        if removed_default {
            self.reassign_default(product_id)?;
        }
        Ok(())
    }

    /// After the default went away, point the product at the lowest-id
    /// survivor, or clear the pointer when none is left.
    fn reassign_default(&self, product_id: ProductId) -> CatalogResult<()> {
        let remaining = self.combinations.by_product(product_id)?;
        let successor = remaining.first().cloned();

        if let Some(mut successor) = successor.clone() {
            if !successor.is_default() {
                successor.set_default(true);
                self.combinations.update(&successor)?;
            }
        }

        let mut product = self.products.get(product_id)?;
        let pointer = successor.map(|c| c.id());
        if product.cache_default_attribute() != pointer {
            let fields = product.set_default_combination(pointer)?;
            self.products
                .partial_update(&product, &fields, UpdateReason::DefaultCombination)?;
        }
        Ok(())
    }
}

impl<P, C> CombinationDeleter for CombinationDeletion<P, C>
where
    P: ProductStore,
    C: CombinationStore,
{
    /// Remove every combination of the product and clear its default
    /// pointer. Idempotent: a product without combinations is left as-is.
    fn delete_all(&self, product_id: ProductId) -> CatalogResult<()> {
        let all = self.combinations.by_product(product_id)?;
        for combination in &all {
            self.combinations.remove(combination.id())?;
        }
        if !all.is_empty() {
            info!(product = %product_id, removed = all.len(), "all combinations removed");
        }

        let mut product = self.products.get(product_id)?;
        if product.cache_default_attribute().is_some() {
            let fields = product.set_default_combination(None)?;
            self.products
                .partial_update(&product, &fields, UpdateReason::DefaultCombination)?;
        }
        Ok(())
    }
}
