use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use shopkeep_catalog::{Product, ProductField, ProductStore};
use shopkeep_core::{CatalogError, CatalogResult, ProductId, UpdateReason};

/// In-memory product store.
///
/// Intended for tests/dev. The write lock serializes concurrent updates to
/// the same record, which is what gives one transition at a time per product.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for InMemoryProductStore {
    fn get(&self, id: ProductId) -> CatalogResult<Product> {
        self.records
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .get(&id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    fn insert(&self, product: Product) -> CatalogResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?;
        if records.contains_key(&product.id()) {
            return Err(CatalogError::validation(format!(
                "product {} already exists",
                product.id()
            )));
        }
        records.insert(product.id(), product);
        Ok(())
    }

    fn partial_update(
        &self,
        product: &Product,
        fields: &[ProductField],
        reason: UpdateReason,
    ) -> CatalogResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?;
        let stored = records
            .get_mut(&product.id())
            .ok_or_else(|| CatalogError::constraint(reason, "unknown product"))?;

        // Apply the masked copy to a scratch record first: a write that
        // leaves the denormalized fields out of step with the type never
        // reaches the stored one.
        let mut updated = stored.clone();
        updated.copy_fields(product, fields);
        if !updated.derived_fields_consistent() {
            return Err(CatalogError::constraint(
                reason,
                "denormalized fields disagree with the product type",
            ));
        }
        updated.touch(Utc::now());

        *stored = updated;
        Ok(())
    }
}
