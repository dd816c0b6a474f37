use std::collections::BTreeMap;
use std::sync::RwLock;

use shopkeep_combinations::{Combination, CombinationStore, NewCombination};
use shopkeep_core::{CatalogError, CatalogResult, CombinationId, ProductId};

/// In-memory combination store with sequence-assigned ids. Intended for
/// tests/dev.
#[derive(Debug)]
pub struct InMemoryCombinationStore {
    rows: RwLock<BTreeMap<CombinationId, Combination>>,
    next_id: RwLock<u64>,
}

impl Default for InMemoryCombinationStore {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: RwLock::new(1),
        }
    }
}

impl InMemoryCombinationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CombinationStore for InMemoryCombinationStore {
    fn get(&self, id: CombinationId) -> CatalogResult<Combination> {
        self.rows
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .get(&id)
            .cloned()
            .ok_or(CatalogError::CombinationNotFound(id))
    }

    fn insert(&self, combination: NewCombination) -> CatalogResult<Combination> {
        let mut next_id = self
            .next_id
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?;
        let id = CombinationId::new(*next_id)?;
        *next_id += 1;

        let stored = Combination::new(
            id,
            combination.product_id,
            combination.attributes,
            combination.reference,
            combination.quantity,
            combination.is_default,
        );
        self.rows
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .insert(id, stored.clone());
        Ok(stored)
    }

    fn update(&self, combination: &Combination) -> CatalogResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?;
        if !rows.contains_key(&combination.id()) {
            return Err(CatalogError::CombinationNotFound(combination.id()));
        }
        rows.insert(combination.id(), combination.clone());
        Ok(())
    }

    fn remove(&self, id: CombinationId) -> CatalogResult<()> {
        self.rows
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::CombinationNotFound(id))
    }

    fn by_product(&self, product: ProductId) -> CatalogResult<Vec<Combination>> {
        Ok(self
            .rows
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .values()
            .filter(|c| c.product_id() == product)
            .cloned()
            .collect())
    }
}
