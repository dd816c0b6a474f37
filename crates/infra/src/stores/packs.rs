use std::collections::HashMap;
use std::sync::RwLock;

use shopkeep_catalog::PackStore;
use shopkeep_core::{CatalogError, CatalogResult, PackId, ProductId};

/// In-memory pack-to-product associations. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryPackStore {
    contents: RwLock<HashMap<PackId, Vec<ProductId>>>,
}

impl InMemoryPackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of a pack; empty when the pack has none.
    pub fn contents(&self, pack: PackId) -> CatalogResult<Vec<ProductId>> {
        Ok(self
            .contents
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .get(&pack)
            .cloned()
            .unwrap_or_default())
    }
}

impl PackStore for InMemoryPackStore {
    fn set_contents(&self, pack: PackId, products: &[ProductId]) -> CatalogResult<()> {
        let mut contents = self
            .contents
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?;
        if products.is_empty() {
            contents.remove(&pack);
        } else {
            contents.insert(pack, products.to_vec());
        }
        Ok(())
    }
}
