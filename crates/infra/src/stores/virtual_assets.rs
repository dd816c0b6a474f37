use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopkeep_catalog::VirtualAssetStore;
use shopkeep_core::{CatalogError, CatalogResult, ProductId};

/// Downloadable file attached to a virtual product.
///
/// The stored name is opaque so the customer-facing display name can change
/// without moving anything on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualFile {
    pub stored_name: Uuid,
    pub display_name: String,
    pub size_bytes: u64,
}

impl VirtualFile {
    pub fn new(display_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            stored_name: Uuid::new_v4(),
            display_name: display_name.into(),
            size_bytes,
        }
    }
}

/// In-memory virtual-file registry. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryVirtualAssets {
    files: RwLock<HashMap<ProductId, VirtualFile>>,
}

impl InMemoryVirtualAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the product's downloadable file.
    pub fn attach(&self, product: ProductId, file: VirtualFile) -> CatalogResult<()> {
        self.files
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .insert(product, file);
        Ok(())
    }

    pub fn file(&self, product: ProductId) -> CatalogResult<Option<VirtualFile>> {
        Ok(self
            .files
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .get(&product)
            .cloned())
    }
}

impl VirtualAssetStore for InMemoryVirtualAssets {
    fn delete_file(&self, product: ProductId) -> CatalogResult<()> {
        self.files
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .remove(&product);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(v: u64) -> ProductId {
        ProductId::new(v).unwrap()
    }

    #[test]
    fn attach_then_delete() {
        let store = InMemoryVirtualAssets::new();
        store
            .attach(pid(1), VirtualFile::new("manual.pdf", 1024))
            .unwrap();
        assert!(store.file(pid(1)).unwrap().is_some());

        store.delete_file(pid(1)).unwrap();
        assert!(store.file(pid(1)).unwrap().is_none());
    }

    #[test]
    fn deleting_a_missing_file_is_a_no_op() {
        let store = InMemoryVirtualAssets::new();
        store.delete_file(pid(1)).unwrap();
    }

    #[test]
    fn reattaching_replaces_the_file() {
        let store = InMemoryVirtualAssets::new();
        store
            .attach(pid(1), VirtualFile::new("v1.zip", 10))
            .unwrap();
        store
            .attach(pid(1), VirtualFile::new("v2.zip", 20))
            .unwrap();
        let file = store.file(pid(1)).unwrap().unwrap();
        assert_eq!(file.display_name, "v2.zip");
        assert_eq!(file.size_bytes, 20);
    }
}
