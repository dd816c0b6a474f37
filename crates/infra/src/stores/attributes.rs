use std::sync::RwLock;

use shopkeep_combinations::{AttributeGroup, AttributeStore};
use shopkeep_core::{AttributeGroupId, CatalogError, CatalogResult};

/// In-memory attribute-group registry. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryAttributeStore {
    groups: RwLock<Vec<AttributeGroup>>,
}

impl InMemoryAttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(groups: Vec<AttributeGroup>) -> Self {
        Self {
            groups: RwLock::new(groups),
        }
    }

    pub fn add_group(&self, group: AttributeGroup) -> CatalogResult<()> {
        self.groups
            .write()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .push(group);
        Ok(())
    }
}

impl AttributeStore for InMemoryAttributeStore {
    fn group(&self, id: AttributeGroupId) -> CatalogResult<AttributeGroup> {
        self.groups
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::validation(format!("unknown attribute group {id}")))
    }

    fn all_groups(&self) -> CatalogResult<Vec<AttributeGroup>> {
        Ok(self
            .groups
            .read()
            .map_err(|_| CatalogError::store("lock poisoned"))?
            .clone())
    }
}
