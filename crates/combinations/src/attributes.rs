//! Attribute groups and their values.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shopkeep_core::{AttributeGroupId, AttributeId, CatalogResult};

/// A single attribute value, e.g. "red" within the "color" group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
}

/// A named family of attribute values, e.g. "color" or "size".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub id: AttributeGroupId,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl AttributeGroup {
    pub fn contains(&self, attribute: AttributeId) -> bool {
        self.attributes.iter().any(|a| a.id == attribute)
    }
}

/// Read access to the attribute-group registry.
pub trait AttributeStore: Send + Sync {
    /// Load one group. Fails with `Validation` if the group is unknown.
    fn group(&self, id: AttributeGroupId) -> CatalogResult<AttributeGroup>;

    /// Every group, for selection UIs upstream.
    fn all_groups(&self) -> CatalogResult<Vec<AttributeGroup>>;
}

impl<S> AttributeStore for Arc<S>
where
    S: AttributeStore + ?Sized,
{
    fn group(&self, id: AttributeGroupId) -> CatalogResult<AttributeGroup> {
        (**self).group(id)
    }

    fn all_groups(&self) -> CatalogResult<Vec<AttributeGroup>> {
        (**self).all_groups()
    }
}
