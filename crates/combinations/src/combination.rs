use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shopkeep_core::{AttributeId, CatalogResult, CombinationId, ProductId};

/// One concrete variant of a combination-type product.
///
/// The attribute tuple is the combination's identity within its product: two
/// combinations of the same product never carry the same attribute set. The
/// list is held sorted so set comparison is a plain slice comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    id: CombinationId,
    product_id: ProductId,
    attributes: Vec<AttributeId>,
    reference: String,
    quantity: i64,
    is_default: bool,
}

impl Combination {
    pub fn new(
        id: CombinationId,
        product_id: ProductId,
        attributes: Vec<AttributeId>,
        reference: impl Into<String>,
        quantity: i64,
        is_default: bool,
    ) -> Self {
        Self {
            id,
            product_id,
            attributes: normalize(attributes),
            reference: reference.into(),
            quantity,
            is_default,
        }
    }

    pub fn id(&self) -> CombinationId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Sorted, duplicate-free attribute tuple.
    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_reference(&mut self, reference: impl Into<String>) {
        self.reference = reference.into();
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    /// Whether this combination is made of exactly the given attributes.
    pub fn matches_attributes(&self, attributes: &[AttributeId]) -> bool {
        self.attributes == normalize(attributes.to_vec())
    }
}

/// A combination about to be created; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCombination {
    pub product_id: ProductId,
    pub attributes: Vec<AttributeId>,
    pub reference: String,
    pub quantity: i64,
    pub is_default: bool,
}

fn normalize(mut attributes: Vec<AttributeId>) -> Vec<AttributeId> {
    attributes.sort();
    attributes.dedup();
    attributes
}

/// Combination persistence.
pub trait CombinationStore: Send + Sync {
    /// Load a combination. Fails with `CombinationNotFound` if absent.
    fn get(&self, id: CombinationId) -> CatalogResult<Combination>;

    /// Persist a new combination and return it with its assigned id.
    fn insert(&self, combination: NewCombination) -> CatalogResult<Combination>;

    /// Replace a stored combination.
    fn update(&self, combination: &Combination) -> CatalogResult<()>;

    /// Remove a combination. Fails with `CombinationNotFound` if absent.
    fn remove(&self, id: CombinationId) -> CatalogResult<()>;

    /// Every combination of the product, ordered by ascending id.
    fn by_product(&self, product: ProductId) -> CatalogResult<Vec<Combination>>;
}

impl<S> CombinationStore for Arc<S>
where
    S: CombinationStore + ?Sized,
{
    fn get(&self, id: CombinationId) -> CatalogResult<Combination> {
        (**self).get(id)
    }

    fn insert(&self, combination: NewCombination) -> CatalogResult<Combination> {
        (**self).insert(combination)
    }

    fn update(&self, combination: &Combination) -> CatalogResult<()> {
        (**self).update(combination)
    }

    fn remove(&self, id: CombinationId) -> CatalogResult<()> {
        (**self).remove(id)
    }

    fn by_product(&self, product: ProductId) -> CatalogResult<Vec<Combination>> {
        (**self).by_product(product)
    }
}
