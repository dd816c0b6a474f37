//! In-crate test doubles shared by the service tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use chrono::Utc;

use shopkeep_catalog::{Product, ProductField, ProductStore, ProductType};
use shopkeep_core::{
    AttributeGroupId, AttributeId, CatalogError, CatalogResult, CombinationId, ProductId,
    UpdateReason,
};

use crate::attributes::{Attribute, AttributeGroup, AttributeStore};
use crate::combination::{Combination, CombinationStore, NewCombination};

/// Single-threaded in-memory catalog backing every port the services need.
///
/// Writes replace records wholesale; field masking is an infra concern and is
/// tested there.
pub(crate) struct MemCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
    combinations: Mutex<BTreeMap<CombinationId, Combination>>,
    next_combination: Mutex<u64>,
    groups: Vec<AttributeGroup>,
}

impl MemCatalog {
    pub(crate) fn new() -> Self {
        Self {
            products: Mutex::new(HashMap::new()),
            combinations: Mutex::new(BTreeMap::new()),
            next_combination: Mutex::new(1),
            groups: standard_groups(),
        }
    }

    pub(crate) fn seed_product(&self, id: u64, product_type: ProductType) -> ProductId {
        let product_id = ProductId::new(id).unwrap();
        let product = Product::new(product_id, "Shirt", "SHI-1", product_type, Utc::now());
        self.products
            .lock()
            .unwrap()
            .insert(product_id, product);
        product_id
    }

    pub(crate) fn product(&self, id: ProductId) -> Product {
        self.products.lock().unwrap().get(&id).cloned().unwrap()
    }

    pub(crate) fn combination(&self, id: CombinationId) -> Combination {
        self.combinations.lock().unwrap().get(&id).cloned().unwrap()
    }
}

/// color: red(11) green(12) blue(13); size: S(21) M(22).
pub(crate) fn standard_groups() -> Vec<AttributeGroup> {
    let attribute = |id: u64, name: &str| Attribute {
        id: AttributeId::new(id).unwrap(),
        name: name.to_string(),
    };
    vec![
        AttributeGroup {
            id: AttributeGroupId::new(1).unwrap(),
            name: "color".to_string(),
            attributes: vec![
                attribute(11, "red"),
                attribute(12, "green"),
                attribute(13, "blue"),
            ],
        },
        AttributeGroup {
            id: AttributeGroupId::new(2).unwrap(),
            name: "size".to_string(),
            attributes: vec![attribute(21, "S"), attribute(22, "M")],
        },
    ]
}

pub(crate) fn group_id(v: u64) -> AttributeGroupId {
    AttributeGroupId::new(v).unwrap()
}

pub(crate) fn attr(v: u64) -> AttributeId {
    AttributeId::new(v).unwrap()
}

impl ProductStore for MemCatalog {
    fn get(&self, id: ProductId) -> CatalogResult<Product> {
        self.products
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound(id))
    }

    fn insert(&self, product: Product) -> CatalogResult<()> {
        self.products.lock().unwrap().insert(product.id(), product);
        Ok(())
    }

    fn partial_update(
        &self,
        product: &Product,
        _fields: &[ProductField],
        reason: UpdateReason,
    ) -> CatalogResult<()> {
        let mut products = self.products.lock().unwrap();
        if !products.contains_key(&product.id()) {
            return Err(CatalogError::constraint(reason, "unknown product"));
        }
        products.insert(product.id(), product.clone());
        Ok(())
    }
}

impl CombinationStore for MemCatalog {
    fn get(&self, id: CombinationId) -> CatalogResult<Combination> {
        self.combinations
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(CatalogError::CombinationNotFound(id))
    }

    fn insert(&self, combination: NewCombination) -> CatalogResult<Combination> {
        let mut next = self.next_combination.lock().unwrap();
        let id = CombinationId::new(*next).unwrap();
        *next += 1;

        let stored = Combination::new(
            id,
            combination.product_id,
            combination.attributes,
            combination.reference,
            combination.quantity,
            combination.is_default,
        );
        self.combinations
            .lock()
            .unwrap()
            .insert(id, stored.clone());
        Ok(stored)
    }

    fn update(&self, combination: &Combination) -> CatalogResult<()> {
        let mut combinations = self.combinations.lock().unwrap();
        if !combinations.contains_key(&combination.id()) {
            return Err(CatalogError::CombinationNotFound(combination.id()));
        }
        combinations.insert(combination.id(), combination.clone());
        Ok(())
    }

    fn remove(&self, id: CombinationId) -> CatalogResult<()> {
        self.combinations
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::CombinationNotFound(id))
    }

    fn by_product(&self, product: ProductId) -> CatalogResult<Vec<Combination>> {
        Ok(self
            .combinations
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.product_id() == product)
            .cloned()
            .collect())
    }
}

impl AttributeStore for MemCatalog {
    fn group(&self, id: AttributeGroupId) -> CatalogResult<AttributeGroup> {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::validation(format!("unknown attribute group {id}")))
    }

    fn all_groups(&self) -> CatalogResult<Vec<AttributeGroup>> {
        Ok(self.groups.clone())
    }
}
