//! Combination generation from attribute selections.

use tracing::info;

use shopkeep_catalog::ProductStore;
use shopkeep_core::{
    AttributeGroupId, AttributeId, CatalogError, CatalogResult, CombinationId, ProductId,
    UpdateReason,
};

use crate::attributes::AttributeStore;
use crate::combination::{CombinationStore, NewCombination};

/// Builds the cartesian product of an attribute selection into combinations.
///
/// The selection names one or more attributes per attribute group; every way
/// of picking one attribute from each group yields one combination. Tuples
/// the product already carries are skipped, so generating the same selection
/// twice creates nothing new.
pub struct CombinationGenerator<P, C, A> {
    products: P,
    combinations: C,
    attributes: A,
}

impl<P, C, A> CombinationGenerator<P, C, A>
where
    P: ProductStore,
    C: CombinationStore,
    A: AttributeStore,
{
    pub fn new(products: P, combinations: C, attributes: A) -> Self {
        Self {
            products,
            combinations,
            attributes,
        }
    }

    /// Generate combinations for `product_id` and return the created ids in
    /// deterministic order (groups by ascending id, selection order within a
    /// group, later groups varying fastest).
    ///
    /// The product must be of the combination type. If it has no default
    /// combination yet, the first created one becomes the default and the
    /// product's pointer is persisted.
    pub fn generate(
        &self,
        product_id: ProductId,
        selection: &[(AttributeGroupId, Vec<AttributeId>)],
    ) -> CatalogResult<Vec<CombinationId>> {
        let mut product = self.products.get(product_id)?;
        if !product.product_type().has_combinations() {
            return Err(CatalogError::validation(format!(
                "product {product_id} is of type '{}' and cannot carry combinations",
                product.product_type()
            )));
        }

        let groups = self.validated_selection(selection)?;
        let existing = self.combinations.by_product(product_id)?;

        let tuples = cartesian(&groups);
        let tuple_count = tuples.len();

        let mut created = Vec::new();
        for tuple in tuples {
            let already_there = existing.iter().any(|c| c.matches_attributes(&tuple))
                || created.iter().any(|c: &crate::Combination| c.matches_attributes(&tuple));
            if already_there {
                continue;
            }
            let inserted = self.combinations.insert(NewCombination {
                product_id,
                attributes: tuple,
                reference: String::new(),
                quantity: 0,
                is_default: false,
            })?;
            created.push(inserted);
        }

        if product.cache_default_attribute().is_none() {
            if let Some(first) = created.first() {
                let mut first = first.clone();
                first.set_default(true);
                self.combinations.update(&first)?;

                let fields = product.set_default_combination(Some(first.id()))?;
                self.products
                    .partial_update(&product, &fields, UpdateReason::DefaultCombination)?;
            }
        }

        info!(
            %product_id,
            created = created.len(),
            skipped = tuple_count - created.len(),
            "combinations generated"
        );
        Ok(created.iter().map(|c| c.id()).collect())
    }

    /// Checks the selection shape and membership, dedups attributes within a
    /// group, and orders groups by id.
    fn validated_selection(
        &self,
        selection: &[(AttributeGroupId, Vec<AttributeId>)],
    ) -> CatalogResult<Vec<(AttributeGroupId, Vec<AttributeId>)>> {
        if selection.is_empty() {
            return Err(CatalogError::validation("attribute selection is empty"));
        }

        let mut groups: Vec<(AttributeGroupId, Vec<AttributeId>)> =
            Vec::with_capacity(selection.len());
        for (group_id, picked) in selection {
            if groups.iter().any(|(known, _)| known == group_id) {
                return Err(CatalogError::validation(format!(
                    "attribute group {group_id} listed twice"
                )));
            }
            if picked.is_empty() {
                return Err(CatalogError::validation(format!(
                    "no attributes selected for group {group_id}"
                )));
            }

            let group = self.attributes.group(*group_id)?;
            let mut members = Vec::with_capacity(picked.len());
            for attribute in picked {
                if !group.contains(*attribute) {
                    return Err(CatalogError::validation(format!(
                        "attribute {attribute} does not belong to group '{}'",
                        group.name
                    )));
                }
                if !members.contains(attribute) {
                    members.push(*attribute);
                }
            }
            groups.push((*group_id, members));
        }

        groups.sort_by_key(|(id, _)| *id);
        Ok(groups)
    }
}

/// One tuple per way of picking a single attribute from every group.
fn cartesian(groups: &[(AttributeGroupId, Vec<AttributeId>)]) -> Vec<Vec<AttributeId>> {
    let mut tuples: Vec<Vec<AttributeId>> = vec![Vec::new()];
    for (_, picks) in groups {
        let mut next = Vec::with_capacity(tuples.len() * picks.len());
        for tuple in &tuples {
            for pick in picks {
                let mut grown = tuple.clone();
                grown.push(*pick);
                next.push(grown);
            }
        }
        tuples = next;
    }
    tuples
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopkeep_catalog::ProductType;

    use super::*;
    use crate::testing::{attr, group_id, MemCatalog};

    fn generator(
        catalog: &Arc<MemCatalog>,
    ) -> CombinationGenerator<Arc<MemCatalog>, Arc<MemCatalog>, Arc<MemCatalog>> {
        CombinationGenerator::new(catalog.clone(), catalog.clone(), catalog.clone())
    }

    fn colors_and_sizes() -> Vec<(AttributeGroupId, Vec<AttributeId>)> {
        vec![
            (group_id(1), vec![attr(11), attr(12), attr(13)]),
            (group_id(2), vec![attr(21), attr(22)]),
        ]
    }

    #[test]
    fn generates_the_full_cartesian_product() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Combinations);

        let created = generator(&catalog)
            .generate(product_id, &colors_and_sizes())
            .unwrap();

        assert_eq!(created.len(), 6);
        let stored = catalog.by_product(product_id).unwrap();
        assert_eq!(stored.len(), 6);
        assert!(stored.iter().all(|c| c.attributes().len() == 2));
    }

    #[test]
    fn regeneration_creates_nothing_new() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Combinations);
        let generator = generator(&catalog);

        generator.generate(product_id, &colors_and_sizes()).unwrap();
        let second = generator.generate(product_id, &colors_and_sizes()).unwrap();

        assert!(second.is_empty());
        assert_eq!(catalog.by_product(product_id).unwrap().len(), 6);
    }

    #[test]
    fn widening_the_selection_only_fills_the_gap() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Combinations);
        let generator = generator(&catalog);

        let narrow = vec![(group_id(1), vec![attr(11), attr(12)])];
        generator.generate(product_id, &narrow).unwrap();

        let wide = vec![(group_id(1), vec![attr(11), attr(12), attr(13)])];
        let created = generator.generate(product_id, &wide).unwrap();

        assert_eq!(created.len(), 1);
        let blue = catalog.combination(created[0]);
        assert_eq!(blue.attributes(), &[attr(13)]);
    }

    #[test]
    fn first_created_combination_becomes_the_default() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Combinations);

        let created = generator(&catalog)
            .generate(product_id, &colors_and_sizes())
            .unwrap();

        let product = catalog.product(product_id);
        assert_eq!(product.cache_default_attribute(), Some(created[0]));

        let stored = catalog.by_product(product_id).unwrap();
        let defaults: Vec<_> = stored.iter().filter(|c| c.is_default()).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].id(), created[0]);
    }

    #[test]
    fn later_runs_keep_the_existing_default() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Combinations);
        let generator = generator(&catalog);

        let first = generator
            .generate(product_id, &[(group_id(2), vec![attr(21)])])
            .unwrap();
        generator
            .generate(product_id, &[(group_id(2), vec![attr(22)])])
            .unwrap();

        assert_eq!(
            catalog.product(product_id).cache_default_attribute(),
            Some(first[0])
        );
    }

    #[test]
    fn rejects_a_non_combination_product() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Standard);

        let err = generator(&catalog)
            .generate(product_id, &colors_and_sizes())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn rejects_bad_selections() {
        let catalog = Arc::new(MemCatalog::new());
        let product_id = catalog.seed_product(1, ProductType::Combinations);
        let generator = generator(&catalog);

        // empty selection
        assert!(generator.generate(product_id, &[]).is_err());
        // empty group pick
        assert!(generator
            .generate(product_id, &[(group_id(1), vec![])])
            .is_err());
        // group listed twice
        assert!(generator
            .generate(
                product_id,
                &[
                    (group_id(1), vec![attr(11)]),
                    (group_id(1), vec![attr(12)]),
                ],
            )
            .is_err());
        // attribute from the wrong group
        assert!(generator
            .generate(product_id, &[(group_id(1), vec![attr(21)])])
            .is_err());
        // unknown group
        assert!(generator
            .generate(product_id, &[(group_id(99), vec![attr(11)])])
            .is_err());

        assert!(catalog.by_product(product_id).unwrap().is_empty());
    }

    #[test]
    fn missing_product_propagates() {
        let catalog = Arc::new(MemCatalog::new());
        let ghost = ProductId::new(404).unwrap();

        let err = generator(&catalog)
            .generate(ghost, &colors_and_sizes())
            .unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound(ghost));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Created count equals the product of the per-group pick counts
            /// on a fresh product.
            #[test]
            fn cardinality_is_the_product_of_pick_counts(colors in 1usize..=3, sizes in 1usize..=2) {
                let catalog = Arc::new(MemCatalog::new());
                let product_id = catalog.seed_product(1, ProductType::Combinations);

                let color_picks: Vec<_> = [attr(11), attr(12), attr(13)][..colors].to_vec();
                let size_picks: Vec<_> = [attr(21), attr(22)][..sizes].to_vec();
                let selection = vec![(group_id(1), color_picks), (group_id(2), size_picks)];

                let created = generator(&catalog).generate(product_id, &selection).unwrap();
                prop_assert_eq!(created.len(), colors * sizes);

                // A second run over the same selection is a no-op.
                let again = generator(&catalog).generate(product_id, &selection).unwrap();
                prop_assert!(again.is_empty());
            }
        }
    }
}
