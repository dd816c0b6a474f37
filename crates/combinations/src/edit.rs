//! Combination edits, single and bulk.

use tracing::debug;

use shopkeep_catalog::ProductStore;
use shopkeep_core::{CatalogError, CatalogResult, CombinationId, ProductId, UpdateReason};

use crate::combination::{Combination, CombinationStore};

/// Optional-field patch for a combination. Absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationEdit {
    pub quantity: Option<i64>,
    pub reference: Option<String>,
    /// `Some(true)` promotes the combination to default (demoting the
    /// previous one). `Some(false)` on the current default is refused: while
    /// combinations exist, exactly one of them is the default.
    pub make_default: Option<bool>,
}

impl CombinationEdit {
    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.reference.is_none() && self.make_default.is_none()
    }
}

/// Applies [`CombinationEdit`] patches, keeping the product's default pointer
/// in step when the default moves.
pub struct CombinationEditor<P, C> {
    products: P,
    combinations: C,
}

impl<P, C> CombinationEditor<P, C>
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

    pub fn apply(&self, id: CombinationId, edit: &CombinationEdit) -> CatalogResult<()> {
        let mut combination = self.combinations.get(id)?;

        if let Some(quantity) = edit.quantity {
            combination.set_quantity(quantity);
        }
        if let Some(reference) = &edit.reference {
            combination.set_reference(reference.clone());
        }
        match edit.make_default {
            Some(true) => self.promote(&mut combination)?,
            Some(false) if combination.is_default() => {
                return Err(CatalogError::validation(
                    "the default combination cannot be demoted directly; promote another one",
                ));
            }
            _ => {}
        }

        self.combinations.update(&combination)?;
        debug!(combination = %id, "combination updated");
        Ok(())
    }

    /// Apply the same patch to several combinations of one product.
    ///
    /// A default promotion cannot target more than one combination, and every
    /// id must belong to `product_id`.
    pub fn apply_bulk(
        &self,
        product_id: ProductId,
        ids: &[CombinationId],
        edit: &CombinationEdit,
    ) -> CatalogResult<()> {
        if edit.make_default == Some(true) && ids.len() > 1 {
            return Err(CatalogError::validation(
                "a bulk edit cannot promote more than one combination to default",
            ));
        }
        for id in ids {
            let combination = self.combinations.get(*id)?;
            if combination.product_id() != product_id {
                return Err(CatalogError::validation(format!(
                    "combination {id} does not belong to product {product_id}"
                )));
            }
        }
        for id in ids {
            self.apply(*id, edit)?;
        }
        Ok(())
    }

    fn promote(&self, combination: &mut Combination) -> CatalogResult<()> {
        if combination.is_default() {
            return Ok(());
        }

        for mut sibling in self.combinations.by_product(combination.product_id())? {
            if sibling.is_default() && sibling.id() != combination.id() {
                sibling.set_default(false);
                self.combinations.update(&sibling)?;
            }
        }
        combination.set_default(true);

        let mut product = self.products.get(combination.product_id())?;
        let fields = product.set_default_combination(Some(combination.id()))?;
        self.products
            .partial_update(&product, &fields, UpdateReason::DefaultCombination)?;
        Ok(())
    }
}
